use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn is_finished(&self) -> bool;
    fn is_reading(&self) -> bool;
}
