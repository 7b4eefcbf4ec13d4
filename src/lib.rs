pub mod books;
pub mod catalog;

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod utils {
    pub mod clock;
    pub mod date;
    pub mod ids;
    pub mod logging;
}
