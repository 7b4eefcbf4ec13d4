use std::sync::Mutex;
use chrono::{Duration, NaiveDateTime, Utc};

// Clock supplies the timestamps stamped on books
pub trait Clock: Sync + Send {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

// ManualClock only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn set(&self, time: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = time;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
