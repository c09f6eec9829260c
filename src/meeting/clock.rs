//! Source of "now" for future-meeting checks.

use chrono::{Local, NaiveDateTime};

/// Supplies the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub current_time: NaiveDateTime,
}

impl FixedClock {
    pub fn new(time: NaiveDateTime) -> Self {
        Self { current_time: time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.current_time
    }
}
