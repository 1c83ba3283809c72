use std::fmt;

use chrono::{DateTime, FixedOffset, Local};

/// Source of the wall-clock time used for `date` and `datetime` fields.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local system time with its current UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
