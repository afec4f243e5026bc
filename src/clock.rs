//! Injectable time source
//!
//! Every generator reads "now" through [`Clock`] instead of the ambient
//! system time, so tests can pin the calendar and order synthesis stays
//! deterministic under a fixed instant.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant. Used for deterministic runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
