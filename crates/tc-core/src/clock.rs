//! Source of "today" for calendar computations.
//!
//! Calculations never read the wall clock directly. Callers either pass an
//! explicit date or hand in a [`Clock`]; production code uses
//! [`SystemClock`], tests use [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Something that can tell the current calendar date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's date, with the time of day stripped.
    fn today(&self) -> NaiveDate;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for FixedClock {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
