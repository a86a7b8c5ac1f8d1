//! Public holidays: a school calendar with declared days off.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::SchoolCalendar;
use crate::date::strip_time;

/// Weekends plus an explicit set of public holidays.
///
/// Dates are deduplicated by calendar day; the order of insertion does not
/// matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicHolidays {
    dates: BTreeSet<NaiveDate>,
}

impl PublicHolidays {
    /// An empty set: only weekends are days off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a holiday. Returns `false` if it was already declared.
    pub fn add(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Declare the calendar day containing `instant` a holiday.
    pub fn add_instant(&mut self, instant: NaiveDateTime) -> bool {
        self.add(strip_time(instant))
    }

    /// Withdraw a previously declared holiday.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    /// Return `true` if `date` was declared a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of declared holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Declared holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for PublicHolidays {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for PublicHolidays {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

impl SchoolCalendar for PublicHolidays {
    fn name(&self) -> &str {
        "Public Holidays"
    }

    fn is_school_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.dates.contains(&date)
    }
}
