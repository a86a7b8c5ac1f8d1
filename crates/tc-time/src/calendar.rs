//! `SchoolCalendar` trait and the weekend-only calendar.
//!
//! A school calendar knows which dates are instructional ("school") days.
//! Weekends are never school days; concrete calendars may exclude more.

use chrono::NaiveDate;
use tc_core::errors::Result;

use crate::date::{date_range, DateExt};

/// A calendar of instructional days.
pub trait SchoolCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if classes are held on `date`.
    fn is_school_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is not a school day.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_school_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        date.is_weekend()
    }

    /// Every school day in `[from, to]`, in order.
    fn school_days(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        date_range(from, to)
            .filter(|d| self.is_school_day(*d))
            .collect()
    }

    /// The first school day on or after `date`.
    fn following_school_day(&self, mut date: NaiveDate) -> Result<NaiveDate> {
        while self.is_holiday(date) {
            date = date.next_day()?;
        }
        Ok(date)
    }

    /// The last school day on or before `date`.
    fn preceding_school_day(&self, mut date: NaiveDate) -> Result<NaiveDate> {
        while self.is_holiday(date) {
            date = date.prev_day()?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` school days. The starting date itself is not
    /// counted.
    fn advance_school_days(&self, mut date: NaiveDate, n: u32) -> Result<NaiveDate> {
        let mut remaining = n;
        while remaining > 0 {
            date = date.next_day()?;
            if self.is_school_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the school days between `d1` (exclusive) and `d2`
    /// (inclusive). Negative if `d2 < d1`.
    fn school_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let (sign, start, end) = if d2 > d1 { (1, d1, d2) } else { (-1, d2, d1) };
        let count = date_range(start, end)
            .skip(1)
            .filter(|d| self.is_school_day(*d))
            .count() as i64;
        sign * count
    }
}

/// A calendar where every Monday–Friday is a school day.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl SchoolCalendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_school_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
    }
}
