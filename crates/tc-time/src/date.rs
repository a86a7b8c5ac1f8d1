//! Calendar-date helpers on top of [`chrono::NaiveDate`].
//!
//! Every date in termcal is a `NaiveDate`: a plain calendar date with no
//! time of day and no time zone, so "midnight normalization" is a property
//! of the type rather than something callers must remember. Arithmetic is
//! checked and reports leaving chrono's range as [`Error::InvalidDate`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tc_core::errors::{Error, Result};
use tc_core::fail;

use crate::weekday::WeekdayExt;

/// Build a date from year, month (1–12) and day-of-month.
///
/// # Errors
/// Returns [`Error::InvalidDate`] if the triple is not a real date.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Parse a date in ISO 8601 format (`YYYY-MM-DD`).
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// Returns [`Error::InvalidDate`] if the string is not a real date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("cannot parse {s:?} as YYYY-MM-DD: {e}")))
}

/// Drop the time of day from an instant.
pub fn strip_time(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// Checked day arithmetic and weekday alignment.
pub trait DateExt: Sized + Copy {
    /// Advance by `n` calendar days (negative moves backward).
    fn add_days(self, n: i64) -> Result<Self>;

    /// The following calendar day.
    fn next_day(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding calendar day.
    fn prev_day(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return `true` if this date falls on Saturday or Sunday.
    fn is_weekend(self) -> bool;

    /// The first date on or after `self` that falls on `weekday`.
    fn roll_forward_to(self, weekday: Weekday) -> Result<Self>;

    /// The last date on or before `self` that falls on `weekday`.
    fn roll_back_to(self, weekday: Weekday) -> Result<Self>;

    /// Number of calendar days from `self` to `other`; positive if
    /// `other` is later.
    fn days_until(self, other: Self) -> i64;
}

impl DateExt for NaiveDate {
    fn add_days(self, n: i64) -> Result<Self> {
        let step = chrono::Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.checked_add_days(step)
        } else {
            self.checked_sub_days(step)
        };
        match moved {
            Some(d) => Ok(d),
            None => fail!("{self} {n:+} days leaves the supported date range"),
        }
    }

    fn is_weekend(self) -> bool {
        self.weekday().is_weekend()
    }

    fn roll_forward_to(self, weekday: Weekday) -> Result<Self> {
        let gap = (weekday.num_days_from_monday() + 7 - self.weekday().num_days_from_monday()) % 7;
        self.add_days(i64::from(gap))
    }

    fn roll_back_to(self, weekday: Weekday) -> Result<Self> {
        let gap = (self.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
        self.add_days(-i64::from(gap))
    }

    fn days_until(self, other: Self) -> i64 {
        other.signed_duration_since(self).num_days()
    }
}

/// Inclusive iterator over consecutive calendar days.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(d) if d <= self.end => {
                let n = (d.days_until(self.end) + 1) as usize;
                (n, Some(n))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

/// Every calendar day in `[start, end]`; empty when `end < start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: Some(start),
        end,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
