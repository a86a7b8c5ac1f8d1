//! Term-span calculation.
//!
//! A term is fifteen school weeks of five weekdays. Its end is found by
//! counting 75 weekdays past the start date and rolling back to a Friday.
//! Public holidays do not shorten or lengthen a term; they only drop out of
//! the school-day list.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use tc_core::errors::Result;
use tc_time::{DateExt, SchoolCalendar, Term, WeekendsOnly};

/// Weeks of instruction per term.
pub const WEEKS_PER_TERM: u32 = 15;

/// Instructional days per school week.
pub const SCHOOL_DAYS_PER_WEEK: u32 = 5;

/// Weekdays counted from a term's start to find its end.
pub const WEEKDAYS_PER_TERM: u32 = WEEKS_PER_TERM * SCHOOL_DAYS_PER_WEEK;

/// End date of a term that starts on `start_date`.
///
/// Steps forward one calendar day at a time counting only Monday–Friday,
/// stops at the 75th, then steps back to the nearest Friday on or before it.
/// The result is always a Friday and never precedes `start_date`.
///
/// # Errors
/// [`tc_core::Error::InvalidDate`] only if the walk leaves chrono's
/// supported date range.
pub fn compute_term_end(start_date: NaiveDate) -> Result<NaiveDate> {
    let last_counted = WeekendsOnly.advance_school_days(start_date, WEEKDAYS_PER_TERM)?;
    last_counted.roll_back_to(Weekday::Fri)
}

/// The instructional span of one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermSpan {
    /// Which term.
    pub term: Term,
    /// First day of the term.
    pub start_date: NaiveDate,
    /// Last day of the term; always a Friday.
    pub end_date: NaiveDate,
}

impl TermSpan {
    /// The span of `term` starting on `start_date`.
    pub fn starting(term: Term, start_date: NaiveDate) -> Result<Self> {
        Ok(Self {
            term,
            start_date,
            end_date: compute_term_end(start_date)?,
        })
    }

    /// Return `true` if `date` lies within `[start_date, end_date]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.end_date).contains(&date)
    }

    /// Calendar days from start to end inclusive.
    pub fn len_days(&self) -> i64 {
        self.start_date.days_until(self.end_date) + 1
    }
}
