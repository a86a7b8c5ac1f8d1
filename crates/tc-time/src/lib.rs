//! # tc-time
//!
//! Date helpers, school calendars, terms and sessions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SchoolCalendar` trait and the weekend-only calendar.
pub mod calendar;

/// Checked date arithmetic, ISO parsing and date ranges.
pub mod date;

/// Public holidays calendar.
pub mod holidays;

/// `Session`: academic year label.
pub mod session;

/// `Term`: first, second, third.
pub mod term;

/// Weekday classification helpers.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{SchoolCalendar, WeekendsOnly};
pub use date::{date_range, parse_iso_date, strip_time, ymd, DateExt, DateRange};
pub use holidays::PublicHolidays;
pub use session::{ParseSessionError, Session};
pub use term::{ParseTermError, Term};
pub use weekday::WeekdayExt;

pub use chrono::{NaiveDate, Weekday};
