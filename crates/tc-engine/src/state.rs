//! `CalendarState`: the engine's answer to "where are we now?".

use chrono::NaiveDate;
use serde::Serialize;
use tc_core::Days;
use tc_time::{DateExt, Session, Term};

use crate::schedule::Schedule;
use crate::walker::SpanLocation;

/// Days before a term opens from which planning records (diaries, lesson
/// notes) may be created.
pub const DEFAULT_PLANNING_LEAD_DAYS: Days = 7;

/// Term and session copied onto records at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermStamp {
    /// Term the record belongs to.
    pub term: Term,
    /// Session the record belongs to.
    pub session: Session,
}

impl std::fmt::Display for TermStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} term", self.session, self.term)
    }
}

/// The calendar as seen from one date.
///
/// A snapshot: it depends on the date it was computed for and must not be
/// kept beyond the operation that asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarState {
    /// Current term, or the term just finished when on holiday.
    pub term: Term,
    /// Session of `term`.
    pub session: Session,
    /// First day of the window (term or holiday) containing the date.
    pub start_date: NaiveDate,
    /// Last day of the window (term or holiday) containing the date.
    pub end_date: NaiveDate,
    /// Whether the date falls in the holiday after `term`.
    pub is_holiday: bool,
    /// First day of `term`.
    pub term_start_date: NaiveDate,
    /// Last day of `term`.
    pub term_end_date: NaiveDate,
    /// First day of the holiday after `term`.
    pub holiday_start_date: NaiveDate,
    /// Last day of the holiday after `term`.
    pub holiday_end_date: NaiveDate,
    /// Opening Monday of `next_term`.
    pub next_term_start_date: NaiveDate,
    /// 1-based week of term.
    pub week_of_term: usize,
    /// 1-based day of term.
    #[serde(rename = "day")]
    pub day_of_term: usize,
    /// School days of `term`.
    pub school_days: Vec<NaiveDate>,
    /// `school_days.len()`.
    pub school_days_count: usize,
    /// The term after `term`.
    pub next_term: Term,
    /// Session of `next_term`.
    pub next_session: Session,
}

impl CalendarState {
    pub(crate) fn assemble(location: &SpanLocation, schedule: Schedule) -> Self {
        let (start_date, end_date) = location.window_bounds();
        let school_days_count = schedule.school_days_count();
        Self {
            term: location.term,
            session: schedule.session,
            start_date,
            end_date,
            is_holiday: location.is_holiday,
            term_start_date: location.term_start,
            term_end_date: location.term_end,
            holiday_start_date: location.holiday_start,
            holiday_end_date: location.holiday_end,
            next_term_start_date: location.next_term_start,
            week_of_term: schedule.week_of_term,
            day_of_term: schedule.day_of_term,
            school_days: schedule.school_days,
            school_days_count,
            next_term: schedule.next_term,
            next_session: schedule.next_session,
        }
    }

    /// Term and session to stamp on a record.
    pub fn stamp(&self) -> TermStamp {
        TermStamp {
            term: self.term,
            session: self.session,
        }
    }

    /// Term and session that take over on `next_term_start_date`.
    pub fn next_stamp(&self) -> TermStamp {
        TermStamp {
            term: self.next_term,
            session: self.next_session,
        }
    }

    /// Return `true` if classes are held on `date` in this term.
    pub fn is_school_day(&self, date: NaiveDate) -> bool {
        self.school_days.binary_search(&date).is_ok()
    }

    /// Calendar days from `now` until the next term opens.
    pub fn days_until_next_term(&self, now: NaiveDate) -> i64 {
        now.days_until(self.next_term_start_date)
    }

    /// Whether planning records may be created on `now`.
    ///
    /// Always open during term time. During a holiday it opens `lead_days`
    /// before the next term starts.
    pub fn planning_window_open(&self, now: NaiveDate, lead_days: Days) -> bool {
        !self.is_holiday || self.days_until_next_term(now) <= i64::from(lead_days)
    }
}
