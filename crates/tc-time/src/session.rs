//! `Session`: an academic year labelled `"YYYY/YYYY+1"`.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An academic session, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Session {
    start_year: i32,
}

/// Error returned when a string is not a `"YYYY/YYYY+1"` label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid session label {0:?} (expected YYYY/YYYY+1)")]
pub struct ParseSessionError(pub String);

impl Session {
    /// The session that starts in `start_year`.
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The session containing `date`, for sessions that begin in
    /// `first_month` (1–12).
    ///
    /// Months from `first_month` onward belong to the session starting that
    /// year; earlier months belong to the session that started the year
    /// before.
    pub fn containing(date: NaiveDate, first_month: u32) -> Self {
        if date.month() >= first_month {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// Calendar year the session starts in.
    pub fn start_year(self) -> i32 {
        self.start_year
    }

    /// Calendar year the session ends in.
    pub fn end_year(self) -> i32 {
        self.start_year + 1
    }

    /// The following session.
    pub fn next(self) -> Self {
        Self::new(self.start_year + 1)
    }

    /// The preceding session.
    pub fn previous(self) -> Self {
        Self::new(self.start_year - 1)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start_year, self.end_year())
    }
}

impl FromStr for Session {
    type Err = ParseSessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSessionError(s.to_string());
        let (start, end) = s.trim().split_once('/').ok_or_else(err)?;
        let start: i32 = start.parse().map_err(|_| err())?;
        let end: i32 = end.parse().map_err(|_| err())?;
        if end != start + 1 {
            return Err(err());
        }
        Ok(Self::new(start))
    }
}

impl From<Session> for String {
    fn from(session: Session) -> String {
        session.to_string()
    }
}

impl TryFrom<String> for Session {
    type Error = ParseSessionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
