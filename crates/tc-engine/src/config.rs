//! Calendar configuration.
//!
//! A [`CalendarConfig`] is validated once, when it is built. Everything
//! downstream may assume exactly three non-negative holiday durations.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tc_core::errors::{Error, Result};
use tc_core::{ensure, Days};
use tc_time::{parse_iso_date, PublicHolidays, Session, Term};

/// Number of holiday windows per session, one after each term.
pub const HOLIDAY_WINDOWS: usize = 3;

/// Immutable description of an institution's academic calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    epoch: NaiveDate,
    holiday_durations: [Days; HOLIDAY_WINDOWS],
    public_holidays: PublicHolidays,
}

impl CalendarConfig {
    /// Build a configuration from the first term's start date and the
    /// holiday lengths (calendar days) after the first, second and third
    /// term.
    ///
    /// # Errors
    /// [`Error::Configuration`] unless `holiday_durations` holds exactly
    /// three non-negative values.
    pub fn new(epoch: NaiveDate, holiday_durations: &[i64]) -> Result<Self> {
        ensure!(
            holiday_durations.len() == HOLIDAY_WINDOWS,
            "expected exactly {HOLIDAY_WINDOWS} holiday durations, got {}",
            holiday_durations.len()
        );
        let mut durations = [0; HOLIDAY_WINDOWS];
        for (slot, (term, &days)) in durations
            .iter_mut()
            .zip(Term::ALL.iter().zip(holiday_durations))
        {
            ensure!(
                days >= 0,
                "holiday after the {term} term must not be negative, got {days}"
            );
            *slot = Days::try_from(days).map_err(|_| {
                Error::Configuration(format!(
                    "holiday after the {term} term is too long: {days} days"
                ))
            })?;
        }
        Ok(Self {
            epoch,
            holiday_durations: durations,
            public_holidays: PublicHolidays::new(),
        })
    }

    /// Replace the public holidays excluded from school-day counts.
    pub fn with_public_holidays(mut self, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.public_holidays = holidays.into_iter().collect();
        self
    }

    /// Parse a TOML document.
    ///
    /// ```toml
    /// epoch = "2024-09-16"
    /// holiday_durations = [14, 10, 21]
    /// public_holidays = ["2024-10-01"]
    /// ```
    ///
    /// # Errors
    /// [`Error::Configuration`] for TOML syntax errors, unknown keys or bad
    /// durations; [`Error::InvalidDate`] for dates that do not parse.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: CalendarConfigFile = toml::from_str(s)
            .map_err(|e| Error::Configuration(format!("invalid calendar config: {e}")))?;
        Self::try_from(file)
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    /// As [`from_toml_str`](Self::from_toml_str), plus
    /// [`Error::Configuration`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Start date of the first tracked term.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Holiday lengths after the first, second and third term.
    pub fn holiday_durations(&self) -> [Days; HOLIDAY_WINDOWS] {
        self.holiday_durations
    }

    /// Holiday length after `term`.
    pub fn holiday_duration(&self, term: Term) -> Days {
        self.holiday_durations[term.index()]
    }

    /// Declared public holidays.
    pub fn public_holidays(&self) -> &PublicHolidays {
        &self.public_holidays
    }

    /// Session the epoch's first term belongs to.
    pub fn epoch_session(&self) -> Session {
        Session::new(self.epoch.year())
    }

    /// Session containing `date` by the month rule: sessions turn over in
    /// the epoch's month.
    pub fn session_by_month(&self, date: NaiveDate) -> Session {
        Session::containing(date, self.epoch.month())
    }
}

/// On-disk shape of a calendar configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfigFile {
    /// First term's start date, `YYYY-MM-DD`.
    pub epoch: String,
    /// Holiday lengths in calendar days.
    pub holiday_durations: Vec<i64>,
    /// Public holidays, `YYYY-MM-DD`.
    #[serde(default)]
    pub public_holidays: Vec<String>,
}

impl TryFrom<CalendarConfigFile> for CalendarConfig {
    type Error = Error;

    fn try_from(file: CalendarConfigFile) -> Result<Self> {
        let epoch = parse_iso_date(&file.epoch)?;
        let holidays = file
            .public_holidays
            .iter()
            .map(|s| parse_iso_date(s))
            .collect::<Result<Vec<_>>>()?;
        Ok(CalendarConfig::new(epoch, &file.holiday_durations)?.with_public_holidays(holidays))
    }
}
