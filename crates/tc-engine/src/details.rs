//! Entry points: walk the calendar, then derive the schedule.

use chrono::NaiveDate;
use tc_core::errors::Result;
use tc_core::{Clock, SystemClock};
use tracing::debug;

use crate::config::CalendarConfig;
use crate::schedule::derive_schedule;
use crate::state::CalendarState;
use crate::walker::locate_current_span;

/// Calendar state on `now`, or today by the system clock when `None`.
///
/// # Errors
/// [`tc_core::Error::InvalidDate`] if the calendar walk leaves chrono's
/// supported date range.
pub fn current_term_details(
    config: &CalendarConfig,
    now: Option<NaiveDate>,
) -> Result<CalendarState> {
    match now {
        Some(now) => term_details_at(config, now),
        None => term_details_with_clock(config, &SystemClock),
    }
}

/// Calendar state on the date `clock` reports.
pub fn term_details_with_clock(config: &CalendarConfig, clock: &dyn Clock) -> Result<CalendarState> {
    term_details_at(config, clock.today())
}

/// Calendar state on `now`.
pub fn term_details_at(config: &CalendarConfig, now: NaiveDate) -> Result<CalendarState> {
    let location = locate_current_span(config, now)?;
    let schedule = derive_schedule(&location, now, config.public_holidays());

    let by_month = config.session_by_month(now);
    if by_month != location.session {
        debug!(
            %now,
            session = %location.session,
            %by_month,
            "term cycle and calendar month disagree on the session"
        );
    }

    Ok(CalendarState::assemble(&location, schedule))
}
