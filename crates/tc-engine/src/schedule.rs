//! Schedule derivation: school days and position within the term.

use chrono::NaiveDate;
use tc_time::{SchoolCalendar, Session, Term};
use tracing::debug;

use crate::term_span::SCHOOL_DAYS_PER_WEEK;
use crate::walker::SpanLocation;

/// School days of a term and where a date falls among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Every school day of the term, in order.
    pub school_days: Vec<NaiveDate>,
    /// 1-based day of term (0 only if the term has no school days).
    pub day_of_term: usize,
    /// 1-based week of term.
    pub week_of_term: usize,
    /// Session of the located term.
    pub session: Session,
    /// The term after the located one.
    pub next_term: Term,
    /// Session of `next_term`.
    pub next_session: Session,
}

impl Schedule {
    /// Number of school days in the term.
    pub fn school_days_count(&self) -> usize {
        self.school_days.len()
    }
}

/// Derive the school-day schedule of the term `location` points at.
///
/// School days are the weekdays of `[term_start, term_end]` that `calendar`
/// does not declare a holiday. On a school day the day of term is that day's
/// position in the list; on any other date it is the number of school days
/// already held, but at least 1 while the list is non-empty.
pub fn derive_schedule(
    location: &SpanLocation,
    now: NaiveDate,
    calendar: &dyn SchoolCalendar,
) -> Schedule {
    let school_days = calendar.school_days(location.term_start, location.term_end);
    let day_of_term = day_of_term(&school_days, now);
    let week_of_term = week_of_term(day_of_term);
    let next_term = location.term.next();
    let next_session = if location.term.ends_session() {
        location.session.next()
    } else {
        location.session
    };
    debug!(
        %now,
        school_days = school_days.len(),
        day_of_term,
        week_of_term,
        calendar = calendar.name(),
        "derived term schedule"
    );
    Schedule {
        school_days,
        day_of_term,
        week_of_term,
        session: location.session,
        next_term,
        next_session,
    }
}

/// 1-based position of `now` among `school_days` (sorted ascending).
pub fn day_of_term(school_days: &[NaiveDate], now: NaiveDate) -> usize {
    match school_days.binary_search(&now) {
        Ok(index) => index + 1,
        Err(elapsed) => elapsed.max(1).min(school_days.len()),
    }
}

/// Week of term for a 1-based day of term: `day / 5 + 1`.
pub fn week_of_term(day_of_term: usize) -> usize {
    day_of_term / SCHOOL_DAYS_PER_WEEK as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;
    use crate::walker::locate_current_span;
    use tc_time::{ymd, DateExt, WeekendsOnly};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        ymd(y, m, d).unwrap()
    }

    fn week(from: NaiveDate) -> Vec<NaiveDate> {
        WeekendsOnly.school_days(from, from.add_days(6).unwrap())
    }

    #[test]
    fn position_of_school_day() {
        let days = week(date(2025, 1, 13));
        assert_eq!(day_of_term(&days, date(2025, 1, 13)), 1);
        assert_eq!(day_of_term(&days, date(2025, 1, 17)), 5);
    }

    #[test]
    fn weekend_counts_days_already_held() {
        let days = week(date(2025, 1, 13));
        assert_eq!(day_of_term(&days, date(2025, 1, 18)), 5);
    }

    #[test]
    fn before_first_school_day_is_day_one() {
        let days = week(date(2025, 1, 13));
        assert_eq!(day_of_term(&days, date(2025, 1, 11)), 1);
    }

    #[test]
    fn empty_term_is_day_zero() {
        assert_eq!(day_of_term(&[], date(2025, 1, 13)), 0);
        assert_eq!(week_of_term(0), 1);
    }

    #[test]
    fn weeks_roll_every_five_days() {
        assert_eq!(week_of_term(1), 1);
        assert_eq!(week_of_term(4), 1);
        assert_eq!(week_of_term(5), 2);
        assert_eq!(week_of_term(75), 16);
    }

    #[test]
    fn public_holiday_drops_out_and_shifts_position() {
        let cfg = CalendarConfig::new(date(2024, 9, 16), &[14, 10, 21])
            .unwrap()
            .with_public_holidays([date(2024, 10, 1)]);
        let now = date(2024, 10, 2);
        let loc = locate_current_span(&cfg, now).unwrap();
        let schedule = derive_schedule(&loc, now, cfg.public_holidays());
        assert_eq!(schedule.school_days_count(), 74);
        assert!(!schedule.school_days.contains(&date(2024, 10, 1)));
        // Sep 16–30 has 11 school days, Oct 2 is the 12th
        assert_eq!(schedule.day_of_term, 12);

        let on_holiday = derive_schedule(&loc, date(2024, 10, 1), cfg.public_holidays());
        assert_eq!(on_holiday.day_of_term, 11);
    }

    #[test]
    fn third_term_rolls_session() {
        let cfg = CalendarConfig::new(date(2024, 9, 16), &[14, 10, 21]).unwrap();
        let now = date(2025, 6, 2);
        let loc = locate_current_span(&cfg, now).unwrap();
        let schedule = derive_schedule(&loc, now, cfg.public_holidays());
        assert_eq!(loc.term, Term::Third);
        assert_eq!(schedule.next_term, Term::First);
        assert_eq!(schedule.session, Session::new(2024));
        assert_eq!(schedule.next_session, Session::new(2025));
    }
}
