//! Calendar-wide invariants: coverage, cycling, alignment and bounds.

use chrono::Datelike;
use proptest::prelude::*;
use tc_engine::{compute_term_end, term_details_at, CalendarConfig};
use tc_time::{ymd, DateExt, NaiveDate, Session, Term, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    ymd(y, m, d).unwrap()
}

fn config() -> CalendarConfig {
    CalendarConfig::new(date(2024, 9, 16), &[14, 10, 21]).unwrap()
}

/// Walking one day at a time, terms only ever advance by one step and the
/// session only turns over when the first term comes round again.
#[test]
fn terms_cycle_in_order_day_by_day() {
    let cfg = config();
    let mut prev = term_details_at(&cfg, cfg.epoch()).unwrap();
    let mut transitions = 0;
    let mut day = cfg.epoch();
    for _ in 0..(4 * 366) {
        day = day.next_day().unwrap();
        let state = term_details_at(&cfg, day).unwrap();
        if state.term != prev.term {
            transitions += 1;
            assert_eq!(state.term, prev.term.next(), "skipped a term on {day}");
            assert!(prev.is_holiday, "{day}: term changed without a holiday");
            assert!(!state.is_holiday);
            if state.term == Term::First {
                assert_eq!(state.session, prev.session.next());
            } else {
                assert_eq!(state.session, prev.session);
            }
            assert_eq!(state.term_start_date, prev.next_term_start_date);
        } else {
            assert_eq!(state.session, prev.session, "session changed mid-term on {day}");
            // holiday never flips back to term time within one term
            assert!(state.is_holiday || !prev.is_holiday);
        }
        prev = state;
    }
    assert!(transitions >= 12);
}

/// Consecutive windows tile the calendar: no overlaps and no dates left
/// unaccounted for.
#[test]
fn windows_tile_the_calendar() {
    let cfg = config();
    let windows = cfg.upcoming_terms(30).unwrap();
    for pair in windows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.span.start_date <= a.span.end_date);
        assert!(a.holiday_start == a.span.end_date && a.holiday_end >= a.holiday_start);
        assert!(b.span.start_date >= a.holiday_end);
        assert!(a.holiday_end.days_until(b.span.start_date) < 7);
    }
}

#[test]
fn session_labels_advance_yearly() {
    let cfg = config();
    let windows = cfg.upcoming_terms(9).unwrap();
    let sessions: Vec<Session> = windows.iter().map(|w| w.session).collect();
    assert_eq!(
        sessions,
        [2024, 2024, 2024, 2025, 2025, 2025, 2026, 2026, 2026].map(Session::new)
    );
}

proptest! {
    #[test]
    fn term_end_is_a_friday_not_before_start(offset in -40_000i64..40_000) {
        let start = date(2000, 1, 1).add_days(offset).unwrap();
        let end = compute_term_end(start).unwrap();
        prop_assert_eq!(end.weekday(), Weekday::Fri);
        prop_assert!(end >= start);
        prop_assert!(start.days_until(end) <= 7 * 15 + 2);
    }

    #[test]
    fn state_is_deterministic(offset in 0i64..3000) {
        let cfg = config();
        let now = cfg.epoch().add_days(offset).unwrap();
        prop_assert_eq!(term_details_at(&cfg, now).unwrap(), term_details_at(&cfg, now).unwrap());
    }

    #[test]
    fn date_is_in_exactly_one_window(offset in 0i64..3000) {
        let cfg = config();
        let now = cfg.epoch().add_days(offset).unwrap();
        let s = term_details_at(&cfg, now).unwrap();
        if s.is_holiday {
            prop_assert!(now > s.term_end_date && now <= s.holiday_end_date);
            prop_assert_eq!((s.start_date, s.end_date), (s.holiday_start_date, s.holiday_end_date));
        } else {
            prop_assert!(now <= s.term_end_date);
            // at most the weekend gap before a Monday opening
            prop_assert!(now.days_until(s.term_start_date) < 7);
            prop_assert_eq!((s.start_date, s.end_date), (s.term_start_date, s.term_end_date));
        }
        prop_assert_eq!(s.next_term_start_date.weekday(), Weekday::Mon);
        prop_assert!(s.end_date >= s.start_date);
    }

    #[test]
    fn school_days_exclude_weekends_and_public_holidays(
        offset in 0i64..1500,
        holiday_offsets in proptest::collection::vec(-120i64..120, 0..15),
    ) {
        let now = date(2024, 9, 16).add_days(offset).unwrap();
        let holidays: Vec<NaiveDate> = holiday_offsets
            .iter()
            .map(|o| now.add_days(*o).unwrap())
            .collect();
        let cfg = config().with_public_holidays(holidays.iter().copied());
        let s = term_details_at(&cfg, now).unwrap();
        for d in &s.school_days {
            prop_assert!(!d.is_weekend());
            prop_assert!(!holidays.contains(d));
            prop_assert!(*d >= s.term_start_date && *d <= s.term_end_date);
        }
        prop_assert_eq!(s.school_days.len(), s.school_days_count);
    }

    #[test]
    fn day_and_week_bounds(
        offset in -30i64..3000,
        durations in proptest::array::uniform3(0i64..60),
    ) {
        let cfg = CalendarConfig::new(date(2024, 9, 16), &durations).unwrap();
        let now = cfg.epoch().add_days(offset).unwrap();
        let s = term_details_at(&cfg, now).unwrap();
        prop_assert!(s.week_of_term >= 1);
        if s.school_days_count == 0 {
            prop_assert_eq!(s.day_of_term, 0);
        } else {
            prop_assert!(s.day_of_term >= 1 && s.day_of_term <= s.school_days_count);
        }
        prop_assert_eq!(s.week_of_term, s.day_of_term / 5 + 1);
    }
}
