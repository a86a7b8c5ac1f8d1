//! Calendar walk: from the epoch, term by term and holiday by holiday.
//!
//! The calendar is a strict alternation of term and holiday windows:
//!
//! ```text
//! epoch ─ first term ─┐ holiday ┌─ second term ─┐ holiday ┌─ third term ─┐ holiday ┌─ first …
//!                  term_end   Monday          term_end   Monday        term_end   Monday
//! ```
//!
//! A holiday runs from the term's last day for the configured number of
//! calendar days; the next term opens on the first Monday on or after the
//! holiday's last day. A date on a boundary belongs to the earlier window,
//! so the last day of a term is still term time and the last day of a
//! holiday is still holiday.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use tc_core::errors::Result;
use tc_core::fail;
use tc_time::{DateExt, Session, Term};
use tracing::{debug, trace};

use crate::config::CalendarConfig;
use crate::term_span::TermSpan;

/// One term together with the holiday that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermWindow {
    /// The instructional span.
    pub span: TermSpan,
    /// Session the term belongs to.
    pub session: Session,
    /// First day of the following holiday (the term's last day).
    pub holiday_start: NaiveDate,
    /// Last day of the following holiday.
    pub holiday_end: NaiveDate,
    /// First day of the next term; always a Monday.
    pub next_term_start: NaiveDate,
}

impl TermWindow {
    fn open(term: Term, session: Session, start: NaiveDate, holiday_days: u32) -> Result<Self> {
        let span = TermSpan::starting(term, start)?;
        let holiday_end = span.end_date.add_days(i64::from(holiday_days))?;
        Ok(Self {
            span,
            session,
            holiday_start: span.end_date,
            holiday_end,
            next_term_start: holiday_end.roll_forward_to(Weekday::Mon)?,
        })
    }

    /// Which term this window describes.
    pub fn term(&self) -> Term {
        self.span.term
    }
}

/// Iterator over successive [`TermWindow`]s starting at the epoch.
///
/// Never ends on its own; yields at most one error and then stops.
#[derive(Debug, Clone)]
pub struct TermWalker<'a> {
    config: &'a CalendarConfig,
    next: Option<(Term, Session, NaiveDate)>,
}

impl<'a> TermWalker<'a> {
    /// Start walking from the first term at `config`'s epoch.
    pub fn new(config: &'a CalendarConfig) -> Self {
        Self {
            config,
            next: Some((Term::First, config.epoch_session(), config.epoch())),
        }
    }
}

impl Iterator for TermWalker<'_> {
    type Item = Result<TermWindow>;

    fn next(&mut self) -> Option<Self::Item> {
        let (term, session, start) = self.next.take()?;
        let window = match TermWindow::open(term, session, start, self.config.holiday_duration(term)) {
            Ok(w) => w,
            Err(e) => return Some(Err(e)),
        };
        let following_session = if term.ends_session() {
            session.next()
        } else {
            session
        };
        self.next = Some((term.next(), following_session, window.next_term_start));
        Some(Ok(window))
    }
}

impl CalendarConfig {
    /// Walk the calendar window by window from the epoch.
    pub fn windows(&self) -> TermWalker<'_> {
        TermWalker::new(self)
    }

    /// The first `n` term windows from the epoch.
    pub fn upcoming_terms(&self, n: usize) -> Result<Vec<TermWindow>> {
        self.windows().take(n).collect()
    }
}

/// Where a date falls in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpanLocation {
    /// Current term, or the term just finished when on holiday.
    pub term: Term,
    /// Session of `term`.
    pub session: Session,
    /// Whether the date falls in the holiday after `term`.
    pub is_holiday: bool,
    /// First day of `term`.
    pub term_start: NaiveDate,
    /// Last day of `term`.
    pub term_end: NaiveDate,
    /// First day of the holiday after `term`.
    pub holiday_start: NaiveDate,
    /// Last day of the holiday after `term`.
    pub holiday_end: NaiveDate,
    /// First day of the term after `term`; always a Monday.
    pub next_term_start: NaiveDate,
}

impl SpanLocation {
    fn new(window: &TermWindow, is_holiday: bool) -> Self {
        Self {
            term: window.span.term,
            session: window.session,
            is_holiday,
            term_start: window.span.start_date,
            term_end: window.span.end_date,
            holiday_start: window.holiday_start,
            holiday_end: window.holiday_end,
            next_term_start: window.next_term_start,
        }
    }

    /// Bounds of whichever window, term or holiday, contains the date.
    pub fn window_bounds(&self) -> (NaiveDate, NaiveDate) {
        if self.is_holiday {
            (self.holiday_start, self.holiday_end)
        } else {
            (self.term_start, self.term_end)
        }
    }
}

/// Find the term or holiday window containing `now`.
///
/// Dates before the epoch fall in the first term, as do the weekend days
/// between a holiday's end and the Monday the next term opens.
///
/// # Errors
/// [`tc_core::Error::InvalidDate`] if the walk leaves chrono's supported
/// date range.
pub fn locate_current_span(config: &CalendarConfig, now: NaiveDate) -> Result<SpanLocation> {
    for window in config.windows() {
        let window = window?;
        trace!(
            term = %window.term(),
            session = %window.session,
            start = %window.span.start_date,
            end = %window.span.end_date,
            holiday_end = %window.holiday_end,
            "calendar window"
        );
        let location = if now <= window.span.end_date {
            SpanLocation::new(&window, false)
        } else if now <= window.holiday_end {
            SpanLocation::new(&window, true)
        } else {
            continue;
        };
        debug!(
            %now,
            term = %location.term,
            session = %location.session,
            is_holiday = location.is_holiday,
            "located calendar span"
        );
        return Ok(location);
    }
    fail!("calendar walk ended before reaching {now}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use tc_time::ymd;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        ymd(y, m, d).unwrap()
    }

    fn config() -> CalendarConfig {
        CalendarConfig::new(date(2024, 9, 16), &[14, 10, 21]).unwrap()
    }

    #[test]
    fn first_session_windows() {
        let cfg = config();
        let windows = cfg.upcoming_terms(4).unwrap();
        let expected = [
            (Term::First, 2024, (2024, 9, 16), (2024, 12, 27), (2025, 1, 10), (2025, 1, 13)),
            (Term::Second, 2024, (2025, 1, 13), (2025, 4, 25), (2025, 5, 5), (2025, 5, 5)),
            (Term::Third, 2024, (2025, 5, 5), (2025, 8, 15), (2025, 9, 5), (2025, 9, 8)),
            (Term::First, 2025, (2025, 9, 8), (2025, 12, 19), (2026, 1, 2), (2026, 1, 5)),
        ];
        for (w, (term, year, start, end, hol_end, next)) in windows.iter().zip(expected) {
            assert_eq!(w.term(), term);
            assert_eq!(w.session, Session::new(year));
            assert_eq!(w.span.start_date, date(start.0, start.1, start.2));
            assert_eq!(w.span.end_date, date(end.0, end.1, end.2));
            assert_eq!(w.holiday_start, w.span.end_date);
            assert_eq!(w.holiday_end, date(hol_end.0, hol_end.1, hol_end.2));
            assert_eq!(w.next_term_start, date(next.0, next.1, next.2));
        }
    }

    #[test]
    fn windows_chain_without_gaps() {
        let cfg = config();
        let windows = cfg.upcoming_terms(12).unwrap();
        for pair in windows.windows(2) {
            assert_eq!(pair[1].span.start_date, pair[0].next_term_start);
            assert_eq!(pair[1].span.start_date.weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn term_end_day_is_term_time() {
        let loc = locate_current_span(&config(), date(2024, 12, 27)).unwrap();
        assert_eq!(loc.term, Term::First);
        assert!(!loc.is_holiday);
    }

    #[test]
    fn holiday_end_day_is_holiday() {
        let loc = locate_current_span(&config(), date(2025, 1, 10)).unwrap();
        assert_eq!(loc.term, Term::First);
        assert!(loc.is_holiday);
        assert_eq!(loc.window_bounds(), (date(2024, 12, 27), date(2025, 1, 10)));
    }

    #[test]
    fn monday_holiday_end_stays_holiday() {
        // The second-term holiday ends on Monday 2025-05-05, which is also
        // the third term's opening day.
        let loc = locate_current_span(&config(), date(2025, 5, 5)).unwrap();
        assert_eq!(loc.term, Term::Second);
        assert!(loc.is_holiday);
        assert_eq!(loc.next_term_start, date(2025, 5, 5));

        let loc = locate_current_span(&config(), date(2025, 5, 6)).unwrap();
        assert_eq!(loc.term, Term::Third);
        assert!(!loc.is_holiday);
        assert_eq!(loc.term_start, date(2025, 5, 5));
    }

    #[test]
    fn before_epoch_is_first_term() {
        let loc = locate_current_span(&config(), date(2024, 8, 1)).unwrap();
        assert_eq!(loc.term, Term::First);
        assert!(!loc.is_holiday);
        assert_eq!(loc.term_start, date(2024, 9, 16));
    }

    #[test]
    fn zero_length_holidays() {
        let cfg = CalendarConfig::new(date(2024, 9, 16), &[0, 0, 0]).unwrap();
        let loc = locate_current_span(&cfg, date(2024, 12, 28)).unwrap();
        // Saturday after a Friday term end with no holiday: next term
        assert_eq!(loc.term, Term::Second);
        assert!(!loc.is_holiday);
        assert_eq!(loc.term_start, date(2024, 12, 30));
    }

    #[test]
    fn walker_reports_overflow_once() {
        let cfg = CalendarConfig::new(NaiveDate::MAX, &[14, 10, 21]).unwrap();
        let mut walker = cfg.windows();
        assert!(walker.next().unwrap().is_err());
        assert!(walker.next().is_none());
    }
}
