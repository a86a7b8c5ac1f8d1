use std::fmt;

use tc_engine::{CalendarState, TermWindow, DEFAULT_PLANNING_LEAD_DAYS};
use tc_time::NaiveDate;

/// Summary of a [`CalendarState`] as seen on one date.
#[derive(Debug, Clone, Copy)]
pub struct StateReport<'a> {
    state: &'a CalendarState,
    now: NaiveDate,
}

impl<'a> StateReport<'a> {
    /// Report `state`, which was computed for `now`.
    pub fn new(state: &'a CalendarState, now: NaiveDate) -> Self {
        Self { state, now }
    }
}

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state;
        let status = if s.is_holiday { "holiday" } else { "in session" };
        writeln!(f, "{:<15}{}", "Date:", self.now)?;
        writeln!(f, "{:<15}{}", "Session:", s.session)?;
        writeln!(f, "{:<15}{} ({status})", "Term:", s.term)?;
        writeln!(
            f,
            "{:<15}{} .. {}",
            "Term dates:", s.term_start_date, s.term_end_date
        )?;
        writeln!(
            f,
            "{:<15}{} .. {}",
            "Holiday:", s.holiday_start_date, s.holiday_end_date
        )?;
        writeln!(
            f,
            "{:<15}{} from {} ({} days away)",
            "Next term:",
            s.next_stamp(),
            s.next_term_start_date,
            s.days_until_next_term(self.now)
        )?;
        writeln!(
            f,
            "{:<15}day {} of {}, week {}",
            "Position:", s.day_of_term, s.school_days_count, s.week_of_term
        )?;
        let planning = if s.planning_window_open(self.now, DEFAULT_PLANNING_LEAD_DAYS) {
            "open"
        } else {
            "closed"
        };
        writeln!(f, "{:<15}{planning}", "Planning:")
    }
}

/// One line per term window, oldest first.
#[derive(Debug, Clone, Copy)]
pub struct WindowTable<'a>(pub &'a [TermWindow]);

impl fmt::Display for WindowTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<7} {:<10} {:<10} {:<10} {:<10}",
            "session", "term", "start", "end", "holiday", "next"
        )?;
        for w in self.0 {
            writeln!(
                f,
                "{:<10} {:<7} {} {} {} {}",
                w.session.to_string(),
                w.span.term.as_str(),
                w.span.start_date,
                w.span.end_date,
                w.holiday_end,
                w.next_term_start
            )?;
        }
        Ok(())
    }
}
