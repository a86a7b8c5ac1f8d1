//! # tc-engine
//!
//! The academic term calendar engine.
//!
//! Given a [`CalendarConfig`] (the first term's start date, three holiday
//! lengths and optional public holidays) and a date, the engine works out
//! which term and session the date belongs to, whether the school is on
//! holiday, the term's school days and the date's position among them, and
//! what comes next.
//!
//! ```text
//! compute_term_end ──► locate_current_span ──► derive_schedule ──► CalendarState
//!   (term_span)            (walker)              (schedule)          (state)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use tc_engine::{term_details_at, CalendarConfig};
//! use tc_time::{ymd, Term};
//!
//! let config = CalendarConfig::new(ymd(2024, 9, 16)?, &[14, 10, 21])?;
//! let state = term_details_at(&config, ymd(2024, 12, 28)?)?;
//! assert_eq!(state.term, Term::First);
//! assert!(state.is_holiday);
//! assert_eq!(state.session.to_string(), "2024/2025");
//! # Ok::<(), tc_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Calendar configuration and TOML loading.
pub mod config;

/// Entry points.
pub mod details;

/// School days, day and week of term.
pub mod schedule;

/// The consolidated calendar state.
pub mod state;

/// Term end calculation.
pub mod term_span;

/// Term-by-term calendar walk.
pub mod walker;

pub use config::{CalendarConfig, CalendarConfigFile, HOLIDAY_WINDOWS};
pub use details::{current_term_details, term_details_at, term_details_with_clock};
pub use schedule::{derive_schedule, Schedule};
pub use state::{CalendarState, TermStamp, DEFAULT_PLANNING_LEAD_DAYS};
pub use term_span::{compute_term_end, TermSpan, WEEKDAYS_PER_TERM};
pub use walker::{locate_current_span, SpanLocation, TermWalker, TermWindow};
