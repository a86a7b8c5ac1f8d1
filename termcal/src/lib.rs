//! # termcal
//!
//! An academic term calendar: which term and session a date falls in,
//! whether the school is on holiday, the term's school days and what
//! comes next.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates, plus the text reports used by the
//! `termcal` command-line tool. Application code should depend on this
//! crate rather than the individual `tc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! termcal = "0.1"
//! ```
//!
//! ```rust
//! use termcal::engine::{term_details_at, CalendarConfig};
//! use termcal::time::{ymd, Term};
//!
//! let config = CalendarConfig::from_toml_str(
//!     r#"
//!     epoch = "2024-09-16"
//!     holiday_durations = [14, 10, 21]
//!     "#,
//! )?;
//! let state = term_details_at(&config, ymd(2025, 1, 11)?)?;
//! assert_eq!(state.term, Term::Second);
//! assert_eq!(state.start_date, ymd(2025, 1, 13)?);
//! # Ok::<(), termcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the clock abstraction.
pub use tc_core as core;

/// Dates, school calendars, terms and sessions.
pub use tc_time as time;

/// Term spans, calendar walk, schedules and the calendar state.
pub use tc_engine as engine;

/// Human-readable renderings of calendar state and term windows.
pub mod report;
