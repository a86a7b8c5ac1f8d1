//! # tc-core
//!
//! Core types shared across the termcal workspace: the error hierarchy and
//! the clock abstraction that supplies "today".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Source of the current date (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// Error types and the `ensure!` / `ensure_date!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Count of calendar days (holiday durations, lead times).
pub type Days = u32;

/// Alias used for list sizes and 1-based positions.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
