//! Error types for termcal.
//!
//! The engine distinguishes only two failure kinds: a malformed
//! configuration and a date that cannot be used. Both are fatal for the
//! operation that triggered them and are never retried, since the engine is
//! deterministic and a retry reproduces the same failure.

use thiserror::Error;

/// The top-level error type used throughout termcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The calendar configuration is malformed (wrong number of holiday
    /// durations, negative durations, unreadable or invalid config file).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A date is unparseable, out of the representable range, or outside
    /// the span the calendar can describe.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl Error {
    /// Return `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Return `true` for [`Error::InvalidDate`].
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Error::InvalidDate(_))
    }
}

/// Shorthand `Result` type used throughout termcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::ensure;
/// fn three(durations: &[i64]) -> tc_core::Result<()> {
///     ensure!(durations.len() == 3, "expected 3 durations, got {}", durations.len());
///     Ok(())
/// }
/// assert!(three(&[1, 2, 3]).is_ok());
/// assert!(three(&[1, 2]).unwrap_err().is_configuration());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidDate(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::ensure_date;
/// fn not_before(a: i32, b: i32) -> tc_core::Result<()> {
///     ensure_date!(a >= b, "{a} precedes {b}");
///     Ok(())
/// }
/// assert!(not_before(2, 1).is_ok());
/// assert!(not_before(1, 2).unwrap_err().is_invalid_date());
/// ```
#[macro_export]
macro_rules! ensure_date {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidDate(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidDate(...))` immediately.
///
/// # Example
/// ```
/// use tc_core::fail;
/// fn always_err() -> tc_core::Result<()> {
///     fail!("no such date");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidDate(format!($($msg)*)))
    };
}
