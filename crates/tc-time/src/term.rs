//! `Term`: the three instructional periods of a session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three terms of an academic session.
///
/// Terms cycle `First → Second → Third → First`; the wrap from `Third` back
/// to `First` starts a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    /// First term of the session.
    First,
    /// Second term of the session.
    Second,
    /// Third (final) term of the session.
    Third,
}

/// Error returned when a string does not name a term.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown term {0:?} (expected first, second or third)")]
pub struct ParseTermError(pub String);

impl Term {
    /// All terms in session order.
    pub const ALL: [Term; 3] = [Term::First, Term::Second, Term::Third];

    /// Zero-based position within the session.
    pub fn index(self) -> usize {
        match self {
            Term::First => 0,
            Term::Second => 1,
            Term::Third => 2,
        }
    }

    /// Inverse of [`index`](Self::index); `None` for values above 2.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The term that follows this one.
    pub fn next(self) -> Self {
        match self {
            Term::First => Term::Second,
            Term::Second => Term::Third,
            Term::Third => Term::First,
        }
    }

    /// Return `true` if the following term belongs to the next session.
    pub fn ends_session(self) -> bool {
        self == Term::Third
    }

    /// Lower-case name as stamped on records.
    pub fn as_str(self) -> &'static str {
        match self {
            Term::First => "first",
            Term::Second => "second",
            Term::Third => "third",
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Term::First),
            "second" => Ok(Term::Second),
            "third" => Ok(Term::Third),
            _ => Err(ParseTermError(s.to_string())),
        }
    }
}
