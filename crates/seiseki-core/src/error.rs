//! Domain parse errors.
//!
//! Typed errors for turning user-entered text into domain values, defined
//! in `seiseki-core` so callers can match on the variant instead of string
//! matching error messages.

use thiserror::Error;

/// Errors raised when text fails to map onto a domain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The rule set tag is not one of lesson/comprehensive/general/jlpt.
    #[error("unknown rule set: {0}")]
    UnknownRuleSet(String),

    /// The JLPT level is not one of N5..N1.
    #[error("unknown JLPT level: {0}")]
    UnknownLevel(String),

    /// The weekday token is not one of T2..T7, CN.
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    /// A jlpt score sheet did not declare its level.
    #[error("rule set 'jlpt' requires a level (N5..N1)")]
    MissingLevel,
}
