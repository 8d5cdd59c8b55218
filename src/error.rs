//! Failure taxonomy for the public surface.
//!
//! Data failures (`Malformed`, `NotIntLike`) flow through the configured
//! `on_fail` policy. Type mismatches and configuration conflicts indicate
//! caller bugs and always surface as `Err`. Overflow is not here at all:
//! it resolves internally via the digit-string representation.

use std::fmt;

use crate::scan::reason::Reason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The text violates the numeric grammar.
    Malformed(Reason),
    /// A well-formed real (or an already-float input) where the operation
    /// demands a true integer.
    NotIntLike,
    /// Input that is neither text nor passthrough-eligible numeric;
    /// for this crate, byte input that is not valid UTF-8.
    UnsupportedInput,
    /// Options that cannot be honored together, such as a base with a
    /// float operation. Always surfaced immediately.
    ConfigConflict(&'static str),
}

impl Error {
    /// The grammar violation behind a `Malformed` error.
    #[inline]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Error::Malformed(reason) => Some(*reason),
            _ => None,
        }
    }

    /// True for failures the `on_fail` policy absorbs.
    #[inline]
    pub fn is_data_failure(&self) -> bool {
        matches!(self, Error::Malformed(_) | Error::NotIntLike)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed(reason) => {
                write!(f, "malformed numeric literal: {}", reason.label())
            }
            Error::NotIntLike => f.write_str("value is not an integer"),
            Error::UnsupportedInput => f.write_str("input is neither text nor numeric"),
            Error::ConfigConflict(detail) => write!(f, "conflicting options: {detail}"),
        }
    }
}

impl std::error::Error for Error {}
