//! Rejection reasons produced by the scanner.
//!
//! Each reason identifies the class of grammar violation and carries a
//! stable string code for logs and serialized output.

use std::fmt;
use std::str::FromStr;

/// Why the scanner rejected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Reason {
    /// A character that can never start or continue a numeric literal.
    BadCharacter,
    /// A digit separator that is doubled, leading, trailing, or not
    /// flanked by digits on both sides.
    BadSeparator,
    /// No digits where the grammar requires at least one: empty input,
    /// a lone sign, or a lone decimal point.
    EmptyMantissa,
    /// An exponent marker (and optional sign) with no digits after it.
    DanglingExponent,
    /// Non-whitespace input after a complete literal.
    TrailingGarbage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownReason;

impl Reason {
    pub const ALL: [Reason; 5] = [
        Reason::BadCharacter,
        Reason::BadSeparator,
        Reason::EmptyMantissa,
        Reason::DanglingExponent,
        Reason::TrailingGarbage,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Reason::BadCharacter => "E_BAD_CHAR",
            Reason::BadSeparator => "E_BAD_SEPARATOR",
            Reason::EmptyMantissa => "E_EMPTY_MANTISSA",
            Reason::DanglingExponent => "E_DANGLING_EXPONENT",
            Reason::TrailingGarbage => "E_TRAILING_GARBAGE",
        }
    }

    /// A short, stable label for human-facing messages.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Reason::BadCharacter => "invalid character",
            Reason::BadSeparator => "malformed digit separator",
            Reason::EmptyMantissa => "no digits in mantissa",
            Reason::DanglingExponent => "exponent has no digits",
            Reason::TrailingGarbage => "trailing characters after literal",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown rejection reason")
    }
}

impl std::error::Error for UnknownReason {}

impl FromStr for Reason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E_BAD_CHAR" => Ok(Reason::BadCharacter),
            "E_BAD_SEPARATOR" => Ok(Reason::BadSeparator),
            "E_EMPTY_MANTISSA" => Ok(Reason::EmptyMantissa),
            "E_DANGLING_EXPONENT" => Ok(Reason::DanglingExponent),
            "E_TRAILING_GARBAGE" => Ok(Reason::TrailingGarbage),
            _ => Err(UnknownReason),
        }
    }
}
