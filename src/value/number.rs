//! The materialized numeric output.

use std::fmt;

use crate::value::big::BigDigits;

/// A concrete numeric value produced by materialization.
///
/// `Big` appears only when an integer literal (or integer-valued float)
/// does not fit `i64`; the common path stays a plain machine integer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Number {
    Int(i64),
    Big(BigDigits),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_) | Number::Big(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The value as `i64`, when it is a fixed-width integer.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as `f64`. Integers widen; `Big` values do not (widening
    /// them would silently lose the precision overflow was meant to keep).
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Int(value) => Some(*value as f64),
            Number::Float(value) => Some(*value),
            Number::Big(_) => None,
        }
    }

    #[inline]
    pub fn as_big(&self) -> Option<&BigDigits> {
        match self {
            Number::Big(big) => Some(big),
            _ => None,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Big(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}
