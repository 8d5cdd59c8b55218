//! Overflow hand-off representation for integers beyond `i64`.
//!
//! Arbitrary-precision arithmetic is out of scope here: when accumulation
//! overflows, the materializer produces a normalized digit string that an
//! external big-integer constructor can consume. Normalization (separators
//! stripped, lowercase digits, no redundant leading zeros) makes equality
//! exact value equality.

use std::fmt;

/// A sign plus normalized digit string in a given radix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BigDigits {
    negative: bool,
    digits: String,
    radix: u32,
}

impl BigDigits {
    /// Builds a normalized value from raw digit text.
    ///
    /// `raw` may contain `_` separators and mixed-case digits; it must not
    /// contain a sign or radix prefix. The scanner guarantees every retained
    /// byte is a valid digit for `radix`.
    pub fn new(negative: bool, raw: &str, radix: u32) -> Self {
        let mut digits = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c != '_' {
                digits.push(c.to_ascii_lowercase());
            }
        }
        let nonzero = digits.find(|c: char| c != '0');
        match nonzero {
            Some(idx) => {
                if idx > 0 {
                    digits.drain(..idx);
                }
                Self {
                    negative,
                    digits,
                    radix,
                }
            }
            None => Self {
                negative: false,
                digits: "0".to_string(),
                radix,
            },
        }
    }

    /// Exact decimal digits of an integer-valued float.
    ///
    /// `value` must be finite and integer-valued; the platform's exact float
    /// formatting supplies the digits.
    pub(crate) fn from_integral_float(value: f64) -> Self {
        let formatted = format!("{value:.0}");
        match formatted.strip_prefix('-') {
            Some(rest) => Self::new(true, rest, 10),
            None => Self::new(false, &formatted, 10),
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Normalized digits, without sign or radix prefix.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }
}

/// Prints sign and digits only; consult [`BigDigits::radix`] for the base.
impl fmt::Display for BigDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::BigDigits;

    #[test]
    fn strips_separators_and_case() {
        let big = BigDigits::new(false, "F_Fa_b", 16);
        assert_eq!(big.digits(), "ffab");
        assert_eq!(big.radix(), 16);
    }

    #[test]
    fn strips_leading_zeros() {
        let big = BigDigits::new(true, "000123", 10);
        assert_eq!(big.digits(), "123");
        assert!(big.is_negative());
        assert_eq!(big.to_string(), "-123");
    }

    #[test]
    fn zero_loses_its_sign() {
        let big = BigDigits::new(true, "0_00", 10);
        assert_eq!(big.digits(), "0");
        assert!(!big.is_negative());
        assert_eq!(big.to_string(), "0");
    }

    #[test]
    fn equality_is_value_equality() {
        let a = BigDigits::new(false, "00_1", 10);
        let b = BigDigits::new(false, "1", 10);
        assert_eq!(a, b);
    }

    #[test]
    fn integral_float_digits_are_exact() {
        let big = BigDigits::from_integral_float(1e22);
        assert_eq!(big.digits(), "10000000000000000000000");
        let neg = BigDigits::from_integral_float(-1e22);
        assert_eq!(neg.to_string(), "-10000000000000000000000");
    }
}
