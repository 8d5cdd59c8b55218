//! Conversion of accepted classifications into concrete values.
//!
//! The scanner's acceptance is the sole gate: nothing here can fail for a
//! classification the scanner produced. Integer overflow is an expected
//! path that switches to the digit-string representation, not an error.

use crate::scan::classify::{Classification, Span, digit_value};
use crate::scan::radix::RadixInteger;
use crate::scan::special::Special;
use crate::value::big::BigDigits;
use crate::value::number::Number;

/// Largest digit count that always fits `i64` in decimal. Below this the
/// accumulator needs no overflow checks.
const UNCHECKED_DECIMAL_DIGITS: u32 = 18;

/// Materializes an `Integer` classification.
pub fn int_from_digits(input: &str, negative: bool, digits: Span, digit_count: u32) -> Number {
    let bytes = &input.as_bytes()[digits.start..digits.end];
    if digit_count <= UNCHECKED_DECIMAL_DIGITS {
        // Accumulate in the negative domain; 18 digits cannot overflow.
        let mut acc: i64 = 0;
        for &b in bytes {
            if b == b'_' {
                continue;
            }
            acc = acc * 10 - i64::from(b - b'0');
        }
        return Number::Int(if negative { acc } else { -acc });
    }
    accumulate_checked(input, negative, digits, bytes, 10)
}

/// Materializes a radix-scanned integer.
pub fn int_from_radix(input: &str, scanned: &RadixInteger) -> Number {
    let bytes = &input.as_bytes()[scanned.digits.start..scanned.digits.end];
    accumulate_checked(input, scanned.negative, scanned.digits, bytes, scanned.radix)
}

/// Checked multiply-then-add accumulation, negative domain so `i64::MIN`
/// parses. Overflow falls back to the digit-string representation.
fn accumulate_checked(
    input: &str,
    negative: bool,
    digits: Span,
    bytes: &[u8],
    radix: u32,
) -> Number {
    let mut acc: i64 = 0;
    for &b in bytes {
        if b == b'_' {
            continue;
        }
        let digit = digit_value(b, radix).expect("scanner accepted digit") as i64;
        acc = match acc
            .checked_mul(radix as i64)
            .and_then(|wide| wide.checked_sub(digit))
        {
            Some(next) => next,
            None => return Number::Big(BigDigits::new(negative, digits.slice(input), radix)),
        };
    }
    if negative {
        Number::Int(acc)
    } else {
        match acc.checked_neg() {
            Some(value) => Number::Int(value),
            None => Number::Big(BigDigits::new(negative, digits.slice(input), radix)),
        }
    }
}

/// Materializes any accepted classification as a float.
///
/// Delegates to the platform's exact round-to-nearest decimal parser; the
/// literal span parses in place unless separators force a stripped copy.
pub fn float_from_literal(
    input: &str,
    negative: bool,
    literal: Span,
    special: Option<Special>,
    has_underscores: bool,
) -> f64 {
    match special {
        Some(Special::Nan) => {
            return if negative { -f64::NAN } else { f64::NAN };
        }
        Some(Special::Infinity) => {
            return if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        None => {}
    }
    let text = literal.slice(input);
    if has_underscores {
        let stripped: String = text.chars().filter(|c| *c != '_').collect();
        stripped.parse().expect("scanner accepted literal")
    } else {
        text.parse().expect("scanner accepted literal")
    }
}

/// Float view of a non-rejected classification.
pub fn float_from_classification(input: &str, classification: &Classification) -> f64 {
    match *classification {
        Classification::Integer {
            negative,
            literal,
            has_underscores,
            ..
        } => float_from_literal(input, negative, literal, None, has_underscores),
        Classification::Real {
            negative,
            literal,
            special,
            has_underscores,
            ..
        } => float_from_literal(input, negative, literal, special, has_underscores),
        Classification::Rejected { .. } => {
            unreachable!("rejected classification reached materialization")
        }
    }
}

/// Exact integer output for an integer-valued finite float.
///
/// Values inside `i64` stay fixed-width; beyond it the platform's exact
/// float formatting supplies the digits.
pub fn int_from_integral_float(value: f64) -> Number {
    // 2^63 is exactly representable; anything in [-2^63, 2^63) casts
    // losslessly once integer-valued.
    const I64_CEIL: f64 = 9_223_372_036_854_775_808.0;
    if value >= -I64_CEIL && value < I64_CEIL {
        Number::Int(value as i64)
    } else {
        Number::Big(BigDigits::from_integral_float(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{float_from_classification, int_from_digits, int_from_integral_float};
    use crate::options::Options;
    use crate::scan::classify::{Classification, scan};
    use crate::value::number::Number;

    fn int_of(input: &str) -> Number {
        match scan(input, &Options::default()) {
            Classification::Integer {
                negative,
                digits,
                digit_count,
                ..
            } => int_from_digits(input, negative, digits, digit_count),
            other => panic!("expected integer for {input:?}, got {other:?}"),
        }
    }

    fn float_of(input: &str) -> f64 {
        let classification = scan(input, &Options::default());
        assert!(!classification.is_rejected(), "input {input:?}");
        float_from_classification(input, &classification)
    }

    #[test]
    fn small_integers_accumulate_unchecked() {
        assert_eq!(int_of("0"), Number::Int(0));
        assert_eq!(int_of("42"), Number::Int(42));
        assert_eq!(int_of("-42"), Number::Int(-42));
        assert_eq!(int_of("1_000_000"), Number::Int(1_000_000));
        assert_eq!(int_of("999999999999999999"), Number::Int(999_999_999_999_999_999));
    }

    #[test]
    fn i64_boundaries_stay_fixed_width() {
        assert_eq!(int_of("9223372036854775807"), Number::Int(i64::MAX));
        assert_eq!(int_of("-9223372036854775808"), Number::Int(i64::MIN));
    }

    #[test]
    fn overflow_switches_to_digit_string() {
        let over_max = int_of("9223372036854775808");
        let big = over_max.as_big().expect("big");
        assert_eq!(big.digits(), "9223372036854775808");
        assert!(!big.is_negative());

        let under_min = int_of("-9223372036854775809");
        let big = under_min.as_big().expect("big");
        assert_eq!(big.digits(), "9223372036854775809");
        assert!(big.is_negative());
    }

    #[test]
    fn big_digits_are_normalized() {
        let huge = int_of("35_892_482_945_872_302_493_947_939_485_729");
        assert_eq!(
            huge.as_big().expect("big").digits(),
            "35892482945872302493947939485729"
        );
    }

    #[test]
    fn floats_match_platform_parser() {
        assert_eq!(float_of("1.5"), 1.5);
        assert_eq!(float_of("-1.2E-3"), -1.2e-3);
        assert_eq!(float_of(".5"), 0.5);
        assert_eq!(float_of("5."), 5.0);
        assert_eq!(float_of("1_0.2_5"), 10.25);
        // bit-for-bit agreement with std on a value that rounds
        assert_eq!(
            float_of("0.1").to_bits(),
            "0.1".parse::<f64>().unwrap().to_bits()
        );
    }

    #[test]
    fn integer_literal_widens_exactly() {
        assert_eq!(float_of("42"), 42.0);
        assert_eq!(
            float_of("123456789012345678901234567890").to_bits(),
            "123456789012345678901234567890"
                .parse::<f64>()
                .unwrap()
                .to_bits()
        );
    }

    #[test]
    fn specials_map_to_ieee_values() {
        assert!(float_of("nan").is_nan());
        assert!(float_of("-nan").is_sign_negative());
        assert_eq!(float_of("inf"), f64::INFINITY);
        assert_eq!(float_of("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn materialization_is_idempotent() {
        let classification = scan("1.5e3", &Options::default());
        let first = float_from_classification("1.5e3", &classification);
        let second = float_from_classification("1.5e3", &classification);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn integral_floats_round_trip() {
        assert_eq!(int_from_integral_float(3.0), Number::Int(3));
        assert_eq!(int_from_integral_float(-3.0), Number::Int(-3));
        assert_eq!(
            int_from_integral_float(-9_223_372_036_854_775_808.0),
            Number::Int(i64::MIN)
        );
        let big = int_from_integral_float(1e19);
        assert_eq!(big.as_big().expect("big").digits(), "10000000000000000000");
    }
}
