//! The four predicates: classification without materialization.
//!
//! Each predicate answers exactly "would the corresponding conversion
//! succeed" by running only the scanner. The intlike test on a real uses
//! span arithmetic over the digit groups, so no value is ever built and
//! nothing allocates.

use crate::options::{Base, Options};
use crate::scan::classify::{Classification, Exponent, Span, scan};
use crate::scan::radix::scan_radix;

/// Which shape a predicate mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Int,
    Float,
    Real,
    IntLike,
}

/// Runs `pred` against decimal (or, for `Int` with a configured base,
/// radix) text.
pub fn check_text(input: &str, pred: Predicate, opts: &Options) -> bool {
    if pred == Predicate::Int && opts.get_base() != Base::Decimal {
        return scan_radix(input, opts.get_base(), opts).is_ok();
    }
    match scan(input, opts) {
        Classification::Rejected { .. } => false,
        Classification::Integer { .. } => true,
        Classification::Real {
            int_digits,
            frac_digits,
            exponent,
            special,
            ..
        } => match pred {
            Predicate::Int => false,
            Predicate::Float | Predicate::Real => true,
            Predicate::IntLike => {
                special.is_none() && real_is_intlike(input, int_digits, frac_digits, exponent)
            }
        },
    }
}

/// Predicate result for an already-float input: integer-valued and finite.
#[inline]
pub fn float_input_is_intlike(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}

/// Whether a real literal denotes a mathematical integer, from spans alone.
///
/// With combined significant digits `d`, fractional digit count `f`,
/// exponent `e`, and `z` trailing zeros of `d`: the value is an integer
/// exactly when `e - f + z >= 0`, or when every digit is zero.
fn real_is_intlike(
    input: &str,
    int_digits: Span,
    frac_digits: Span,
    exponent: Option<Exponent>,
) -> bool {
    let bytes = input.as_bytes();

    let mut frac_count: i64 = 0;
    let mut total: i64 = 0;
    let mut trailing: i64 = 0;
    let mut still_trailing = true;
    for pos in (frac_digits.start..frac_digits.end).rev() {
        match bytes[pos] {
            b'_' => continue,
            b'0' => {
                frac_count += 1;
                total += 1;
                if still_trailing {
                    trailing += 1;
                }
            }
            _ => {
                frac_count += 1;
                total += 1;
                still_trailing = false;
            }
        }
    }
    for pos in (int_digits.start..int_digits.end).rev() {
        match bytes[pos] {
            b'_' => continue,
            b'0' => {
                total += 1;
                if still_trailing {
                    trailing += 1;
                }
            }
            _ => {
                total += 1;
                still_trailing = false;
            }
        }
    }
    if trailing == total {
        // All digits zero: the value is zero whatever the exponent says.
        return true;
    }

    let exp = exponent.map_or(0, |e| exponent_value(bytes, e));
    exp.saturating_sub(frac_count).saturating_add(trailing) >= 0
}

/// Saturating numeric value of the exponent digits. Saturation is safe:
/// any exponent beyond the digit counts decides the test on sign alone.
fn exponent_value(bytes: &[u8], exponent: Exponent) -> i64 {
    let mut value: i64 = 0;
    for pos in exponent.digits.start..exponent.digits.end {
        let b = bytes[pos];
        if b == b'_' {
            continue;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    if exponent.negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::{Predicate, check_text, float_input_is_intlike};
    use crate::options::{Base, Options};

    fn opts() -> Options {
        Options::default()
    }

    #[test]
    fn integers_satisfy_every_predicate() {
        for pred in [
            Predicate::Int,
            Predicate::Float,
            Predicate::Real,
            Predicate::IntLike,
        ] {
            assert!(check_text("42", pred, &opts()), "{pred:?}");
            assert!(check_text("-1_000", pred, &opts()), "{pred:?}");
        }
    }

    #[test]
    fn reals_fail_only_the_int_predicate() {
        assert!(!check_text("1.5", Predicate::Int, &opts()));
        assert!(check_text("1.5", Predicate::Float, &opts()));
        assert!(check_text("1.5", Predicate::Real, &opts()));
    }

    #[test]
    fn rejects_fail_every_predicate() {
        for pred in [
            Predicate::Int,
            Predicate::Float,
            Predicate::Real,
            Predicate::IntLike,
        ] {
            assert!(!check_text("not_a_number", pred, &opts()), "{pred:?}");
            assert!(!check_text("1__2", pred, &opts()), "{pred:?}");
            assert!(!check_text("1e", pred, &opts()), "{pred:?}");
        }
    }

    #[test]
    fn intlike_span_arithmetic() {
        // exponent absorbs the fraction
        assert!(check_text("4.99e2", Predicate::IntLike, &opts()));
        assert!(check_text("1.0", Predicate::IntLike, &opts()));
        assert!(check_text("100e-1", Predicate::IntLike, &opts()));
        assert!(check_text("1e300", Predicate::IntLike, &opts()));
        assert!(check_text("0.000", Predicate::IntLike, &opts()));
        assert!(check_text("0.00e-99", Predicate::IntLike, &opts()));
        // fractional information survives
        assert!(!check_text("1.5", Predicate::IntLike, &opts()));
        assert!(!check_text("15e-1", Predicate::IntLike, &opts()));
        assert!(!check_text("4.999e2", Predicate::IntLike, &opts()));
        assert!(!check_text("0.5", Predicate::IntLike, &opts()));
    }

    #[test]
    fn intlike_rejects_specials() {
        assert!(!check_text("nan", Predicate::IntLike, &opts()));
        assert!(!check_text("inf", Predicate::IntLike, &opts()));
        assert!(check_text("nan", Predicate::Float, &opts()));
    }

    #[test]
    fn huge_exponents_saturate_safely() {
        assert!(check_text("1e99999999999999999999", Predicate::IntLike, &opts()));
        assert!(!check_text("1.5e-99999999999999999999", Predicate::IntLike, &opts()));
    }

    #[test]
    fn int_predicate_honors_base() {
        let hex = Options::new().base(Base::Radix(16));
        assert!(check_text("ff", Predicate::Int, &hex));
        assert!(!check_text("fg", Predicate::Int, &hex));
    }

    #[test]
    fn float_input_intlike() {
        assert!(float_input_is_intlike(4.0));
        assert!(float_input_is_intlike(-0.0));
        assert!(!float_input_is_intlike(4.5));
        assert!(!float_input_is_intlike(f64::NAN));
        assert!(!float_input_is_intlike(f64::INFINITY));
    }
}
