//! The four coercion shapes, composed over the shared scanner.
//!
//! One automaton, one materializer; the shapes only decide which
//! classifications pass and what representation comes out. This keeps the
//! per-character work monomorphic instead of dispatching per shape.

use crate::error::Error;
use crate::options::Options;
use crate::scan::classify::{Classification, scan};
use crate::scan::radix::scan_radix;
use crate::value::materialize::{
    float_from_classification, int_from_digits, int_from_integral_float, int_from_radix,
};
use crate::value::number::Number;

/// The four call shapes the public surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Integer classification only; a real fails even when integer-valued.
    StrictInt,
    /// Integer or real; integers widen to float.
    StrictFloat,
    /// Integer or real; integer-valued reals may narrow to integer output.
    Real,
    /// Integer or real; reals truncate toward zero.
    ForceInt,
}

/// Coerces decimal text under `shape`.
pub fn coerce_text(input: &str, shape: Shape, opts: &Options) -> Result<Number, Error> {
    let classification = scan(input, opts);
    match classification {
        Classification::Rejected { reason, .. } => Err(Error::Malformed(reason)),
        Classification::Integer {
            negative,
            digits,
            digit_count,
            ..
        } => match shape {
            Shape::StrictFloat => Ok(Number::Float(float_from_classification(
                input,
                &classification,
            ))),
            Shape::StrictInt | Shape::Real | Shape::ForceInt => {
                Ok(int_from_digits(input, negative, digits, digit_count))
            }
        },
        Classification::Real { .. } => match shape {
            Shape::StrictInt => Err(Error::NotIntLike),
            Shape::StrictFloat => Ok(Number::Float(float_from_classification(
                input,
                &classification,
            ))),
            Shape::Real => {
                let value = float_from_classification(input, &classification);
                if opts.coerces_intlike()
                    && let Some(narrowed) = narrow_integral(value)
                {
                    Ok(narrowed)
                } else {
                    Ok(Number::Float(value))
                }
            }
            Shape::ForceInt => {
                truncate_to_int(float_from_classification(input, &classification))
            }
        },
    }
}

/// Coerces text as an integer in the configured non-decimal base.
pub fn coerce_text_radix(input: &str, opts: &Options) -> Result<Number, Error> {
    match scan_radix(input, opts.get_base(), opts) {
        Ok(scanned) => Ok(int_from_radix(input, &scanned)),
        Err((reason, _)) => Err(Error::Malformed(reason)),
    }
}

/// Passthrough policy for already-integer input. Cannot fail.
pub fn coerce_int_input(value: i64, shape: Shape) -> Number {
    match shape {
        Shape::StrictFloat => Number::Float(value as f64),
        Shape::StrictInt | Shape::Real | Shape::ForceInt => Number::Int(value),
    }
}

/// Passthrough policy for already-float input.
///
/// The explicit fast-path integer shape rejects floats outright; the
/// drop-in replacement shape truncates them instead (see `dispatch`).
pub fn coerce_float_input(value: f64, shape: Shape, opts: &Options) -> Result<Number, Error> {
    match shape {
        Shape::StrictInt => Err(Error::NotIntLike),
        Shape::StrictFloat => Ok(Number::Float(value)),
        Shape::Real => {
            if opts.coerces_intlike()
                && let Some(narrowed) = narrow_integral(value)
            {
                Ok(narrowed)
            } else {
                Ok(Number::Float(value))
            }
        }
        Shape::ForceInt => truncate_to_int(value),
    }
}

/// Integer output for a finite float, truncating toward zero. NaN and the
/// infinities have no integer value.
pub fn truncate_to_int(value: f64) -> Result<Number, Error> {
    if !value.is_finite() {
        return Err(Error::NotIntLike);
    }
    Ok(int_from_integral_float(value.trunc()))
}

/// Narrows a float to integer output only when no fractional information
/// is discarded. Decided on the materialized value with exact float
/// equality, never on the literal's spelling.
fn narrow_integral(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated == value {
        Some(int_from_integral_float(truncated))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{Shape, coerce_float_input, coerce_int_input, coerce_text, truncate_to_int};
    use crate::error::Error;
    use crate::options::Options;
    use crate::value::number::Number;

    fn opts() -> Options {
        Options::default()
    }

    #[test]
    fn strict_int_rejects_reals() {
        assert_eq!(
            coerce_text("4.0", Shape::StrictInt, &opts()),
            Err(Error::NotIntLike)
        );
        assert_eq!(
            coerce_text("4", Shape::StrictInt, &opts()),
            Ok(Number::Int(4))
        );
    }

    #[test]
    fn strict_float_widens_integers() {
        assert_eq!(
            coerce_text("4", Shape::StrictFloat, &opts()),
            Ok(Number::Float(4.0))
        );
        assert_eq!(
            coerce_text("4.5", Shape::StrictFloat, &opts()),
            Ok(Number::Float(4.5))
        );
    }

    #[test]
    fn real_narrows_only_integer_valued_floats() {
        assert_eq!(coerce_text("1.0", Shape::Real, &opts()), Ok(Number::Int(1)));
        assert_eq!(
            coerce_text("1.0e0", Shape::Real, &opts()),
            Ok(Number::Int(1))
        );
        assert_eq!(
            coerce_text("1.5", Shape::Real, &opts()),
            Ok(Number::Float(1.5))
        );
        assert_eq!(
            coerce_text("1.0000000000000002", Shape::Real, &opts()),
            Ok(Number::Float(1.000_000_000_000_000_2))
        );
    }

    #[test]
    fn real_narrowing_respects_config() {
        let no_coerce = Options::new().coerce_intlike(false);
        assert_eq!(
            coerce_text("1.0", Shape::Real, &no_coerce),
            Ok(Number::Float(1.0))
        );
    }

    #[test]
    fn force_int_truncates_toward_zero() {
        assert_eq!(
            coerce_text("3.9", Shape::ForceInt, &opts()),
            Ok(Number::Int(3))
        );
        assert_eq!(
            coerce_text("-3.9", Shape::ForceInt, &opts()),
            Ok(Number::Int(-3))
        );
        assert_eq!(
            coerce_text("nan", Shape::ForceInt, &opts()),
            Err(Error::NotIntLike)
        );
        assert_eq!(
            coerce_text("inf", Shape::ForceInt, &opts()),
            Err(Error::NotIntLike)
        );
    }

    #[test]
    fn passthrough_integers_never_fail() {
        assert_eq!(coerce_int_input(42, Shape::StrictInt), Number::Int(42));
        assert_eq!(coerce_int_input(42, Shape::ForceInt), Number::Int(42));
        assert_eq!(coerce_int_input(42, Shape::Real), Number::Int(42));
        assert_eq!(coerce_int_input(42, Shape::StrictFloat), Number::Float(42.0));
    }

    #[test]
    fn passthrough_floats_follow_shape_rules() {
        assert_eq!(
            coerce_float_input(4.5, Shape::StrictInt, &opts()),
            Err(Error::NotIntLike)
        );
        assert_eq!(
            coerce_float_input(4.5, Shape::StrictFloat, &opts()),
            Ok(Number::Float(4.5))
        );
        assert_eq!(
            coerce_float_input(4.0, Shape::Real, &opts()),
            Ok(Number::Int(4))
        );
        assert_eq!(
            coerce_float_input(4.5, Shape::ForceInt, &opts()),
            Ok(Number::Int(4))
        );
    }

    #[test]
    fn huge_integral_floats_stay_exact() {
        let narrowed = coerce_text("1e19", Shape::Real, &opts()).expect("coerce");
        assert_eq!(
            narrowed.as_big().expect("big").digits(),
            "10000000000000000000"
        );
        let truncated = truncate_to_int(1e19).expect("truncate");
        assert_eq!(
            truncated.as_big().expect("big").digits(),
            "10000000000000000000"
        );
    }
}
