//! The dispatch façade: the externally consumed API surface.
//!
//! Routes already-numeric input through the passthrough policy (never
//! re-scanned), text through scanner + coercion policy, and applies the
//! configured `on_fail` behavior to data failures. Type mismatches and
//! configuration conflicts bypass `on_fail` and always error.

use crate::error::Error;
use crate::input::Input;
use crate::options::{Base, OnFail, Options};
use crate::policy::checks::{Predicate, check_text, float_input_is_intlike};
use crate::policy::coerce::{
    Shape, coerce_float_input, coerce_int_input, coerce_text, coerce_text_radix, truncate_to_int,
};
use crate::value::number::Number;

/// Outcome of a conversion once `on_fail` has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<'a> {
    /// A materialized value.
    Num(Number),
    /// The original input, handed back under `OnFail::ReturnInput`.
    Raw(Input<'a>),
    /// The marker yielded under `OnFail::ReturnSentinel`.
    Sentinel,
}

impl Coerced<'_> {
    #[inline]
    pub fn number(self) -> Option<Number> {
        match self {
            Coerced::Num(number) => Some(number),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Coerced::Num(number) => Some(number),
            _ => None,
        }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Coerced::Sentinel)
    }
}

/// Strict integer conversion. Honors `base`; text reals and already-float
/// input fail (the drop-in shape [`as_int`] truncates the latter instead).
pub fn to_int<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Coerced<'a>, Error> {
    let input = input.into();
    validate_int_base(&input, opts)?;
    convert(input, Shape::StrictInt, opts)
}

/// Strict float conversion. Integer input and integer text widen.
pub fn to_float<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Coerced<'a>, Error> {
    require_decimal_base(opts)?;
    convert(input.into(), Shape::StrictFloat, opts)
}

/// Int-preferring conversion: integers stay integers, and integer-valued
/// reals narrow when `coerce_intlike` is enabled.
pub fn to_real<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Coerced<'a>, Error> {
    require_decimal_base(opts)?;
    convert(input.into(), Shape::Real, opts)
}

/// Forced integer conversion: reals truncate toward zero.
pub fn to_forced_int<'a>(
    input: impl Into<Input<'a>>,
    opts: &Options,
) -> Result<Coerced<'a>, Error> {
    require_decimal_base(opts)?;
    convert(input.into(), Shape::ForceInt, opts)
}

/// Drop-in replacement for the native integer constructor: truncates
/// already-float input, honors `base` on text, and always raises on
/// failure (`on_fail` does not apply to the drop-in shapes).
pub fn as_int<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Number, Error> {
    let input = input.into();
    validate_int_base(&input, opts)?;
    match input {
        Input::Int(value) => Ok(Number::Int(value)),
        Input::Float(value) => truncate_to_int(value),
        Input::Str(text) => convert_text(text, Shape::StrictInt, opts),
        Input::Bytes(bytes) => convert_text(text_of(bytes)?, Shape::StrictInt, opts),
    }
}

/// Drop-in replacement for the native float constructor.
pub fn as_float<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Number, Error> {
    require_decimal_base(opts)?;
    match input.into() {
        Input::Int(value) => Ok(Number::Float(value as f64)),
        Input::Float(value) => Ok(Number::Float(value)),
        Input::Str(text) => convert_text(text, Shape::StrictFloat, opts),
        Input::Bytes(bytes) => convert_text(text_of(bytes)?, Shape::StrictFloat, opts),
    }
}

/// Drop-in int-preferring conversion, always raising on failure.
pub fn as_real<'a>(input: impl Into<Input<'a>>, opts: &Options) -> Result<Number, Error> {
    require_decimal_base(opts)?;
    match input.into() {
        Input::Int(value) => Ok(Number::Int(value)),
        Input::Float(value) => coerce_float_input(value, Shape::Real, opts),
        Input::Str(text) => convert_text(text, Shape::Real, opts),
        Input::Bytes(bytes) => convert_text(text_of(bytes)?, Shape::Real, opts),
    }
}

/// Would [`to_int`] succeed? Runs only the scanner.
pub fn is_int<'a>(input: impl Into<Input<'a>>, opts: &Options) -> bool {
    predicate(input.into(), Predicate::Int, opts)
}

/// Would [`to_float`] succeed? Runs only the scanner.
pub fn is_float<'a>(input: impl Into<Input<'a>>, opts: &Options) -> bool {
    predicate(input.into(), Predicate::Float, opts)
}

/// Would [`to_real`] succeed? Runs only the scanner.
pub fn is_real<'a>(input: impl Into<Input<'a>>, opts: &Options) -> bool {
    predicate(input.into(), Predicate::Real, opts)
}

/// Is the value mathematically integer-valued, whatever its spelling?
pub fn is_intlike<'a>(input: impl Into<Input<'a>>, opts: &Options) -> bool {
    predicate(input.into(), Predicate::IntLike, opts)
}

fn convert<'a>(input: Input<'a>, shape: Shape, opts: &Options) -> Result<Coerced<'a>, Error> {
    let outcome = match input {
        Input::Int(value) => Ok(coerce_int_input(value, shape)),
        Input::Float(value) => coerce_float_input(value, shape, opts),
        Input::Str(text) => convert_text(text, shape, opts),
        Input::Bytes(bytes) => convert_text(text_of(bytes)?, shape, opts),
    };
    match outcome {
        Ok(number) => Ok(Coerced::Num(number)),
        Err(err) if err.is_data_failure() => apply_on_fail(err, input, opts),
        Err(err) => Err(err),
    }
}

fn convert_text(text: &str, shape: Shape, opts: &Options) -> Result<Number, Error> {
    if shape == Shape::StrictInt && opts.get_base() != Base::Decimal {
        coerce_text_radix(text, opts)
    } else {
        coerce_text(text, shape, opts)
    }
}

/// Byte input is passthrough-eligible only as UTF-8 text; anything else
/// is a type mismatch, independent of `on_fail`.
fn text_of(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|_| Error::UnsupportedInput)
}

fn apply_on_fail<'a>(err: Error, input: Input<'a>, opts: &Options) -> Result<Coerced<'a>, Error> {
    match opts.get_on_fail() {
        OnFail::Raise => Err(err),
        OnFail::ReturnInput => Ok(Coerced::Raw(input)),
        OnFail::ReturnDefault(number) => Ok(Coerced::Num(number.clone())),
        OnFail::ReturnSentinel => Ok(Coerced::Sentinel),
    }
}

/// The `base` option participates only in integer conversion, and only
/// for text input. Predicates other than `is_int` ignore it.
fn validate_int_base(input: &Input<'_>, opts: &Options) -> Result<(), Error> {
    match opts.get_base() {
        Base::Decimal => Ok(()),
        Base::Radix(radix) if !(2..=36).contains(&radix) => {
            Err(Error::ConfigConflict("base must be between 2 and 36"))
        }
        _ if input.is_numeric() => Err(Error::ConfigConflict("base requires text input")),
        _ => Ok(()),
    }
}

fn require_decimal_base(opts: &Options) -> Result<(), Error> {
    if opts.get_base() == Base::Decimal {
        Ok(())
    } else {
        Err(Error::ConfigConflict("base applies only to integer conversion"))
    }
}

fn predicate(input: Input<'_>, pred: Predicate, opts: &Options) -> bool {
    match input {
        Input::Int(_) => true,
        Input::Float(value) => match pred {
            Predicate::Int => false,
            Predicate::Float | Predicate::Real => true,
            Predicate::IntLike => float_input_is_intlike(value),
        },
        Input::Str(text) => check_text(text, pred, opts),
        Input::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => check_text(text, pred, opts),
            Err(_) => false,
        },
    }
}
