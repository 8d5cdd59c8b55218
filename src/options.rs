//! Per-call configuration.
//!
//! There is no global state: every conversion is a pure function of the
//! input and an immutable `Options` value. Callers build one up front and
//! share it freely across threads.

use crate::value::number::Number;

/// Radix selection for integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Plain decimal, the default. The only base the float grammar knows.
    Decimal,
    /// Infer from a `0x`/`0o`/`0b` prefix, decimal otherwise.
    Infer,
    /// An explicit radix. Valid values are 2 through 36.
    Radix(u32),
}

/// What a conversion yields when the input fails to convert.
///
/// Applies to data failures (malformed literals, wrong numeric shape).
/// Type mismatches and configuration conflicts always error regardless.
#[derive(Debug, Clone, PartialEq)]
pub enum OnFail {
    /// Propagate the failure as `Err`.
    Raise,
    /// Hand the original input back unchanged.
    ReturnInput,
    /// Substitute a configured value.
    ReturnDefault(Number),
    /// Yield the sentinel variant, for callers that filter afterwards.
    ReturnSentinel,
}

/// Immutable per-call options, builder style.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    base: Base,
    on_fail: OnFail,
    allow_underscores: bool,
    allow_surrounding_whitespace: bool,
    allow_special: bool,
    coerce_intlike: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base: Base::Decimal,
            on_fail: OnFail::Raise,
            allow_underscores: true,
            allow_surrounding_whitespace: true,
            allow_special: true,
            coerce_intlike: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn on_fail(mut self, on_fail: OnFail) -> Self {
        self.on_fail = on_fail;
        self
    }

    /// Accept single `_` separators between digits.
    pub fn allow_underscores(mut self, allow: bool) -> Self {
        self.allow_underscores = allow;
        self
    }

    /// Accept ASCII whitespace at the very start and end of the token.
    pub fn allow_surrounding_whitespace(mut self, allow: bool) -> Self {
        self.allow_surrounding_whitespace = allow;
        self
    }

    /// Accept `nan`, `inf`, and `infinity` (any case, optional sign).
    pub fn allow_special(mut self, allow: bool) -> Self {
        self.allow_special = allow;
        self
    }

    /// Under the int-preferring shape, narrow integer-valued floats to
    /// integer output.
    pub fn coerce_intlike(mut self, coerce: bool) -> Self {
        self.coerce_intlike = coerce;
        self
    }

    #[inline]
    pub fn get_base(&self) -> Base {
        self.base
    }

    #[inline]
    pub fn get_on_fail(&self) -> &OnFail {
        &self.on_fail
    }

    #[inline]
    pub fn underscores_allowed(&self) -> bool {
        self.allow_underscores
    }

    #[inline]
    pub fn surrounding_whitespace_allowed(&self) -> bool {
        self.allow_surrounding_whitespace
    }

    #[inline]
    pub fn special_allowed(&self) -> bool {
        self.allow_special
    }

    #[inline]
    pub fn coerces_intlike(&self) -> bool {
        self.coerce_intlike
    }
}

#[cfg(test)]
mod tests {
    use super::{Base, OnFail, Options};
    use crate::value::number::Number;

    #[test]
    fn defaults_are_permissive_and_raising() {
        let opts = Options::default();
        assert_eq!(opts.get_base(), Base::Decimal);
        assert_eq!(*opts.get_on_fail(), OnFail::Raise);
        assert!(opts.underscores_allowed());
        assert!(opts.surrounding_whitespace_allowed());
        assert!(opts.special_allowed());
        assert!(opts.coerces_intlike());
    }

    #[test]
    fn builder_overrides_stick() {
        let opts = Options::new()
            .base(Base::Radix(16))
            .on_fail(OnFail::ReturnDefault(Number::Int(0)))
            .allow_underscores(false)
            .allow_surrounding_whitespace(false)
            .allow_special(false)
            .coerce_intlike(false);
        assert_eq!(opts.get_base(), Base::Radix(16));
        assert_eq!(
            *opts.get_on_fail(),
            OnFail::ReturnDefault(Number::Int(0))
        );
        assert!(!opts.underscores_allowed());
        assert!(!opts.surrounding_whitespace_allowed());
        assert!(!opts.special_allowed());
        assert!(!opts.coerces_intlike());
    }
}
