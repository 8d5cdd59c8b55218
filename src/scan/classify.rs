//! The single-pass numeric grammar scanner.
//!
//! One forward pass over the bytes, O(1) lookahead, no allocation. The
//! result carries spans into the original input; substrings are copied
//! only later, during materialization, and only when separators force it.

use crate::options::Options;
use crate::scan::reason::Reason;
use crate::scan::special::{Special, match_special};
use crate::scan::trim::trimmed_bounds;

/// Byte offsets into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn slice(self, input: &str) -> &str {
        &input[self.start..self.end]
    }
}

/// Exponent part of a real literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    pub negative: bool,
    pub digits: Span,
    pub has_underscores: bool,
}

/// The scanner's verdict on one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Matches the integer grammar: sign and digits only.
    Integer {
        negative: bool,
        /// Sign plus digit run, whitespace excluded.
        literal: Span,
        /// The digit run, separators included.
        digits: Span,
        /// Count of actual digits; lets materialization skip overflow
        /// checks when the value provably fits.
        digit_count: u32,
        has_underscores: bool,
    },
    /// Matches the real grammar: a decimal point, an exponent, or a
    /// special keyword is present.
    Real {
        negative: bool,
        /// Sign plus full literal, whitespace excluded.
        literal: Span,
        int_digits: Span,
        frac_digits: Span,
        exponent: Option<Exponent>,
        special: Option<Special>,
        has_underscores: bool,
    },
    /// The token satisfies neither grammar.
    Rejected {
        reason: Reason,
        /// Offset of the violating position class.
        at: usize,
    },
}

impl Classification {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Classification::Rejected { .. })
    }
}

/// Digit value of `b` in `radix`, if any.
#[inline]
pub(crate) fn digit_value(b: u8, radix: u32) -> Option<u32> {
    (b as char).to_digit(radix)
}

pub(crate) struct DigitRun {
    pub span: Span,
    pub digit_count: u32,
    pub has_underscores: bool,
    pub next: usize,
}

/// Consumes a run of digits with optional single `_` separators.
///
/// A separator must have a digit on both sides; anything else stops the
/// run or, for a misplaced separator, fails with its offset. The run may
/// be empty; callers decide whether that is legal.
pub(crate) fn digit_run(
    bytes: &[u8],
    start: usize,
    end: usize,
    radix: u32,
    allow_underscores: bool,
) -> Result<DigitRun, (Reason, usize)> {
    let mut pos = start;
    let mut digit_count = 0u32;
    let mut has_underscores = false;
    let mut prev_was_digit = false;
    while pos < end {
        let b = bytes[pos];
        if digit_value(b, radix).is_some() {
            digit_count += 1;
            prev_was_digit = true;
            pos += 1;
        } else if b == b'_' {
            if !allow_underscores || !prev_was_digit {
                return Err((Reason::BadSeparator, pos));
            }
            if pos + 1 >= end || digit_value(bytes[pos + 1], radix).is_none() {
                return Err((Reason::BadSeparator, pos));
            }
            has_underscores = true;
            prev_was_digit = false;
            pos += 1;
        } else {
            break;
        }
    }
    Ok(DigitRun {
        span: Span::new(start, pos),
        digit_count,
        has_underscores,
        next: pos,
    })
}

/// Classifies `input` against the decimal numeric grammar in one pass.
pub fn scan(input: &str, opts: &Options) -> Classification {
    match scan_inner(input, opts) {
        Ok(classification) => classification,
        Err((reason, at)) => Classification::Rejected { reason, at },
    }
}

fn scan_inner(input: &str, opts: &Options) -> Result<Classification, (Reason, usize)> {
    let bytes = input.as_bytes();
    let (start, end) = if opts.surrounding_whitespace_allowed() {
        trimmed_bounds(bytes)
    } else {
        (0, bytes.len())
    };

    let mut pos = start;
    if pos == end {
        return Err((Reason::EmptyMantissa, pos));
    }

    let negative = match bytes[pos] {
        b'+' => {
            pos += 1;
            false
        }
        b'-' => {
            pos += 1;
            true
        }
        _ => false,
    };
    if pos == end {
        return Err((Reason::EmptyMantissa, pos));
    }

    if opts.special_allowed()
        && let Some(special) = match_special(&bytes[pos..end])
    {
        return Ok(Classification::Real {
            negative,
            literal: Span::new(start, end),
            int_digits: Span::empty(pos),
            frac_digits: Span::empty(pos),
            exponent: None,
            special: Some(special),
            has_underscores: false,
        });
    }

    let int_run = digit_run(bytes, pos, end, 10, opts.underscores_allowed())?;
    pos = int_run.next;

    if int_run.digit_count == 0 && (pos == end || bytes[pos] != b'.') {
        // Lone sign at end of input, otherwise a character that can never
        // start a literal.
        return Err(if pos == end {
            (Reason::EmptyMantissa, pos)
        } else {
            (Reason::BadCharacter, pos)
        });
    }

    let mut frac_span = Span::empty(pos);
    let mut frac_digit_count = 0u32;
    let mut frac_underscores = false;
    let mut has_dot = false;
    if pos < end && bytes[pos] == b'.' {
        has_dot = true;
        let dot = pos;
        pos += 1;
        let frac_run = digit_run(bytes, pos, end, 10, opts.underscores_allowed())?;
        if int_run.digit_count == 0 && frac_run.digit_count == 0 {
            return Err((Reason::EmptyMantissa, dot));
        }
        frac_span = frac_run.span;
        frac_digit_count = frac_run.digit_count;
        frac_underscores = frac_run.has_underscores;
        pos = frac_run.next;
    }

    let mut exponent = None;
    let mut exp_underscores = false;
    if pos < end
        && (bytes[pos] == b'e' || bytes[pos] == b'E')
        && int_run.digit_count + frac_digit_count > 0
    {
        pos += 1;
        let mut exp_negative = false;
        if pos < end {
            match bytes[pos] {
                b'+' => pos += 1,
                b'-' => {
                    exp_negative = true;
                    pos += 1;
                }
                _ => {}
            }
        }
        let exp_run = digit_run(bytes, pos, end, 10, opts.underscores_allowed())?;
        if exp_run.digit_count == 0 {
            return Err((Reason::DanglingExponent, pos));
        }
        exp_underscores = exp_run.has_underscores;
        pos = exp_run.next;
        exponent = Some(Exponent {
            negative: exp_negative,
            digits: exp_run.span,
            has_underscores: exp_run.has_underscores,
        });
    }

    if pos != end {
        return Err((Reason::TrailingGarbage, pos));
    }

    if !has_dot && exponent.is_none() {
        return Ok(Classification::Integer {
            negative,
            literal: Span::new(start, end),
            digits: int_run.span,
            digit_count: int_run.digit_count,
            has_underscores: int_run.has_underscores,
        });
    }

    Ok(Classification::Real {
        negative,
        literal: Span::new(start, end),
        int_digits: int_run.span,
        frac_digits: frac_span,
        exponent,
        special: None,
        has_underscores: int_run.has_underscores || frac_underscores || exp_underscores,
    })
}
