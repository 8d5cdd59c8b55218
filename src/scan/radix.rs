//! Integer scanning under an explicit or inferred radix.
//!
//! The decimal grammar in `classify` is the hot path; this recognizer
//! covers the optional base parameter of integer conversion. Bases 2, 8,
//! and 16 accept their conventional `0b`/`0o`/`0x` prefix; `Base::Infer`
//! reads the prefix to pick the radix and falls back to decimal.

use crate::options::{Base, Options};
use crate::scan::classify::{Span, digit_run, digit_value};
use crate::scan::reason::Reason;
use crate::scan::trim::trimmed_bounds;

/// A recognized integer literal in some radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixInteger {
    pub negative: bool,
    pub radix: u32,
    /// The digit run after any prefix, separators included.
    pub digits: Span,
    pub digit_count: u32,
    pub has_underscores: bool,
}

/// Scans `input` as an integer in the base selected by `base`.
///
/// `base` must be `Infer` or a validated `Radix(2..=36)`; the dispatch
/// layer rejects everything else before scanning.
pub fn scan_radix(
    input: &str,
    base: Base,
    opts: &Options,
) -> Result<RadixInteger, (Reason, usize)> {
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

    let (radix, after_prefix) = read_prefix(bytes, pos, end, base);
    let prefix_consumed = after_prefix != pos;
    pos = after_prefix;

    // Python-style: one separator may directly follow the prefix.
    if prefix_consumed
        && pos < end
        && bytes[pos] == b'_'
        && opts.underscores_allowed()
    {
        if pos + 1 >= end || digit_value(bytes[pos + 1], radix).is_none() {
            return Err((Reason::BadSeparator, pos));
        }
        pos += 1;
    }

    let run = digit_run(bytes, pos, end, radix, opts.underscores_allowed())?;
    if run.digit_count == 0 {
        return Err(if run.next == end {
            (Reason::EmptyMantissa, run.next)
        } else {
            (Reason::BadCharacter, run.next)
        });
    }
    if run.next != end {
        return Err((Reason::TrailingGarbage, run.next));
    }

    Ok(RadixInteger {
        negative,
        radix,
        digits: run.span,
        digit_count: run.digit_count,
        has_underscores: run.has_underscores,
    })
}

/// Resolves the radix and consumes a `0x`/`0o`/`0b` prefix when present.
fn read_prefix(bytes: &[u8], pos: usize, end: usize, base: Base) -> (u32, usize) {
    let marker = if pos + 1 < end && bytes[pos] == b'0' {
        Some(bytes[pos + 1])
    } else {
        None
    };
    match base {
        Base::Infer => match marker {
            Some(b'x' | b'X') => (16, pos + 2),
            Some(b'o' | b'O') => (8, pos + 2),
            Some(b'b' | b'B') => (2, pos + 2),
            _ => (10, pos),
        },
        Base::Radix(radix) => {
            let expected = match radix {
                16 => Some([b'x', b'X']),
                8 => Some([b'o', b'O']),
                2 => Some([b'b', b'B']),
                _ => None,
            };
            match (expected, marker) {
                (Some(markers), Some(got)) if got == markers[0] || got == markers[1] => {
                    (radix, pos + 2)
                }
                _ => (radix, pos),
            }
        }
        Base::Decimal => (10, pos),
    }
}
