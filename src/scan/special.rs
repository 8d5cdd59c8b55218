//! Recognition of the special float keywords.

/// Special float values spelled as keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Nan,
    Infinity,
}

/// Matches `token` (the remainder after any sign, up to the end of the
/// trimmed input) against the special keywords, case-insensitively.
///
/// The whole remainder must match; `"infx"` is not special.
#[inline]
pub fn match_special(token: &[u8]) -> Option<Special> {
    if token.eq_ignore_ascii_case(b"nan") {
        Some(Special::Nan)
    } else if token.eq_ignore_ascii_case(b"inf") || token.eq_ignore_ascii_case(b"infinity") {
        Some(Special::Infinity)
    } else {
        None
    }
}
