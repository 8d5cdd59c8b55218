//! Edge-whitespace handling for the scanner.
//!
//! Whitespace is legal only at the very start and end of a token, never
//! inside a literal. The scanner works on byte offsets into the original
//! input, so trimming reports bounds instead of producing a subslice.

/// Returns true for the ASCII whitespace bytes accepted at token edges.
#[inline]
pub const fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Bounds of `input` with leading and trailing ASCII whitespace removed.
///
/// Returns `(start, end)` such that `input[start..end]` is the token body.
/// For an all-whitespace input, `start == end`.
#[inline]
pub fn trimmed_bounds(input: &[u8]) -> (usize, usize) {
    let mut start = 0;
    let mut end = input.len();
    while start < end && is_ascii_space(input[start]) {
        start += 1;
    }
    while end > start && is_ascii_space(input[end - 1]) {
        end -= 1;
    }
    (start, end)
}
