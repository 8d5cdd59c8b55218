//! Typed input to the dispatch façade.
//!
//! Already-numeric input takes the passthrough policy and never reaches
//! the scanner; text is scanned. Byte input is the untyped entry point:
//! valid UTF-8 scans as text, anything else is a type mismatch.

/// One conversion input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl Input<'_> {
    /// True for inputs the passthrough policy handles without scanning.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Input::Int(_) | Input::Float(_))
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Input::Int(value)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(value: &'a [u8]) -> Self {
        Input::Bytes(value)
    }
}
