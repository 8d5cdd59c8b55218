#![forbid(unsafe_code)]

//! Classify and convert strings to numbers in a single pass.
//!
//! Built for ingestion paths that must decide, for millions of tokens,
//! whether each one is an integer, a float, or neither, without paying
//! for exception objects or a regex engine per token. One scan produces a
//! classification; coercion policies turn it into a value or a definitive
//! rejection.
//!
//! ```
//! use numscan::{Coerced, Number, Options, is_intlike, to_int, to_real};
//!
//! let opts = Options::default();
//! assert_eq!(to_int("1_234", &opts), Ok(Coerced::Num(Number::Int(1234))));
//! assert_eq!(to_real("1.0", &opts), Ok(Coerced::Num(Number::Int(1))));
//! assert!(is_intlike("4.99e2", &opts));
//! assert!(to_int("not_a_number", &opts).is_err());
//! ```

pub mod dispatch;
pub mod error;
pub mod input;
pub mod options;
pub mod policy;
pub mod scan;
pub mod value;

pub use dispatch::{
    Coerced, as_float, as_int, as_real, is_float, is_int, is_intlike, is_real, to_float,
    to_forced_int, to_int, to_real,
};
pub use error::Error;
pub use input::Input;
pub use options::{Base, OnFail, Options};
pub use scan::reason::Reason;
pub use value::big::BigDigits;
pub use value::number::Number;
