pub mod big;
pub mod materialize;
pub mod number;
