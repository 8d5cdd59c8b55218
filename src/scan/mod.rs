pub mod classify;
pub mod radix;
pub mod reason;
pub mod special;
pub mod trim;
