//! Small, reusable helpers used across the crate.

pub mod timeout;

pub use timeout::*;
