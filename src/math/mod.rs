//! Mathematical utilities: closed-form least squares and finite differences.

pub mod diff;
pub mod ols;

pub use diff::*;
pub use ols::*;
