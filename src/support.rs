//! Crate-level utilities shared by the envelope models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod tridiagonal;
pub mod units;
pub mod weather;
