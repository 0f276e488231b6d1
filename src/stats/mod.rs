//! Breach statistics and risk assessment.
//!
//! Reduces a lookup result into a [`Stats`] aggregate and derives a
//! [`RiskLevel`] from it. Everything here is pure and allocation-only.

pub mod aggregate;
pub mod risk;

pub use aggregate::*;
pub use risk::*;
