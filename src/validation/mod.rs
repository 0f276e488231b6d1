//! Input validation.
//!
//! Checks a lookup query before it is sent to the breach-lookup service.

pub mod query;

pub use query::*;
