//! Pipeline orchestration module.
//!
//! Lookup analysis pipeline that coordinates:
//! - Response decoding
//! - Statistics aggregation and risk classification
//! - Result filtering
//! - Report rendering

pub mod analysis;
pub mod context;

pub use analysis::*;
pub use context::*;
