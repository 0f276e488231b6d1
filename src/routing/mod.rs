//! Result routing module.
//!
//! Decides which breach records a result list shows:
//! - All results
//! - Password found / no password
//! - Verified / unverified sources

pub mod filter;

pub use filter::*;
