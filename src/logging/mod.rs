//! Structured logging with analysis context.
//!
//! Provides logging macros and utilities that include the analysis id (and
//! breach source when relevant) in every log message.

pub mod structured;

pub use structured::*;
