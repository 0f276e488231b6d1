//! BreachLens Core - breach statistics and risk-assessment engine
//!
//! This crate turns the response of a breach-lookup service into the
//! statistics, risk indicators, listings, exports and narrative reports shown
//! by the BreachLens panel. It is exposed to Python via PyO3 (`python`
//! feature). The implementation prioritizes:
//!
//! 1. **Purity** - the statistics engine is a total, side-effect free transform
//! 2. **Privacy** - lookup subjects are masked and passwords never logged
//! 3. **Logging** - every pipeline step logged with its analysis context
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `model` - Breach records and the lookup response envelope
//! - `stats` - Aggregation and risk classification
//! - `narrative` - Charts, assessments, reports and list/menu summaries
//! - `pipeline` - Per-lookup orchestrator
//! - `validation` - Lookup query validation
//! - `routing` - Result filtering
//! - `export` - Export row projection and file naming
//! - `security` - Subject masking and password fingerprints
//! - `config` - Host-supplied preferences
//! - `logging` - Structured logging with analysis context

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod narrative;
pub mod pipeline;
pub mod routing;
pub mod security;
pub mod stats;
pub mod validation;

#[cfg(feature = "python")]
mod python;

pub use error::LookupError;
pub use model::{BreachRecord, BreachSource};
pub use stats::{aggregate, classify, RiskLevel, Stats};

/// Initialize the module-level logger.
///
/// Safe to call repeatedly; only the first call installs the logger.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
