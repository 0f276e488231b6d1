//! Narrative rendering.
//!
//! Turns a [`Stats`](crate::stats::Stats) aggregate and individual records
//! into display strings:
//! - `charts` - timeline and data-type bar charts
//! - `assessment` - risk assessment and recommendation bullets
//! - `report` - the full statistics report
//! - `detail` - per-record detail document
//! - `listing` - list rows, section titles and quota line
//! - `monitor` - menu-bar monitoring summary
//! - `date` - breach date formatting

pub mod assessment;
pub mod charts;
pub mod date;
pub mod detail;
pub mod listing;
pub mod monitor;
pub mod report;

pub use assessment::*;
pub use charts::*;
pub use date::*;
pub use detail::*;
pub use listing::*;
pub use monitor::*;
pub use report::*;
