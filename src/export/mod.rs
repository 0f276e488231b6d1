//! Export module.
//!
//! Projects breach records into tabular rows and names the export file.
//! Writing the spreadsheet itself is left to the host.

pub mod rows;

pub use rows::*;
