//! Breach data model.
//!
//! Record shapes returned by the breach-lookup service and the response
//! envelope that carries them.

pub mod breach;
pub mod response;

pub use breach::*;
pub use response::*;
