//! Security module.
//!
//! Masks lookup subjects for logging and fingerprints exposed passwords.

pub mod redaction;

pub use redaction::*;
