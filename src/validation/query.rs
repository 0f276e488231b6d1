//! Lookup query validation.
//!
//! A query is an email address or a username. Checks run in a fixed order and
//! the first failure is reported.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Shortest accepted query, in characters.
pub const MIN_QUERY_LENGTH: usize = 3;

lazy_static! {
    /// Loose email shape: something@something.something, no whitespace.
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email or username (minimum 3 characters).")]
    MinLength,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid email or username (no spaces allowed).")]
    ContainsSpaces,
}

pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if query.chars().count() < MIN_QUERY_LENGTH {
        return Err(ValidationError::MinLength);
    }

    if query.contains('@') && !EMAIL_PATTERN.is_match(query) {
        return Err(ValidationError::InvalidEmail);
    }

    if query.contains(' ') {
        return Err(ValidationError::ContainsSpaces);
    }

    Ok(())
}

pub fn is_email(query: &str) -> bool {
    EMAIL_PATTERN.is_match(query)
}
