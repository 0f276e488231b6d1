//! Error types for the helpers around the statistics engine.
//!
//! The engine itself is total; these errors come from query validation,
//! response decoding, export and preference handling.

use thiserror::Error;

use crate::validation::query::ValidationError;

/// Operator-facing messages for API failures, keyed by HTTP status.
pub mod messages {
    pub const UNAUTHORIZED: &str = "Please check your API key in the preferences.";
    pub const RATE_LIMIT: &str = "Please wait before making other searches.";
    pub const FORBIDDEN: &str = "Please check your subscription status or limits.";
    pub const INVALID_SEARCH: &str = "Unable to determine search type.";
    pub const UNKNOWN: &str = "An unexpected error occurred.";

    pub const ERROR_TITLE: &str = "Error fetching data";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
    pub const CONFIGURATION_REQUIRED: &str = "Configuration Required";
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Unsuccessful(String),

    #[error("failed to decode lookup response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Configuration(String),
}

impl LookupError {
    /// Build an API error from the HTTP status the host received.
    pub fn from_status(status: u16) -> Self {
        let message = match status {
            401 => messages::UNAUTHORIZED,
            429 => messages::RATE_LIMIT,
            403 => messages::FORBIDDEN,
            422 => messages::INVALID_SEARCH,
            _ => messages::UNKNOWN,
        };
        LookupError::Api {
            status,
            message: message.to_string(),
        }
    }

    /// Short title for a failure notification.
    pub fn title(&self) -> &'static str {
        match self {
            LookupError::Api { status, .. } => match status {
                401 => "Authentication Error",
                429 => "Too many requests",
                403 => "Access denied",
                422 => "Invalid search",
                _ => "API Error",
            },
            LookupError::Validation(_) => messages::INVALID_INPUT,
            LookupError::Configuration(_) => messages::CONFIGURATION_REQUIRED,
            LookupError::Unsuccessful(_) => messages::ERROR_TITLE,
            LookupError::Decode(_) => messages::UNEXPECTED_ERROR,
        }
    }

    /// Message shown under the title. Decode details stay in the logs.
    pub fn operator_message(&self) -> String {
        match self {
            LookupError::Decode(_) => messages::UNKNOWN.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            LookupError::from_status(401).to_string(),
            messages::UNAUTHORIZED
        );
        assert_eq!(LookupError::from_status(429).to_string(), messages::RATE_LIMIT);
        assert_eq!(LookupError::from_status(403).to_string(), messages::FORBIDDEN);
        assert_eq!(
            LookupError::from_status(422).to_string(),
            messages::INVALID_SEARCH
        );
        assert_eq!(LookupError::from_status(500).to_string(), messages::UNKNOWN);
    }

    #[test]
    fn test_titles() {
        assert_eq!(LookupError::from_status(401).title(), "Authentication Error");
        assert_eq!(LookupError::from_status(429).title(), "Too many requests");
        assert_eq!(LookupError::from_status(403).title(), "Access denied");
        assert_eq!(LookupError::from_status(422).title(), "Invalid search");
        assert_eq!(LookupError::from_status(502).title(), "API Error");
        assert_eq!(
            LookupError::from(ValidationError::MinLength).title(),
            "Invalid input"
        );
        assert_eq!(
            LookupError::Configuration("missing".to_string()).title(),
            "Configuration Required"
        );
    }

    #[test]
    fn test_decode_error_hides_details() {
        let err: LookupError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.title(), messages::UNEXPECTED_ERROR);
        assert_eq!(err.operator_message(), messages::UNKNOWN);
        assert!(err.to_string().starts_with("failed to decode"));
    }
}
