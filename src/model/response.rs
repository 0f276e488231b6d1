//! Lookup service response envelope.

use serde::{Deserialize, Serialize};

use crate::error::{messages, LookupError};
use crate::model::breach::BreachRecord;

/// Body returned by the lookup service for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub quota: u64,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub result: Vec<BreachRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Records of a successful response.
    pub fn into_records(self) -> Result<Vec<BreachRecord>, LookupError> {
        if self.success {
            Ok(self.result)
        } else {
            Err(LookupError::Unsuccessful(
                self.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| messages::UNKNOWN.to_string()),
            ))
        }
    }
}

/// Decode a lookup service body.
pub fn parse_response(body: &str) -> Result<ApiResponse, LookupError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    log::debug!(
        "RESPONSE_DECODED success={} found={} records={} quota={}",
        response.success,
        response.found,
        response.result.len(),
        response.quota
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "success": true,
            "quota": 398,
            "found": 2,
            "result": [
                {"source": {"name": "A", "breach_date": "2019-01", "unverified": 0, "passwordless": 0, "compilation": 0}, "email": "a@b.co", "fields": ["email"]},
                {"password": "x", "source": {"name": "B", "unverified": 1, "passwordless": 0, "compilation": 1}, "username": "ab", "fields": []}
            ]
        }"#;

        let response = parse_response(body).unwrap();
        assert_eq!(response.quota, 398);
        assert_eq!(response.found, 2);

        let records = response.into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source.name, "B");
        assert!(records[1].has_password());
    }

    #[test]
    fn test_missing_result_is_empty() {
        let response = parse_response(r#"{"success": true, "quota": 5, "found": 0}"#).unwrap();
        assert!(response.into_records().unwrap().is_empty());
    }

    #[test]
    fn test_unsuccessful_response() {
        let response =
            parse_response(r#"{"success": false, "error": "Not found"}"#).unwrap();
        match response.into_records() {
            Err(LookupError::Unsuccessful(msg)) => assert_eq!(msg, "Not found"),
            other => panic!("unexpected: {:?}", other),
        }

        let response = parse_response(r#"{"success": false}"#).unwrap();
        let err = response.into_records().unwrap_err();
        assert_eq!(err.to_string(), messages::UNKNOWN);
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_response("{\"success\": "),
            Err(LookupError::Decode(_))
        ));
        assert!(matches!(
            parse_response(r#"{"success": true, "result": {}}"#),
            Err(LookupError::Decode(_))
        ));
    }
}
