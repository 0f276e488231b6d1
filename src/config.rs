//! Host-supplied preferences.
//!
//! Preferences arrive as a JSON object from the host application; nothing is
//! read from disk or the environment.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

pub const MONITORED_EMAIL_REQUIRED: &str = "Please configure an email address to monitor";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub monitored_email: Option<String>,
}

impl Preferences {
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The subject watched by the menu-bar monitor.
    pub fn monitored_subject(&self) -> Result<&str, LookupError> {
        self.monitored_email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LookupError::Configuration(MONITORED_EMAIL_REQUIRED.to_string()))
    }
}
