//! Export row projection.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::LookupError;
use crate::model::breach::BreachRecord;
use crate::security::redaction::password_fingerprint;

pub const NO_DATA_TO_EXPORT: &str = "There are no breaches to export.";

const NOT_AVAILABLE: &str = "N/A";
const NO_FIELDS: &str = "None";

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-zA-Z0-9]").unwrap();
}

/// Column headers, in sheet order.
pub const EXPORT_COLUMNS: &[&str] = &[
    "Email/Username",
    "Source",
    "Breach Date",
    "Password",
    "Verified",
    "Fields",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Replace exposed passwords by their fingerprint.
    pub redact_passwords: bool,
}

/// One spreadsheet row. Serializes with the column headers as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Email/Username")]
    pub subject: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Breach Date")]
    pub breach_date: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Verified")]
    pub verified: String,
    #[serde(rename = "Fields")]
    pub fields: String,
}

impl ExportRow {
    pub fn from_record(record: &BreachRecord, options: &ExportOptions) -> Self {
        let password = match record.exposed_password() {
            Some(p) if options.redact_passwords => password_fingerprint(p),
            Some(p) => p.to_string(),
            None => NOT_AVAILABLE.to_string(),
        };

        let source = if record.source.name.is_empty() {
            NOT_AVAILABLE
        } else {
            record.source.name.as_str()
        };

        let fields = if record.fields.is_empty() {
            NO_FIELDS.to_string()
        } else {
            record.fields.join(", ")
        };

        Self {
            subject: record.subject().unwrap_or(NOT_AVAILABLE).to_string(),
            source: source.to_string(),
            breach_date: record
                .source
                .breach_date()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            password,
            verified: if record.source.is_verified() { "Yes" } else { "No" }.to_string(),
            fields,
        }
    }

    /// Cell values in `EXPORT_COLUMNS` order.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.subject,
            &self.source,
            &self.breach_date,
            &self.password,
            &self.verified,
            &self.fields,
        ]
    }
}

/// Project records into export rows.
pub fn export_rows(
    records: &[BreachRecord],
    options: &ExportOptions,
) -> Result<Vec<ExportRow>, LookupError> {
    if records.is_empty() {
        return Err(LookupError::Unsuccessful(NO_DATA_TO_EXPORT.to_string()));
    }

    Ok(records
        .iter()
        .map(|r| ExportRow::from_record(r, options))
        .collect())
}

/// `leakcheck_<query>_<YYYY-MM-DD>.xlsx`, with the query reduced to
/// lowercase ASCII alphanumerics and underscores.
pub fn export_filename(query: &str, date: NaiveDate) -> String {
    let clean = NON_ALPHANUMERIC.replace_all(query, "_").to_lowercase();
    format!("leakcheck_{}_{}.xlsx", clean, date.format("%Y-%m-%d"))
}
