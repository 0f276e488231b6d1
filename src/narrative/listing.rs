//! Result list rows.

use serde::Serialize;

use crate::model::breach::BreachRecord;

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub title: String,
    pub subtitle: String,
    pub password_exposed: bool,
    pub password_status: String,
    pub verified: bool,
    pub verification_status: String,
}

impl ListEntry {
    pub fn from_record(record: &BreachRecord) -> Self {
        let password_exposed = record.has_password();
        let verified = record.source.is_verified();

        Self {
            title: record.source.name.clone(),
            subtitle: format!(
                "Breach date: {}",
                record.source.breach_date().unwrap_or("N/A")
            ),
            password_exposed,
            password_status: if password_exposed {
                "Password Exposed"
            } else {
                "Password Safe"
            }
            .to_string(),
            verified,
            verification_status: if verified {
                "Verified Source"
            } else {
                "Unverified Source"
            }
            .to_string(),
        }
    }
}

/// "Found: 1 Breach" / "Found: 3 Breaches".
pub fn section_title(count: usize) -> String {
    format!(
        "Found: {} Breach{}",
        count,
        if count == 1 { "" } else { "es" }
    )
}

/// Remaining lookup quota. A zero quota is shown as "N/A".
pub fn quota_subtitle(quota: u64) -> String {
    if quota == 0 {
        "Quota: N/A Requests Remaining".to_string()
    } else {
        format!("Quota: {} Requests Remaining", quota)
    }
}
