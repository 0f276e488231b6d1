//! Menu-bar monitoring summary for a watched subject.

use serde::Serialize;

use crate::model::breach::BreachRecord;
use crate::narrative::date::format_breach_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorEntry {
    pub name: String,
    pub date: String,
}

impl MonitorEntry {
    fn from_record(record: &BreachRecord) -> Self {
        Self {
            name: record.source.name.clone(),
            date: format_breach_date(record.source.breach_date()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorSummary {
    pub title: String,
    pub tooltip: String,
    pub total_breaches: usize,
    pub with_passwords: Vec<MonitorEntry>,
    pub other: Vec<MonitorEntry>,
}

impl MonitorSummary {
    /// Summarize the records found for the monitored subject.
    pub fn from_records(records: &[BreachRecord]) -> Self {
        let (with_passwords, other): (Vec<&BreachRecord>, Vec<&BreachRecord>) =
            records.iter().partition(|r| r.has_password());
        let total = records.len();

        Self {
            title: format!("{} breaches", total),
            tooltip: format!("Leakcheck - {} breaches detected", total),
            total_breaches: total,
            with_passwords: with_passwords.into_iter().map(MonitorEntry::from_record).collect(),
            other: other.into_iter().map(MonitorEntry::from_record).collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.total_breaches == 0
    }
}
