//! Statistics aggregation over breach records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::breach::BreachRecord;
use crate::stats::risk::{classify, RiskLevel};

/// Aggregate over one lookup result.
///
/// Only [`aggregate`] builds a `Stats`, so `risk_level` always matches the
/// counters it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    total_breaches: usize,
    password_exposed: usize,
    verified_sources: usize,
    unverified_sources: usize,
    most_recent_breach: Option<String>,
    compromised_data_types: BTreeMap<String, usize>,
    #[serde(skip)]
    data_type_order: Vec<String>,
    timeline_data: BTreeMap<String, usize>,
    risk_level: RiskLevel,
}

impl Stats {
    /// Number of records in the lookup result.
    pub fn total_breaches(&self) -> usize {
        self.total_breaches
    }

    /// Records carrying a non-empty password.
    pub fn password_exposed(&self) -> usize {
        self.password_exposed
    }

    /// Records whose source is not flagged unverified.
    pub fn verified_sources(&self) -> usize {
        self.verified_sources
    }

    /// Records whose source is flagged unverified.
    pub fn unverified_sources(&self) -> usize {
        self.unverified_sources
    }

    /// Latest `YYYY-MM` breach date across all records.
    pub fn most_recent_breach(&self) -> Option<&str> {
        self.most_recent_breach.as_deref()
    }

    /// Field name -> number of records exposing it.
    pub fn compromised_data_types(&self) -> &BTreeMap<String, usize> {
        &self.compromised_data_types
    }

    /// Data types with their counts, in the order each was first seen.
    pub fn data_types_by_first_seen(&self) -> Vec<(&str, usize)> {
        self.data_type_order
            .iter()
            .map(|name| {
                let count = self.compromised_data_types.get(name).copied().unwrap_or(0);
                (name.as_str(), count)
            })
            .collect()
    }

    /// Year -> number of dated records in that year.
    pub fn timeline_data(&self) -> &BTreeMap<String, usize> {
        &self.timeline_data
    }

    pub fn distinct_data_types(&self) -> usize {
        self.compromised_data_types.len()
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

/// Year portion of a breach date; the whole string when there is no `-`.
pub fn breach_year(breach_date: &str) -> &str {
    breach_date.split('-').next().unwrap_or(breach_date)
}

/// Aggregate a sequence of breach records.
pub fn aggregate(records: &[BreachRecord]) -> Stats {
    let mut stats = Stats {
        total_breaches: records.len(),
        password_exposed: 0,
        verified_sources: 0,
        unverified_sources: 0,
        most_recent_breach: None,
        compromised_data_types: BTreeMap::new(),
        data_type_order: Vec::new(),
        timeline_data: BTreeMap::new(),
        risk_level: RiskLevel::Low,
    };

    for record in records {
        if record.has_password() {
            stats.password_exposed += 1;
        }

        if record.source.unverified {
            stats.unverified_sources += 1;
        } else {
            stats.verified_sources += 1;
        }

        if let Some(date) = record.source.breach_date() {
            let newer = match stats.most_recent_breach.as_deref() {
                Some(current) => date > current,
                None => true,
            };
            if newer {
                stats.most_recent_breach = Some(date.to_string());
            }

            *stats
                .timeline_data
                .entry(breach_year(date).to_string())
                .or_insert(0) += 1;
        }

        for field in &record.fields {
            if !stats.compromised_data_types.contains_key(field) {
                stats.data_type_order.push(field.clone());
            }
            *stats
                .compromised_data_types
                .entry(field.clone())
                .or_insert(0) += 1;
        }
    }

    stats.risk_level = classify(&stats);

    log::debug!(
        "STATS_AGGREGATED total={} passwords={} verified={} unverified={} data_types={} years={} risk={}",
        stats.total_breaches,
        stats.password_exposed,
        stats.verified_sources,
        stats.unverified_sources,
        stats.compromised_data_types.len(),
        stats.timeline_data.len(),
        stats.risk_level
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breach::BreachSource;

    fn verified(name: &str) -> BreachRecord {
        BreachRecord::new(BreachSource::new(name))
    }

    fn unverified(name: &str) -> BreachRecord {
        BreachRecord::new(BreachSource::new(name).unverified())
    }

    #[test]
    fn test_empty_input() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_breaches(), 0);
        assert_eq!(stats.password_exposed(), 0);
        assert_eq!(stats.verified_sources(), 0);
        assert_eq!(stats.unverified_sources(), 0);
        assert_eq!(stats.most_recent_breach(), None);
        assert!(stats.compromised_data_types().is_empty());
        assert!(stats.timeline_data().is_empty());
        assert_eq!(stats.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_mixed_verification_scenario() {
        let records = vec![
            verified("A").with_password("x").with_fields(&["email", "password"]),
            unverified("B").with_fields(&["email"]),
        ];

        let stats = aggregate(&records);
        assert_eq!(stats.total_breaches(), 2);
        assert_eq!(stats.password_exposed(), 1);
        assert_eq!(stats.verified_sources(), 1);
        assert_eq!(stats.unverified_sources(), 1);
        assert_eq!(stats.compromised_data_types().get("email"), Some(&2));
        assert_eq!(stats.compromised_data_types().get("password"), Some(&1));
        assert_eq!(stats.distinct_data_types(), 2);
        // (30 + 10 + 10) / 2 = 25, not above 25
        assert_eq!(stats.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_all_passwords_verified_is_medium() {
        let records = vec![
            verified("A").with_password("a").with_fields(&["email", "password"]),
            verified("B").with_password("b").with_fields(&["phone"]),
            verified("C").with_password("c").with_fields(&["ip_address", "email"]),
        ];

        // (90 + 30 + 20) / 3 = 46.67
        assert_eq!(aggregate(&records).risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_five_password_records_is_medium() {
        let records = vec![
            verified("A").with_password("p").with_fields(&["email", "password"]),
            verified("B").with_password("p").with_fields(&["phone"]),
            verified("C").with_password("p").with_fields(&["ip_address"]),
            verified("D").with_password("p").with_fields(&["name"]),
            verified("E").with_password("p").with_fields(&["dob"]),
        ];

        let stats = aggregate(&records);
        assert_eq!(stats.distinct_data_types(), 6);
        // (150 + 50 + 30) / 5 = 46
        assert_eq!(stats.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_single_exposed_password_is_high() {
        let records =
            vec![verified("A").with_password("p").with_fields(&["email", "password", "phone"])];
        // (30 + 10 + 15) / 1 = 55
        assert_eq!(aggregate(&records).risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_timeline_and_most_recent() {
        let records = vec![
            BreachRecord::new(BreachSource::new("A").with_date("2019-03")),
            BreachRecord::new(BreachSource::new("B").with_date("2021-11")),
            BreachRecord::new(BreachSource::new("C").with_date("2021-02")),
            BreachRecord::new(BreachSource::new("D")),
            BreachRecord::new(BreachSource::new("E").with_date("")),
        ];

        let stats = aggregate(&records);
        assert_eq!(stats.most_recent_breach(), Some("2021-11"));
        assert_eq!(stats.timeline_data().get("2019"), Some(&1));
        assert_eq!(stats.timeline_data().get("2021"), Some(&2));
        assert_eq!(stats.timeline_data().values().sum::<usize>(), 3);
        assert_eq!(stats.total_breaches(), 5);
    }

    #[test]
    fn test_date_without_separator_is_year() {
        let records = vec![BreachRecord::new(BreachSource::new("A").with_date("2016"))];
        let stats = aggregate(&records);
        assert_eq!(stats.timeline_data().get("2016"), Some(&1));
        assert_eq!(breach_year("2016"), "2016");
        assert_eq!(breach_year("2016-07"), "2016");
    }

    #[test]
    fn test_records_without_fields_contribute_nothing() {
        let records = vec![verified("A"), verified("B").with_fields(&["email"])];
        let stats = aggregate(&records);
        assert_eq!(stats.compromised_data_types().len(), 1);
        assert!(stats.compromised_data_types().values().all(|&c| c >= 1));
    }

    #[test]
    fn test_data_types_keep_first_seen_order() {
        let records = vec![
            verified("A").with_fields(&["username", "phone"]),
            verified("B").with_fields(&["email", "phone", "username"]),
        ];
        let stats = aggregate(&records);
        assert_eq!(
            stats.data_types_by_first_seen(),
            vec![("username", 2), ("phone", 2), ("email", 1)]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            verified("A").with_password("x").with_fields(&["email"]),
            unverified("B").with_fields(&["phone", "email"]),
        ];
        assert_eq!(aggregate(&records), aggregate(&records));
    }
}
