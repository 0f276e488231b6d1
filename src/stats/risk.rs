//! Risk classification.
//!
//! A weighted heuristic, not a probabilistic model: password exposure weighs
//! most, then source verification, then the breadth of exposed data types.
//! The weighted sum is averaged over the number of records.

use std::fmt::Display;

use serde::Serialize;

use crate::stats::aggregate::Stats;

pub const PASSWORD_WEIGHT: f64 = 30.0;
pub const VERIFIED_SOURCE_WEIGHT: f64 = 10.0;
pub const DATA_TYPE_WEIGHT: f64 = 5.0;

/// Scores strictly above this are `High`.
pub const HIGH_THRESHOLD: f64 = 50.0;
/// Scores strictly above this (and not `High`) are `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weighted risk score, or `None` when there are no sources to average over.
pub fn risk_score(
    password_exposed: usize,
    verified_sources: usize,
    unverified_sources: usize,
    distinct_data_types: usize,
) -> Option<f64> {
    let sources = verified_sources + unverified_sources;
    if sources == 0 {
        return None;
    }

    let weighted = password_exposed as f64 * PASSWORD_WEIGHT
        + verified_sources as f64 * VERIFIED_SOURCE_WEIGHT
        + distinct_data_types as f64 * DATA_TYPE_WEIGHT;

    Some(weighted / sources as f64)
}

/// Classify an aggregate. Empty aggregates are `Low`.
pub fn classify(stats: &Stats) -> RiskLevel {
    risk_score(
        stats.password_exposed(),
        stats.verified_sources(),
        stats.unverified_sources(),
        stats.distinct_data_types(),
    )
    .map(RiskLevel::from_score)
    .unwrap_or(RiskLevel::Low)
}

/// Headline indicator shown next to the risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskIndicator {
    /// At least one password was exposed.
    Alert,
    Clear,
}

impl RiskIndicator {
    pub fn from_stats(stats: &Stats) -> Self {
        if stats.password_exposed() > 0 {
            RiskIndicator::Alert
        } else {
            RiskIndicator::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskIndicator::Alert => "alert",
            RiskIndicator::Clear => "clear",
        }
    }
}
