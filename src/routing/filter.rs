//! Result filtering.
//!
//! Selects which records a result list shows and in what order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logging::structured::LogContext;
use crate::model::breach::BreachRecord;

/// Filter applied to the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Password,
    NoPassword,
    Verified,
    Unverified,
}

impl ResultFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultFilter::All => "all",
            ResultFilter::Password => "password",
            ResultFilter::NoPassword => "nopassword",
            ResultFilter::Verified => "verified",
            ResultFilter::Unverified => "unverified",
        }
    }

    pub fn matches(&self, record: &BreachRecord) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Password => record.has_password(),
            ResultFilter::NoPassword => !record.has_password(),
            ResultFilter::Verified => record.source.is_verified(),
            ResultFilter::Unverified => !record.source.is_verified(),
        }
    }

    /// Parse a filter name, falling back to `All` for unknown values.
    pub fn parse_lenient(value: &str, ctx: &LogContext) -> Self {
        match value.parse() {
            Ok(filter) => filter,
            Err(()) => {
                log::warn!("{} FILTER_UNKNOWN value={:?} fallback=all", ctx, value);
                ResultFilter::All
            }
        }
    }
}

impl FromStr for ResultFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(ResultFilter::All),
            "password" => Ok(ResultFilter::Password),
            "nopassword" => Ok(ResultFilter::NoPassword),
            "verified" => Ok(ResultFilter::Verified),
            "unverified" => Ok(ResultFilter::Unverified),
            _ => Err(()),
        }
    }
}

/// Records matching `filter`, password-bearing records first.
///
/// The sort is stable, so records keep their service order within each group.
pub fn filter_records<'a>(
    records: &'a [BreachRecord],
    filter: ResultFilter,
    ctx: &LogContext,
) -> Vec<&'a BreachRecord> {
    let mut selected: Vec<&BreachRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    selected.sort_by_key(|r| !r.has_password());

    log::debug!(
        "{} FILTER_APPLIED filter={} kept={} dropped={}",
        ctx,
        filter.as_str(),
        selected.len(),
        records.len() - selected.len()
    );

    selected
}
