//! Lookup analysis pipeline.
//!
//! Coordinates one lookup result end to end:
//! 1. Response decoding
//! 2. Statistics aggregation and risk classification (all records)
//! 3. Result filtering for the list view
//! 4. Report rendering

use serde::Serialize;

use crate::error::LookupError;
use crate::model::breach::BreachRecord;
use crate::model::response::parse_response;
use crate::narrative::listing::{quota_subtitle, section_title, ListEntry};
use crate::narrative::report::render_stats_report;
use crate::routing::filter::{filter_records, ResultFilter};
use crate::stats::aggregate::{aggregate, Stats};
use crate::stats::risk::RiskIndicator;
use crate::{log_debug, log_info, log_warn};

use super::context::LookupContext;

/// Result of analysing one lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub analysis_id: String,
    pub quota: u64,
    pub found: u64,
    pub filter: ResultFilter,
    pub stats: Stats,
    pub risk_indicator: RiskIndicator,
    pub entries: Vec<ListEntry>,
    pub section_title: String,
    pub quota_subtitle: String,
    pub report: String,
}

/// Analyse a lookup service body.
pub fn analyze(ctx: &LookupContext, body: &str) -> Result<Analysis, LookupError> {
    let log_ctx = ctx.log_context();

    let response = match parse_response(body) {
        Ok(response) => response,
        Err(e) => {
            log_warn!(log_ctx, "RESPONSE_DECODE_FAILED", error = e.to_string());
            return Err(e);
        }
    };

    let quota = response.quota;
    let found = response.found;
    let records = match response.into_records() {
        Ok(records) => records,
        Err(e) => {
            log_warn!(log_ctx, "LOOKUP_UNSUCCESSFUL", subject = ctx.subject, reason = e.to_string());
            return Err(e);
        }
    };

    Ok(analyze_records(ctx, &records, quota, found))
}

/// Analyse already-decoded records.
pub fn analyze_records(
    ctx: &LookupContext,
    records: &[BreachRecord],
    quota: u64,
    found: u64,
) -> Analysis {
    let log_ctx = ctx.log_context();

    log_info!(
        log_ctx,
        "ANALYSIS_START",
        subject = ctx.subject,
        records = records.len(),
        filter = ctx.filter.as_str()
    );

    if found != records.len() as u64 {
        log_debug!(log_ctx, "FOUND_COUNT_MISMATCH", found = found, records = records.len());
    }

    for record in records.iter().filter(|r| r.has_password()) {
        log_debug!(log_ctx.with_source(&record.source.name), "PASSWORD_EXPOSED");
    }

    let stats = aggregate(records);
    let risk_indicator = RiskIndicator::from_stats(&stats);

    let entries: Vec<ListEntry> = filter_records(records, ctx.filter, &log_ctx)
        .into_iter()
        .map(ListEntry::from_record)
        .collect();

    let report = render_stats_report(&stats);

    log_info!(
        log_ctx,
        "ANALYSIS_COMPLETE",
        total = stats.total_breaches(),
        passwords = stats.password_exposed(),
        shown = entries.len(),
        risk = stats.risk_level().as_str()
    );

    Analysis {
        analysis_id: ctx.analysis_id.clone(),
        quota,
        found,
        filter: ctx.filter,
        section_title: section_title(entries.len()),
        quota_subtitle: quota_subtitle(quota),
        stats,
        risk_indicator,
        entries,
        report,
    }
}

/// Turn an HTTP failure reported by the host into a lookup error.
pub fn api_failure(ctx: &LookupContext, status: u16) -> LookupError {
    let err = LookupError::from_status(status);
    log_warn!(
        ctx.log_context(),
        "LOOKUP_API_ERROR",
        status = status,
        title = err.title()
    );
    err
}
