//! Lookup context management.
//!
//! Identifies one analysis run for logging.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;
use crate::routing::filter::ResultFilter;
use crate::security::redaction::mask_subject;

/// Context for one lookup analysis.
#[derive(Debug, Clone)]
pub struct LookupContext {
    pub analysis_id: String,
    pub requested_at: DateTime<Utc>,
    /// Masked lookup subject, safe to log.
    pub subject: String,
    pub filter: ResultFilter,
}

impl LookupContext {
    pub fn new(query: &str, filter: ResultFilter) -> Self {
        let analysis_id = format!("analysis-{}", &Uuid::new_v4().to_string()[..8]);

        Self {
            analysis_id,
            requested_at: Utc::now(),
            subject: mask_subject(query.trim()),
            filter,
        }
    }

    /// Build a context from a host-supplied filter name.
    pub fn with_filter_name(query: &str, filter: &str) -> Self {
        let mut ctx = Self::new(query, ResultFilter::All);
        ctx.filter = ResultFilter::parse_lenient(filter, &ctx.log_context());
        ctx
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.analysis_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_ids_and_masking() {
        let ctx = LookupContext::new("john@example.com", ResultFilter::Password);
        assert!(ctx.analysis_id.starts_with("analysis-"));
        assert_eq!(ctx.analysis_id.len(), "analysis-".len() + 8);
        assert_eq!(ctx.subject, "j***@example.com");
        assert_eq!(ctx.filter, ResultFilter::Password);

        let other = LookupContext::new("john@example.com", ResultFilter::All);
        assert_ne!(ctx.analysis_id, other.analysis_id);
    }

    #[test]
    fn test_filter_name() {
        let ctx = LookupContext::with_filter_name("jdoe", "unverified");
        assert_eq!(ctx.filter, ResultFilter::Unverified);

        let ctx = LookupContext::with_filter_name("jdoe", "everything");
        assert_eq!(ctx.filter, ResultFilter::All);
    }
}
