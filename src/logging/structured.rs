//! Structured logging utilities.
//!
//! An analysis logs under one id from response decoding to report rendering.
//! Lines about a single breach record also name the source that reported it,
//! so a host can grep one breach out of a lookup.

use std::fmt;

/// Prefix attached to every log line of one lookup analysis.
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Id minted per lookup (`analysis-xxxxxxxx`).
    pub analysis_id: String,
    /// Breach source name, set while one record is handled.
    pub source: Option<String>,
}

impl LogContext {
    pub fn new(analysis_id: &str) -> Self {
        Self {
            analysis_id: analysis_id.to_string(),
            source: None,
        }
    }

    /// Same analysis, narrowed to one breach source.
    pub fn with_source(&self, source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            ..self.clone()
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[analysis={}]", self.analysis_id)?;
        if let Some(source) = &self.source {
            write!(f, " [source={}]", source)?;
        }
        Ok(())
    }
}

/// Log an info event with context and `key = value` pairs.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            concat!("{} {}" $(, " ", stringify!($key), "={:?}")*),
            $ctx,
            $event
            $(, $value)*
        )
    };
}

/// Log a warning event with context and `key = value` pairs.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            concat!("{} {}" $(, " ", stringify!($key), "={:?}")*),
            $ctx,
            $event
            $(, $value)*
        )
    };
}

/// Log an error event with context and `key = value` pairs.
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::error!(
            concat!("{} {}" $(, " ", stringify!($key), "={:?}")*),
            $ctx,
            $event
            $(, $value)*
        )
    };
}

/// Log a debug event with context and `key = value` pairs.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            concat!("{} {}" $(, " ", stringify!($key), "={:?}")*),
            $ctx,
            $event
            $(, $value)*
        )
    };
}
