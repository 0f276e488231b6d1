//! Python bindings.
//!
//! Thin wrappers over the pipeline. Structured results cross the boundary as
//! dicts; failures raise `ValueError` with the operator-facing title and
//! message.

use chrono::{Local, NaiveDate};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::error::LookupError;
use crate::export::rows::{export_filename, export_rows, ExportOptions, EXPORT_COLUMNS};
use crate::init_logger;
use crate::model::breach::BreachRecord;
use crate::model::response::parse_response;
use crate::narrative::date;
use crate::narrative::detail;
use crate::pipeline::analysis::{analyze, api_failure};
use crate::pipeline::context::LookupContext;
use crate::validation::query::validate_query;

fn to_py_err(err: LookupError) -> PyErr {
    PyValueError::new_err(format!("{}: {}", err.title(), err.operator_message()))
}

/// Analyse a lookup service response body.
///
/// # Arguments
/// * `body` - JSON body returned by the lookup service
/// * `query` - The email or username that was looked up
/// * `filter` - "all", "password", "nopassword", "verified" or "unverified"
///
/// # Returns
/// Dict with counters, risk level, list entries and the markdown report
#[pyfunction]
#[pyo3(signature = (body, query, filter="all".to_string()))]
fn analyze_breaches(py: Python<'_>, body: String, query: String, filter: String) -> PyResult<Py<PyAny>> {
    init_logger();

    let ctx = LookupContext::with_filter_name(&query, &filter);
    let analysis = analyze(&ctx, &body).map_err(to_py_err)?;
    let stats = &analysis.stats;

    let py_result = PyDict::new(py);
    py_result.set_item("analysis_id", &analysis.analysis_id)?;
    py_result.set_item("quota", analysis.quota)?;
    py_result.set_item("found", analysis.found)?;
    py_result.set_item("total_breaches", stats.total_breaches())?;
    py_result.set_item("password_exposed", stats.password_exposed())?;
    py_result.set_item("verified_sources", stats.verified_sources())?;
    py_result.set_item("unverified_sources", stats.unverified_sources())?;
    py_result.set_item("most_recent_breach", stats.most_recent_breach())?;
    py_result.set_item(
        "most_recent_breach_display",
        date::format_breach_date(stats.most_recent_breach()),
    )?;
    py_result.set_item("risk_level", stats.risk_level().as_str())?;
    py_result.set_item("risk_indicator", analysis.risk_indicator.as_str())?;
    py_result.set_item("section_title", &analysis.section_title)?;
    py_result.set_item("quota_subtitle", &analysis.quota_subtitle)?;
    py_result.set_item("report", &analysis.report)?;

    let data_types = PyDict::new(py);
    for (name, count) in stats.data_types_by_first_seen() {
        data_types.set_item(name, count)?;
    }
    py_result.set_item("compromised_data_types", data_types)?;

    let timeline = PyDict::new(py);
    for (year, count) in stats.timeline_data() {
        timeline.set_item(year, *count)?;
    }
    py_result.set_item("timeline_data", timeline)?;

    let entries = PyList::empty(py);
    for entry in &analysis.entries {
        let entry_dict = PyDict::new(py);
        entry_dict.set_item("title", &entry.title)?;
        entry_dict.set_item("subtitle", &entry.subtitle)?;
        entry_dict.set_item("password_exposed", entry.password_exposed)?;
        entry_dict.set_item("password_status", &entry.password_status)?;
        entry_dict.set_item("verified", entry.verified)?;
        entry_dict.set_item("verification_status", &entry.verification_status)?;
        entries.append(entry_dict)?;
    }
    py_result.set_item("entries", entries)?;

    Ok(py_result.into())
}

/// Validate a lookup query. Raises `ValueError` when it is rejected.
#[pyfunction]
fn validate_lookup_query(query: &str) -> PyResult<()> {
    validate_query(query).map_err(|e| to_py_err(e.into()))
}

/// Error raised for an HTTP failure status from the lookup service.
#[pyfunction]
fn lookup_error_for_status(query: &str, status: u16) -> PyResult<(String, String)> {
    init_logger();
    let ctx = LookupContext::new(query, Default::default());
    let err = api_failure(&ctx, status);
    Ok((err.title().to_string(), err.operator_message()))
}

/// Markdown detail document for one breach record (JSON).
#[pyfunction]
fn render_breach_detail(record: &str) -> PyResult<String> {
    let record: BreachRecord =
        serde_json::from_str(record).map_err(|e| to_py_err(LookupError::from(e)))?;
    Ok(detail::render_breach_detail(&record))
}

/// Export rows for a lookup response body.
///
/// # Returns
/// Dict with `filename`, `columns` and `rows` (lists of cell strings)
#[pyfunction]
#[pyo3(signature = (body, query, redact_passwords=false, date=None))]
fn export_breaches(
    py: Python<'_>,
    body: String,
    query: String,
    redact_passwords: bool,
    date: Option<String>,
) -> PyResult<Py<PyAny>> {
    init_logger();

    let records = parse_response(&body)
        .and_then(|r| r.into_records())
        .map_err(to_py_err)?;
    let rows = export_rows(&records, &ExportOptions { redact_passwords }).map_err(to_py_err)?;

    let export_date = date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());

    let py_result = PyDict::new(py);
    py_result.set_item("filename", export_filename(&query, export_date))?;
    py_result.set_item("columns", EXPORT_COLUMNS.to_vec())?;

    let py_rows = PyList::empty(py);
    for row in &rows {
        py_rows.append(row.cells().to_vec())?;
    }
    py_result.set_item("rows", py_rows)?;

    log::info!("EXPORT_PREPARED rows={} redacted={}", rows.len(), redact_passwords);

    Ok(py_result.into())
}

/// Format a `YYYY-MM` breach date for display.
#[pyfunction]
fn format_breach_date(breach_date: Option<&str>) -> PyResult<String> {
    Ok(date::format_breach_date(breach_date))
}

/// Python module definition
#[pymodule]
fn breachlens_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_breaches, m)?)?;
    m.add_function(wrap_pyfunction!(validate_lookup_query, m)?)?;
    m.add_function(wrap_pyfunction!(lookup_error_for_status, m)?)?;
    m.add_function(wrap_pyfunction!(render_breach_detail, m)?)?;
    m.add_function(wrap_pyfunction!(export_breaches, m)?)?;
    m.add_function(wrap_pyfunction!(format_breach_date, m)?)?;
    Ok(())
}
