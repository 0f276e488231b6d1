//! Breach date formatting.

use chrono::NaiveDate;

pub const UNKNOWN_DATE: &str = "Unknown";

/// Format a `YYYY-MM` breach date as e.g. "January 2024".
///
/// A year with no usable month renders as the year alone. Absent or
/// unparsable dates render as "Unknown".
pub fn format_breach_date(breach_date: Option<&str>) -> String {
    let date = match breach_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d,
        None => return UNKNOWN_DATE.to_string(),
    };

    let mut parts = date.split('-');
    let year = parts.next().and_then(|y| y.parse::<i32>().ok());
    let month = parts.next().and_then(|m| m.parse::<u32>().ok());

    match (year, month) {
        (Some(year), Some(month)) => NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| year.to_string()),
        (Some(year), None) => year.to_string(),
        _ => UNKNOWN_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_breach_date(Some("2024-01")), "January 2024");
        assert_eq!(format_breach_date(Some("2016-09")), "September 2016");
    }

    #[test]
    fn test_format_missing() {
        assert_eq!(format_breach_date(None), "Unknown");
        assert_eq!(format_breach_date(Some("")), "Unknown");
        assert_eq!(format_breach_date(Some("soon")), "Unknown");
    }

    #[test]
    fn test_format_year_only() {
        assert_eq!(format_breach_date(Some("2019")), "2019");
        assert_eq!(format_breach_date(Some("2019-13")), "2019");
        assert_eq!(format_breach_date(Some("2019-xx")), "2019");
    }
}
