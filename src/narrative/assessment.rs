//! Risk assessment and recommendation bullets.
//!
//! Bullet order is fixed; callers render the strings as markdown.

use crate::stats::aggregate::Stats;

pub const CRITICAL_PASSWORDS: &str = "- 🚨 **Critical**: Passwords have been exposed";
pub const WARNING_UNVERIFIED: &str = "- ⚠️ **Warning**: Many unverified breach sources";
pub const WARNING_DATA_BREADTH: &str = "- ⚠️ **Warning**: Multiple types of data compromised";
pub const LOW_RISK_PROFILE: &str = "- ✅ **Low Risk Profile**";

pub const REC_CHANGE_PASSWORDS: &str = "- Change all exposed passwords immediately";
pub const REC_ENABLE_2FA: &str = "- Enable 2FA where available";
pub const REC_MONITOR_EMAIL: &str = "- Monitor email for suspicious activity";
pub const REC_PHISHING: &str = "- Be aware of potential phishing calls/SMS";
pub const REC_KEEP_MONITORING: &str = "- Continue monitoring for new breaches";

/// More distinct data types than this triggers the breadth warning.
pub const DATA_BREADTH_LIMIT: usize = 3;

pub fn render_risk_assessment(stats: &Stats) -> String {
    let mut points = Vec::new();

    if stats.password_exposed() > 0 {
        points.push(CRITICAL_PASSWORDS);
    }

    if stats.unverified_sources() > stats.verified_sources() {
        points.push(WARNING_UNVERIFIED);
    }

    if stats.distinct_data_types() > DATA_BREADTH_LIMIT {
        points.push(WARNING_DATA_BREADTH);
    }

    if points.is_empty() {
        LOW_RISK_PROFILE.to_string()
    } else {
        points.join("\n")
    }
}

pub fn render_recommendations(stats: &Stats) -> String {
    let mut recs = Vec::new();

    if stats.password_exposed() > 0 {
        recs.push(REC_CHANGE_PASSWORDS);
        recs.push(REC_ENABLE_2FA);
    }

    if stats.compromised_data_types().contains_key("email") {
        recs.push(REC_MONITOR_EMAIL);
    }

    if stats.compromised_data_types().contains_key("phone") {
        recs.push(REC_PHISHING);
    }

    if recs.is_empty() {
        REC_KEEP_MONITORING.to_string()
    } else {
        recs.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breach::{BreachRecord, BreachSource};
    use crate::stats::aggregate::aggregate;

    #[test]
    fn test_all_assessment_points_in_order() {
        let stats = aggregate(&[
            BreachRecord::new(BreachSource::new("A").unverified())
                .with_password("p")
                .with_fields(&["email", "phone", "ip_address", "name"]),
        ]);

        let assessment = render_risk_assessment(&stats);
        let lines: Vec<&str> = assessment.lines().collect();
        assert_eq!(
            lines,
            vec![CRITICAL_PASSWORDS, WARNING_UNVERIFIED, WARNING_DATA_BREADTH]
        );
    }

    #[test]
    fn test_low_risk_profile() {
        let stats = aggregate(&[BreachRecord::new(BreachSource::new("A")).with_fields(&["email"])]);
        assert_eq!(render_risk_assessment(&stats), LOW_RISK_PROFILE);
        assert_eq!(render_risk_assessment(&aggregate(&[])), LOW_RISK_PROFILE);
    }

    #[test]
    fn test_equal_sources_do_not_warn() {
        let stats = aggregate(&[
            BreachRecord::new(BreachSource::new("A")),
            BreachRecord::new(BreachSource::new("B").unverified()),
        ]);
        assert!(!render_risk_assessment(&stats).contains("unverified"));
    }

    #[test]
    fn test_three_data_types_is_not_broad() {
        let three = aggregate(&[
            BreachRecord::new(BreachSource::new("A")).with_fields(&["email", "phone", "name"]),
        ]);
        assert_eq!(three.distinct_data_types(), 3);
        assert!(!render_risk_assessment(&three).contains(WARNING_DATA_BREADTH));

        let four = aggregate(&[BreachRecord::new(BreachSource::new("A"))
            .with_fields(&["email", "phone", "name", "dob"])]);
        assert!(render_risk_assessment(&four).contains(WARNING_DATA_BREADTH));
    }

    #[test]
    fn test_all_recommendations_in_order() {
        let stats = aggregate(&[BreachRecord::new(BreachSource::new("A"))
            .with_password("p")
            .with_fields(&["phone", "email"])]);

        let recs = render_recommendations(&stats);
        let lines: Vec<&str> = recs.lines().collect();
        assert_eq!(
            lines,
            vec![
                REC_CHANGE_PASSWORDS,
                REC_ENABLE_2FA,
                REC_MONITOR_EMAIL,
                REC_PHISHING
            ]
        );
    }

    #[test]
    fn test_phone_only_recommendation() {
        let stats = aggregate(&[BreachRecord::new(BreachSource::new("A")).with_fields(&["phone"])]);
        assert_eq!(render_recommendations(&stats), REC_PHISHING);
    }

    #[test]
    fn test_default_recommendation() {
        assert_eq!(render_recommendations(&aggregate(&[])), REC_KEEP_MONITORING);
    }
}
