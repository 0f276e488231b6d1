//! Per-record detail document.

use crate::model::breach::BreachRecord;
use crate::narrative::date::format_breach_date;

const VERIFIED_STATUS: &str =
    "✅ **Verified Source** - This data comes from a confirmed data breach.";
const UNVERIFIED_STATUS: &str = "⚠️ **Unverified Source** - This data comes from an unverified source and should be treated with caution.";

const PASSWORD_ALERT: &str = "### 🚨 Security Alert\n\
    Your password has been exposed in this data breach. It is strongly recommended to:\n\
    - Change this password immediately.\n\
    - Change it on other sites if you've used it elsewhere.\n\
    - Enable 2FA where possible.";
const PASSWORD_SAFE: &str = "### ✅ Password Status\n\
    No password was exposed in this breach. However, other sensitive information may have been compromised.";

const COMPROMISED_HEADING: &str = "### 📋 Compromised Information";

const COMPILATION_SOURCE: &str =
    "This breach is part of a larger compilation of multiple data breaches.";
const SINGLE_SOURCE: &str = "This breach comes from a single source.";

const SECURITY_REMINDER: &str = "> 🔒 **Security Reminder**: Always use unique, strong passwords and enable two-factor authentication when possible.";

fn compromised_section(fields: &[String]) -> String {
    if fields.is_empty() {
        return format!(
            "{}\nNo detailed information available about the specific data exposed in this breach.",
            COMPROMISED_HEADING
        );
    }

    let list = fields
        .iter()
        .map(|f| format!("- `{}`", f))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\nThe following data was exposed in this breach:\n{}",
        COMPROMISED_HEADING, list
    )
}

/// Markdown detail view for one breach record.
pub fn render_breach_detail(record: &BreachRecord) -> String {
    let source = &record.source;

    let source_status = if source.unverified {
        UNVERIFIED_STATUS
    } else {
        VERIFIED_STATUS
    };
    let security_status = if record.has_password() {
        PASSWORD_ALERT
    } else {
        PASSWORD_SAFE
    };
    let source_type = if source.compilation {
        COMPILATION_SOURCE
    } else {
        SINGLE_SOURCE
    };

    format!(
        "# {name}\n\n{status}\n\n---\n\n{security}\n\n---\n\n{compromised}\n\n---\n\n\
         ### ℹ️ Additional Information\n\
         - **Breach Date**: {date}\n\
         - **Source Type**: {source_type}\n\n\
         {reminder}\n",
        name = source.name,
        status = source_status,
        security = security_status,
        compromised = compromised_section(&record.fields),
        date = format_breach_date(source.breach_date()),
        source_type = source_type,
        reminder = SECURITY_REMINDER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breach::BreachSource;

    #[test]
    fn test_exposed_verified_record() {
        let record = BreachRecord::new(BreachSource::new("Example.com").with_date("2020-06"))
            .with_password("hunter2")
            .with_fields(&["email", "password"]);

        let doc = render_breach_detail(&record);
        assert!(doc.starts_with("# Example.com\n"));
        assert!(doc.contains("**Verified Source**"));
        assert!(doc.contains("### 🚨 Security Alert"));
        assert!(doc.contains("- `email`\n- `password`"));
        assert!(doc.contains("- **Breach Date**: June 2020"));
        assert!(doc.contains(SINGLE_SOURCE));
        assert!(!doc.contains("hunter2"));
    }

    #[test]
    fn test_unverified_compilation_without_fields() {
        let record = BreachRecord::new(BreachSource::new("Combo List").unverified().compilation());

        let doc = render_breach_detail(&record);
        assert!(doc.contains("**Unverified Source**"));
        assert!(doc.contains("### ✅ Password Status"));
        assert!(doc.contains("No detailed information available"));
        assert!(doc.contains("- **Breach Date**: Unknown"));
        assert!(doc.contains(COMPILATION_SOURCE));
        assert!(doc.trim_end().ends_with("when possible."));
    }
}
