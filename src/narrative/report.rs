//! Full statistics report.

use crate::narrative::assessment::{render_recommendations, render_risk_assessment};
use crate::narrative::charts::{render_data_types, render_timeline};
use crate::stats::aggregate::Stats;

/// Markdown "Security Analysis" document for an aggregate.
pub fn render_stats_report(stats: &Stats) -> String {
    let timeline_chart = render_timeline(stats.timeline_data());
    let data_types_chart = render_data_types(&stats.data_types_by_first_seen());
    let risk_assessment = render_risk_assessment(stats);
    let recommendations = render_recommendations(stats);

    format!(
        "# Security Analysis\n\
         \n\
         ## Timeline of Breaches\n\
         ```\n\
         {}\n\
         ```\n\
         \n\
         ## Compromised Data Types\n\
         ```\n\
         {}\n\
         ```\n\
         \n\
         ## Risk Assessment\n\
         {}\n\
         \n\
         ## Recommendations\n\
         {}\n",
        timeline_chart, data_types_chart, risk_assessment, recommendations
    )
}
