//! Text bar charts.

use std::collections::BTreeMap;

/// Length of a full-scale bar.
pub const BAR_WIDTH: usize = 20;
/// Number of data types shown in the data-type chart.
pub const TOP_DATA_TYPES: usize = 5;
/// Display width of a data-type label.
pub const LABEL_WIDTH: usize = 15;

const BAR_CHAR: &str = "█";

/// Bar of `floor(count / max * BAR_WIDTH)` blocks.
fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    BAR_CHAR.repeat(count * BAR_WIDTH / max)
}

fn label(name: &str) -> String {
    let truncated: String = name.chars().take(LABEL_WIDTH).collect();
    format!("{:<width$}", truncated, width = LABEL_WIDTH)
}

/// One line per year, oldest first.
pub fn render_timeline(timeline: &BTreeMap<String, usize>) -> String {
    let max = timeline.values().copied().max().unwrap_or(0);

    timeline
        .iter()
        .map(|(year, &count)| format!("{} | {} ({})", year, bar(count, max), count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The most frequent data types, highest count first.
///
/// `data_types` is expected in first-seen order; ties keep that order.
pub fn render_data_types(data_types: &[(&str, usize)]) -> String {
    let mut sorted: Vec<(&str, usize)> = data_types.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(TOP_DATA_TYPES);

    let max = sorted.first().map(|(_, count)| *count).unwrap_or(0);

    sorted
        .iter()
        .map(|(name, count)| format!("{} | {} ({})", label(name), bar(*count, max), count))
        .collect::<Vec<_>>()
        .join("\n")
}
