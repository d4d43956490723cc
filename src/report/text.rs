//! Plain-text view
//!
//! Fixed-order block suitable for terminals, email, and chat paste. Output is
//! byte-stable for a given record and timestamp.

use super::metrics::RenderedMetrics;
use super::ReportMeta;
use crate::record::HealthRecord;

/// Render the plain-text view.
#[must_use]
pub fn render(record: &HealthRecord, metrics: &RenderedMetrics, meta: &ReportMeta) -> String {
    let mut lines = vec![
        format!(
            "PROJECT HEALTH: {} {}",
            metrics.status.glyph(),
            metrics.status.label()
        ),
        String::new(),
        metrics.headline.clone(),
        String::new(),
        format!(
            "Target: {} | Original: {} | Variance: {}d",
            record.target_date, record.original_date, record.variance_days
        ),
        format!(
            "Progress: {}% complete ({} tasks)",
            record.percent_complete, record.task_count
        ),
        String::new(),
        "Health Breakdown:".to_string(),
        format!("  🔴 Critical: {}", record.breakdown.critical),
        format!("  🟡 At Risk:  {}", record.breakdown.at_risk),
        format!("  🟢 On Track: {}", record.breakdown.on_track),
        String::new(),
        "Vendor Progress:".to_string(),
    ];

    for bar in &metrics.vendor_bars {
        lines.push(format!("  {:<10} {} {}%", bar.name, bar.bar, bar.percent));
    }

    if !record.insights.is_empty() {
        lines.push(String::new());
        lines.push("Key Insights:".to_string());
        for insight in &record.insights {
            lines.push(format!("  ⚠️ {insight}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("Generated: {}", meta.timestamp()));

    lines.join("\n")
}
