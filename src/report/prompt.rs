//! LLM prompt view
//!
//! Fills the project-manager summary prompt with current metrics so the
//! output can be pasted straight into an LLM. Selected with `--prompt`.

use std::fmt::Write;

use super::metrics::RenderedMetrics;
use super::ReportMeta;
use crate::record::HealthRecord;

/// Render the markdown prompt view.
#[must_use]
pub fn render(record: &HealthRecord, metrics: &RenderedMetrics, meta: &ReportMeta) -> String {
    let mut vendor_lines = String::new();
    for bar in &metrics.vendor_bars {
        let _ = writeln!(vendor_lines, "- {}: {}%", bar.name, bar.percent);
    }
    if vendor_lines.is_empty() {
        vendor_lines.push_str("(No vendor data available)\n");
    }

    let mut insight_lines = String::new();
    for insight in &record.insights {
        let _ = writeln!(insight_lines, "- {insight}");
    }
    if insight_lines.is_empty() {
        insight_lines.push_str("(No insights recorded)\n");
    }

    format!(
        r#"You are acting as a project manager preparing an AI-generated summary for a dashboard rich-text widget.
You are given the current summary metrics for the project.

## Instructions:
1. Review the summary metrics to assess overall project health.
2. Write a concise project health summary structured as follows:
   - **Status**: One-line health indicator with emoji ({glyph}) and headline
   - **Analysis**: 3-4 sentences explaining schedule variance, vendor progress patterns, and risks
   - **Vendor Spotlight**: Quick callout of who's ahead and who's blocking
   - **Focus Areas**: Numbered list of top 3 priorities for the week
   - **Next Steps**: 2-3 suggested actions or escalations
3. Use bold section headers.
4. Keep it executive-ready: action-oriented, professional tone. Highlight risks and blockers clearly.
5. End with "Updated: {generated}"

---

## Summary Metrics:

**Project Overview:**
- Project Health: {label}
- Headline: {headline}
- Project Variance: {variance} days
- % Complete: {pct}%
- Target Go-Live: {target}
- Original Go-Live: {original}

**Task Breakdown:**
- Total Tasks: {tasks}
- Critical (Red): {critical}
- At Risk (Yellow): {at_risk}
- On Track (Green): {on_track}

**Vendor Progress:**
{vendors}
**Recorded Insights:**
{insights}
---

Now generate the executive health summary from the metrics above."#,
        glyph = metrics.status.glyph(),
        generated = meta.timestamp(),
        label = metrics.status.label(),
        headline = metrics.headline,
        variance = record.variance_days,
        pct = record.percent_complete,
        target = record.target_date,
        original = record.original_date,
        tasks = record.task_count,
        critical = record.breakdown.critical,
        at_risk = record.breakdown.at_risk,
        on_track = record.breakdown.on_track,
        vendors = vendor_lines,
        insights = insight_lines,
    )
}
