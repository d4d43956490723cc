//! HTML view
//!
//! Inline-styled snippet for embedding in a dashboard rich-text widget.
//! Every data field carries a stable `data-field` (or `data-vendor`)
//! attribute so downstream tooling can diff runs.

use super::metrics::RenderedMetrics;
use super::ReportMeta;
use crate::record::HealthRecord;

/// Fill color for a vendor bar at the given percent.
const fn bar_color(percent: u8) -> &'static str {
    if percent >= 50 {
        "#33826A"
    } else if percent >= 25 {
        "#E0B774"
    } else {
        "#BD696A"
    }
}

/// Escape text for safe interpolation into HTML.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_vendor_rows(metrics: &RenderedMetrics) -> String {
    metrics
        .vendor_bars
        .iter()
        .map(|bar| {
            format!(
                r#"        <div style="display: flex; align-items: center; margin: 4px 0;" data-vendor="{name}" data-percent="{pct}">
            <span style="width: 70px; font-weight: 600;">{name}</span>
            <div style="flex: 1; background: #E8E8E8; height: 16px; border-radius: 3px; margin: 0 8px;">
                <div style="width: {pct}%; background: {color}; height: 100%; border-radius: 3px;"></div>
            </div>
            <span style="width: 35px; text-align: right; font-weight: 600;">{pct}%</span>
        </div>
"#,
                name = escape(&bar.name),
                pct = bar.percent,
                color = bar_color(bar.percent),
            )
        })
        .collect()
}

fn render_insights_box(record: &HealthRecord) -> String {
    if record.insights.is_empty() {
        return String::new();
    }

    let items: String = record
        .insights
        .iter()
        .map(|insight| {
            format!(
                r#"        <div style="margin: 4px 0;" data-field="insight">⚠️ {}</div>
"#,
                escape(insight)
            )
        })
        .collect();

    format!(
        r#"    <div style="margin-top: 12px; padding: 8px; background: #FFF9E6; border-left: 3px solid #E0B774; font-size: 12px;" data-field="insights">
{items}    </div>
"#
    )
}

/// Render the HTML view.
#[must_use]
pub fn render(record: &HealthRecord, metrics: &RenderedMetrics, meta: &ReportMeta) -> String {
    let status = metrics.status;

    format!(
        r#"<div style="font-family: Arial, sans-serif; font-size: 13px; color: #4C4C4C; padding: 8px;" data-field="health-summary">
    <div style="display: flex; align-items: center; margin-bottom: 12px;">
        <span style="font-size: 24px; margin-right: 8px;" data-field="status-glyph">{glyph}</span>
        <div>
            <div style="font-size: 16px; font-weight: bold; color: {status_color};" data-field="status">{label}</div>
            <div style="font-size: 12px; color: #9A9A9A;" data-field="headline">{headline}</div>
        </div>
    </div>

    <div style="display: flex; justify-content: space-between; margin: 12px 0; padding: 8px; background: #F5F5F5; border-radius: 4px;">
        <div style="text-align: center;">
            <div style="font-size: 18px; font-weight: bold;" data-field="percent-complete">{pct}%</div>
            <div style="font-size: 10px; color: #9A9A9A;">COMPLETE</div>
        </div>
        <div style="text-align: center;">
            <div style="font-size: 18px; font-weight: bold;" data-field="variance-days">{variance}d</div>
            <div style="font-size: 10px; color: #9A9A9A;">VARIANCE</div>
        </div>
        <div style="text-align: center;">
            <div style="font-size: 18px; font-weight: bold;" data-field="task-count">{tasks}</div>
            <div style="font-size: 10px; color: #9A9A9A;">TASKS</div>
        </div>
    </div>

    <div style="margin: 12px 0; font-size: 12px;">
        Target: <span style="font-weight: 600;" data-field="target-date">{target}</span> |
        Original: <span style="font-weight: 600;" data-field="original-date">{original}</span>
    </div>

    <div style="margin: 12px 0; font-size: 12px;">
        🔴 <span data-field="critical-count">{critical}</span> critical ·
        🟡 <span data-field="at-risk-count">{at_risk}</span> at risk ·
        🟢 <span data-field="on-track-count">{on_track}</span> on track
    </div>

    <div style="margin: 12px 0;">
        <div style="font-weight: bold; margin-bottom: 6px; font-size: 11px; color: #006643;">VENDOR PROGRESS</div>
{vendor_rows}    </div>

{insights_box}    <div style="margin-top: 12px; font-size: 10px; color: #9A9A9A; text-align: right;">
        Updated: <span data-field="generated-at">{generated}</span>
    </div>
</div>"#,
        glyph = status.glyph(),
        status_color = status.color(),
        label = status.label(),
        headline = escape(&metrics.headline),
        pct = record.percent_complete,
        variance = record.variance_days,
        tasks = record.task_count,
        target = record.target_date,
        original = record.original_date,
        critical = record.breakdown.critical,
        at_risk = record.breakdown.at_risk,
        on_track = record.breakdown.on_track,
        vendor_rows = render_vendor_rows(metrics),
        insights_box = render_insights_box(record),
        generated = meta.timestamp(),
    )
}
