//! Report rendering
//!
//! Turns one [`HealthRecord`](crate::record::HealthRecord) into its output
//! views. Derived values are computed once in [`metrics`] and shared by every
//! renderer, so the views cannot drift apart.

pub mod html;
pub mod json;
pub mod metrics;
pub mod prompt;
pub mod text;

use anyhow::Result;
use chrono::{DateTime, Local};

use self::metrics::RenderedMetrics;
use crate::ledger::RunIdentity;
use crate::record::HealthRecord;

/// Output view selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain text block
    Text,
    /// HTML snippet for a rich-text widget
    Html,
    /// Machine-readable JSON envelope
    Json,
    /// Markdown prompt for an LLM summary pass
    Prompt,
}

impl Format {
    /// File extension used when the view is persisted.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Json => "json",
            Self::Prompt => "prompt.md",
        }
    }
}

/// Per-run metadata stamped into every view
#[derive(Debug, Clone, Copy)]
pub struct ReportMeta {
    /// Run identity, absent in console mode (nothing is persisted)
    pub run_id: Option<RunIdentity>,
    /// When this report was generated
    pub generated_at: DateTime<Local>,
}

impl ReportMeta {
    /// Timestamp in the `YYYY-MM-DD HH:MM` form shown in reports.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// One rendered view plus the extension it is saved under
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Which view this is
    pub format: Format,
    /// Rendered content
    pub content: String,
}

/// Render the requested views of a record.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_all(
    record: &HealthRecord,
    formats: &[Format],
    meta: &ReportMeta,
) -> Result<Vec<Artifact>> {
    let rendered = RenderedMetrics::from_record(record);

    formats
        .iter()
        .map(|&format| {
            let content = match format {
                Format::Text => text::render(record, &rendered, meta),
                Format::Html => html::render(record, &rendered, meta),
                Format::Json => json::render(record, &rendered, meta)?,
                Format::Prompt => prompt::render(record, &rendered, meta),
            };
            Ok(Artifact { format, content })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> HealthRecord {
        HealthRecord::parse(
            r#"
status = "yellow"
variance_days = -4
target_date = "2026-02-20"
original_date = "2026-02-16"
percent_complete = 61
task_count = 33
insights = ["CSG awaiting firewall change"]

[breakdown]
critical = 2
at_risk = 9
on_track = 22

[[vendor]]
name = "CSG"
percent = 35
"#,
        )
        .unwrap()
    }

    fn sample_meta() -> ReportMeta {
        ReportMeta {
            run_id: RunIdentity::parse("2026-02-01_002"),
            generated_at: Local.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Format::Text.extension(), "txt");
        assert_eq!(Format::Html.extension(), "html");
        assert_eq!(Format::Json.extension(), "json");
        assert_eq!(Format::Prompt.extension(), "prompt.md");
    }

    #[test]
    fn test_meta_timestamp_format() {
        assert_eq!(sample_meta().timestamp(), "2026-02-01 09:30");
    }

    #[test]
    fn test_render_all_keeps_request_order() {
        let artifacts = render_all(
            &sample_record(),
            &[Format::Json, Format::Text],
            &sample_meta(),
        )
        .unwrap();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].format, Format::Json);
        assert_eq!(artifacts[1].format, Format::Text);
    }

    #[test]
    fn test_render_all_views_agree_on_headline() {
        let record = sample_record();
        let meta = sample_meta();
        let artifacts = render_all(
            &record,
            &[Format::Text, Format::Html, Format::Json, Format::Prompt],
            &meta,
        )
        .unwrap();

        for artifact in &artifacts {
            assert!(
                artifact.content.contains("Project is 4 days behind schedule"),
                "headline missing from {:?}",
                artifact.format
            );
        }
    }
}
