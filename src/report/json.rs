//! JSON view
//!
//! Complete machine-readable serialization of the record plus run identity
//! and generation timestamp. Key names are stable so two runs can be diffed
//! field by field.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

use super::metrics::RenderedMetrics;
use super::ReportMeta;
use crate::record::HealthRecord;

/// The serialized envelope: run label, timestamp, derived headline, and the
/// full input record.
#[derive(Debug, Serialize)]
struct ReportEnvelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    generated_at: DateTime<Local>,
    headline: &'a str,
    record: &'a HealthRecord,
}

/// Render the JSON view.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(record: &HealthRecord, metrics: &RenderedMetrics, meta: &ReportMeta) -> Result<String> {
    let envelope = ReportEnvelope {
        run_id: meta.run_id.map(|run| run.to_string()),
        generated_at: meta.generated_at,
        headline: &metrics.headline,
        record,
    };

    serde_json::to_string_pretty(&envelope).context("Failed to serialize report to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const RECORD: &str = r#"
status = "red"
variance_days = -18
target_date = "2026-01-30"
original_date = "2026-01-12"
percent_complete = 26
task_count = 75
insights = ["FPS contract unsigned", "IVR test env blocked"]

[breakdown]
critical = 12
at_risk = 20
on_track = 43

[[vendor]]
name = "FPS"
percent = 0

[[vendor]]
name = "IGT"
percent = 75
"#;

    fn render_sample(run_id: Option<&str>) -> (HealthRecord, String) {
        let record = HealthRecord::parse(RECORD).unwrap();
        let metrics = RenderedMetrics::from_record(&record);
        let meta = ReportMeta {
            run_id: run_id.map(|r| crate::ledger::RunIdentity::parse(r).unwrap()),
            generated_at: Local.with_ymd_and_hms(2026, 1, 30, 14, 0, 0).unwrap(),
        };
        let json = render(&record, &metrics, &meta).unwrap();
        (record, json)
    }

    #[test]
    fn test_envelope_keys() {
        let (_, json) = render_sample(Some("2026-01-30_003"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["run_id"], "2026-01-30_003");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["headline"], "Project is 18 days behind schedule");
        assert_eq!(value["record"]["status"], "red");
    }

    #[test]
    fn test_record_round_trips_losslessly() {
        let (record, json) = render_sample(Some("2026-01-30_001"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let recovered: HealthRecord = serde_json::from_value(value["record"].clone()).unwrap();
        assert_eq!(recovered, record);
    }

    #[test]
    fn test_record_fields_serialized() {
        let (_, json) = render_sample(Some("2026-01-30_001"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value["record"];

        assert_eq!(record["variance_days"], -18);
        assert_eq!(record["target_date"], "2026-01-30");
        assert_eq!(record["original_date"], "2026-01-12");
        assert_eq!(record["percent_complete"], 26);
        assert_eq!(record["task_count"], 75);
        assert_eq!(record["breakdown"]["critical"], 12);
        assert_eq!(record["breakdown"]["at_risk"], 20);
        assert_eq!(record["breakdown"]["on_track"], 43);
        assert_eq!(record["vendor"][0]["name"], "FPS");
        assert_eq!(record["vendor"][1]["percent"], 75);
        assert_eq!(record["insights"][1], "IVR test env blocked");
    }

    #[test]
    fn test_run_id_omitted_without_persistence() {
        let (_, json) = render_sample(None);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("run_id").is_none());
        assert!(value["generated_at"].is_string());
    }
}
