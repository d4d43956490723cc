//! Derived insight lines
//!
//! Heuristic observations computed from the record itself, appended to the
//! recorded insights when `--auto-insights` is passed. Strings carry no
//! glyphs; the renderers own insight decoration.

use crate::record::HealthRecord;

/// Derive insight lines from a record.
///
/// Produces, in order: blocked vendors (at 0%), critical-vs-on-track
/// imbalance, and the leading vendor when it is past the halfway mark.
/// A record can yield anywhere from zero to three lines.
#[must_use]
pub fn derive_insights(record: &HealthRecord) -> Vec<String> {
    let mut insights = Vec::new();

    let blockers: Vec<&str> = record
        .vendors
        .iter()
        .filter(|v| v.percent == 0)
        .map(|v| v.name.as_str())
        .collect();
    if !blockers.is_empty() {
        insights.push(format!(
            "{} at 0% - blocking progress",
            blockers.join(", ")
        ));
    }

    if record.breakdown.critical > record.breakdown.on_track {
        insights.push(format!(
            "{} critical tasks vs {} on track",
            record.breakdown.critical, record.breakdown.on_track
        ));
    }

    // First vendor wins a tie on percent
    let leader = record
        .vendors
        .iter()
        .reduce(|best, v| if v.percent > best.percent { v } else { best });
    if let Some(leader) = leader {
        if leader.percent > 50 {
            insights.push(format!("{} leading at {}%", leader.name, leader.percent));
        }
    }

    insights
}
