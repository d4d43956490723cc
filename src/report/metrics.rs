//! Derived display values
//!
//! Computes every derived field (headline sentence, status indicator, vendor
//! bars) exactly once, so the text, HTML, JSON, and prompt views can never
//! disagree about them.

use crate::record::{HealthRecord, HealthStatus};

/// Width of a vendor progress bar, in glyphs
pub const BAR_WIDTH: usize = 10;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// A vendor's bar, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorBar {
    /// Vendor name
    pub name: String,
    /// Percent complete (0-100)
    pub percent: u8,
    /// 10-glyph filled/empty bar
    pub bar: String,
}

/// Display values derived from a `HealthRecord`
///
/// Pure function of the record; holds everything the renderers share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMetrics {
    /// Overall status, carried through for glyph/label/color lookups
    pub status: HealthStatus,
    /// Human sentence describing schedule variance
    pub headline: String,
    /// Per-vendor bars, in record order
    pub vendor_bars: Vec<VendorBar>,
}

impl RenderedMetrics {
    /// Derive display values from a record.
    #[must_use]
    pub fn from_record(record: &HealthRecord) -> Self {
        let vendor_bars = record
            .vendors
            .iter()
            .map(|v| VendorBar {
                name: v.name.clone(),
                percent: v.percent,
                bar: progress_bar(v.percent),
            })
            .collect();

        Self {
            status: record.status,
            headline: headline(record.variance_days),
            vendor_bars,
        }
    }
}

/// The schedule-variance sentence for a signed day count.
#[must_use]
pub fn headline(variance_days: i32) -> String {
    if variance_days < 0 {
        format!(
            "Project is {} days behind schedule",
            variance_days.unsigned_abs()
        )
    } else if variance_days > 0 {
        format!("Project is {variance_days} days ahead of schedule")
    } else {
        "Project is on schedule".to_string()
    }
}

/// Number of filled segments in a 10-segment bar for a percent value.
///
/// Rounds to the nearest decile, ties rounding up (35% -> 4 filled).
#[must_use]
pub fn filled_segments(percent: u8) -> usize {
    let filled = (usize::from(percent) + 5) / 10;
    filled.min(BAR_WIDTH)
}

/// Render a 10-glyph progress bar for a percent value.
#[must_use]
pub fn progress_bar(percent: u8) -> String {
    let filled = filled_segments(percent);
    format!(
        "{}{}",
        BAR_FILLED.repeat(filled),
        BAR_EMPTY.repeat(BAR_WIDTH - filled)
    )
}
