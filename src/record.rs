//! Health record parser
//!
//! Parses a `health.toml` status snapshot into a structured record.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Overall project health rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Project is in critical condition
    Red,
    /// Project is at risk
    Yellow,
    /// Project is on track
    Green,
}

impl HealthStatus {
    /// The status indicator glyph shown in report headers.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Red => "🔴",
            Self::Yellow => "🟡",
            Self::Green => "🟢",
        }
    }

    /// Uppercase label (RED/YELLOW/GREEN).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }

    /// Dashboard accent color for this status.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Red => "#BD696A",
            Self::Yellow => "#E0B774",
            Self::Green => "#33826A",
        }
    }
}

/// Task counts grouped by severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskBreakdown {
    /// Tasks flagged red
    pub critical: u32,
    /// Tasks flagged yellow
    pub at_risk: u32,
    /// Tasks flagged green
    pub on_track: u32,
}

/// Completion percentage for a single vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorProgress {
    /// Vendor name as shown in reports
    pub name: String,
    /// Percent complete (0-100)
    pub percent: u8,
}

/// One project status snapshot, parsed from health.toml
///
/// The record is immutable once built; renderers consume it and the
/// program exits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthRecord {
    /// Overall health rating
    pub status: HealthStatus,
    /// Schedule variance in days (negative = behind schedule)
    pub variance_days: i32,
    /// Current projected go-live date
    pub target_date: NaiveDate,
    /// Baseline go-live date
    pub original_date: NaiveDate,
    /// Percent of work complete (0-100)
    pub percent_complete: u8,
    /// Total number of tracked tasks
    pub task_count: u32,
    /// Severity breakdown of tracked tasks
    pub breakdown: TaskBreakdown,
    /// Per-vendor completion, in display order
    #[serde(rename = "vendor", default)]
    pub vendors: Vec<VendorProgress>,
    /// Free-text insight lines, in display order
    #[serde(default)]
    pub insights: Vec<String>,
}

impl HealthRecord {
    /// Parse a health.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse health.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let record: Self = toml::from_str(content).context("Failed to parse health.toml")?;
        record.validate()?;
        Ok(record)
    }

    /// Validate the record
    fn validate(&self) -> Result<()> {
        if self.percent_complete > 100 {
            bail!(
                "percent_complete must be 0-100, got {}",
                self.percent_complete
            );
        }

        let mut seen = HashSet::new();
        for vendor in &self.vendors {
            if vendor.name.trim().is_empty() {
                bail!("Vendor name cannot be empty");
            }
            if !seen.insert(&vendor.name) {
                bail!("Duplicate vendor name: '{}'", vendor.name);
            }
            if vendor.percent > 100 {
                bail!(
                    "Vendor '{}' percent must be 0-100, got {}",
                    vendor.name,
                    vendor.percent
                );
            }
        }

        Ok(())
    }
}
