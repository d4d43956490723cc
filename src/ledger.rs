//! Run identity allocation
//!
//! Each generator invocation is labeled `YYYY-MM-DD_NNN`, where the sequence
//! number restarts at 1 every calendar day. The output directory tree doubles
//! as the counter ledger: the next number is derived by scanning existing run
//! folders, not stored separately.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity of one generator run: date plus daily sequence number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunIdentity {
    /// Calendar date of the run
    pub date: NaiveDate,
    /// 1-indexed sequence number within the date
    pub seq: u32,
}

impl RunIdentity {
    /// Parse a run folder name of the form `YYYY-MM-DD_NNN`.
    ///
    /// Returns `None` for anything that doesn't match, so unrelated
    /// entries in the output root are ignored.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (date_part, seq_part) = name.rsplit_once('_')?;
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
        let seq: u32 = seq_part.parse().ok()?;
        Some(Self { date, seq })
    }
}

impl fmt::Display for RunIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:03}", self.date.format("%Y-%m-%d"), self.seq)
    }
}

/// Capability for allocating the next run identity for a date
///
/// Backed by real storage (`DirLedger`) in the CLI and by an in-memory
/// fake (`MemoryLedger`) in tests, so multi-run days can be simulated
/// without touching the filesystem.
pub trait RunLedger {
    /// Allocate the next run identity for `date`.
    fn next_run_id(&self, date: NaiveDate) -> Result<RunIdentity>;
}

/// Run ledger backed by the output directory tree
///
/// Scans the root for folders named `<date>_<NNN>` and hands out max + 1.
/// Concurrent invocations on the same day can race on the number; the
/// generator assumes one invocation at a time and takes no lock.
pub struct DirLedger {
    root: PathBuf,
}

impl DirLedger {
    /// Create a ledger over the given output root. The root does not
    /// need to exist yet; the first run of a day starts at 1.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl RunLedger for DirLedger {
    fn next_run_id(&self, date: NaiveDate) -> Result<RunIdentity> {
        if !self.root.exists() {
            return Ok(RunIdentity { date, seq: 1 });
        }

        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("Failed to scan output root: {}", self.root.display()))?;

        let mut max_seq = 0;
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to scan output root: {}", self.root.display()))?;
            let name = entry.file_name();
            if let Some(run) = RunIdentity::parse(&name.to_string_lossy()) {
                if run.date == date && run.seq > max_seq {
                    max_seq = run.seq;
                }
            }
        }

        Ok(RunIdentity {
            date,
            seq: max_seq + 1,
        })
    }
}

/// In-memory run ledger for tests and embedders
///
/// Counts per date behind a mutex; no filesystem involved.
#[derive(Default)]
pub struct MemoryLedger {
    counts: Mutex<HashMap<NaiveDate, u32>>,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunLedger for MemoryLedger {
    fn next_run_id(&self, date: NaiveDate) -> Result<RunIdentity> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|_| anyhow::anyhow!("Run counter lock poisoned"))?;
        let seq = counts.entry(date).or_insert(0);
        *seq += 1;
        Ok(RunIdentity { date, seq: *seq })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_run_identity_display_zero_padded() {
        let run = RunIdentity {
            date: date(2026, 1, 30),
            seq: 7,
        };
        assert_eq!(run.to_string(), "2026-01-30_007");
    }

    #[test]
    fn test_run_identity_display_three_digits() {
        let run = RunIdentity {
            date: date(2026, 1, 30),
            seq: 123,
        };
        assert_eq!(run.to_string(), "2026-01-30_123");
    }

    #[test]
    fn test_run_identity_parse_round_trip() {
        let run = RunIdentity::parse("2026-01-30_042").unwrap();
        assert_eq!(run.date, date(2026, 1, 30));
        assert_eq!(run.seq, 42);
        assert_eq!(run.to_string(), "2026-01-30_042");
    }

    #[test]
    fn test_run_identity_parse_rejects_garbage() {
        assert!(RunIdentity::parse("notes").is_none());
        assert!(RunIdentity::parse("2026-01-30").is_none());
        assert!(RunIdentity::parse("2026-01-30_abc").is_none());
        assert!(RunIdentity::parse("not-a-date_001").is_none());
    }

    #[test]
    fn test_dir_ledger_first_run_without_root() {
        let tmp = TempDir::new().unwrap();
        let ledger = DirLedger::new(tmp.path().join("outputs"));

        let run = ledger.next_run_id(date(2026, 1, 30)).unwrap();
        assert_eq!(run.seq, 1);
        // Allocation alone must not create anything
        assert!(!tmp.path().join("outputs").exists());
    }

    #[test]
    fn test_dir_ledger_increments_past_existing_runs() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("2026-01-30_001")).unwrap();
        std::fs::create_dir_all(tmp.path().join("2026-01-30_003")).unwrap();

        let ledger = DirLedger::new(tmp.path());
        let run = ledger.next_run_id(date(2026, 1, 30)).unwrap();
        assert_eq!(run.seq, 4);
    }

    #[test]
    fn test_dir_ledger_resets_per_date() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("2026-01-29_005")).unwrap();

        let ledger = DirLedger::new(tmp.path());
        let run = ledger.next_run_id(date(2026, 1, 30)).unwrap();
        assert_eq!(run.seq, 1);
    }

    #[test]
    fn test_dir_ledger_ignores_unrelated_entries() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("archive")).unwrap();
        std::fs::write(tmp.path().join("README.md"), "notes").unwrap();
        std::fs::create_dir_all(tmp.path().join("2026-01-30_002")).unwrap();

        let ledger = DirLedger::new(tmp.path());
        let run = ledger.next_run_id(date(2026, 1, 30)).unwrap();
        assert_eq!(run.seq, 3);
    }

    #[test]
    fn test_memory_ledger_sequences_without_gaps() {
        let ledger = MemoryLedger::new();
        let d = date(2026, 1, 30);

        for expected in 1..=5 {
            let run = ledger.next_run_id(d).unwrap();
            assert_eq!(run.seq, expected);
            assert_eq!(run.date, d);
        }
    }

    #[test]
    fn test_memory_ledger_independent_dates() {
        let ledger = MemoryLedger::new();
        ledger.next_run_id(date(2026, 1, 29)).unwrap();
        ledger.next_run_id(date(2026, 1, 29)).unwrap();

        let run = ledger.next_run_id(date(2026, 1, 30)).unwrap();
        assert_eq!(run.seq, 1);
    }
}
