//! Report persistence
//!
//! Writes rendered artifacts into `outputs/<run>/` as
//! `health_summary_<run>.<ext>`. The run folder is created on first write,
//! never earlier, so a rejected record leaves no partial output behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ledger::RunIdentity;
use crate::report::Artifact;

/// Files written for one run
#[derive(Debug)]
pub struct SavedRun {
    /// The run folder
    pub folder: PathBuf,
    /// File names written into the folder, in write order
    pub files: Vec<String>,
}

/// Writes report artifacts under an output root
pub struct ReportWriter {
    root: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at the given output directory.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Write all artifacts for a run into its folder.
    ///
    /// # Errors
    /// Returns an error if the run folder cannot be created or a file
    /// cannot be written.
    pub fn write(&self, run: &RunIdentity, artifacts: &[Artifact]) -> Result<SavedRun> {
        let folder = self.root.join(run.to_string());
        std::fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create output folder: {}", folder.display()))?;

        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let filename = format!("health_summary_{run}.{}", artifact.format.extension());
            let path = folder.join(&filename);
            std::fs::write(&path, &artifact.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            files.push(filename);
        }

        Ok(SavedRun { folder, files })
    }
}
