//! Rich CLI display for generator runs
//!
//! Renders run progress as human-readable terminal output. All output goes
//! to stderr so stdout remains clean for piping (and for `--console` text).

use std::path::Path;

use colored::Colorize;

use crate::ledger::RunIdentity;

/// Display handler for one generator run
pub struct RunDisplay {
    run_id: String,
}

impl RunDisplay {
    /// Create a display handler for the given run.
    #[must_use]
    pub fn new(run: &RunIdentity) -> Self {
        Self {
            run_id: run.to_string(),
        }
    }

    /// Print the run header at the start of generation.
    pub fn print_header(&self) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Health summary run: {}", self.run_id).bold().cyan()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Print one saved file line.
    pub fn print_saved(&self, filename: &str) {
        eprintln!("  {} {filename}", "Saved:".dimmed());
    }

    /// Print the post-run summary.
    pub fn print_complete(&self, folder: &Path, file_count: usize) {
        eprintln!("{}", "─".repeat(50).dimmed());
        eprintln!("  {} {}", "COMPLETE".green().bold(), self.run_id.bold());
        eprintln!(
            "  {} {file_count} file(s) in {}",
            "Output:".dimmed(),
            folder.display()
        );
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> RunDisplay {
        RunDisplay::new(&RunIdentity::parse("2026-01-30_001").unwrap())
    }

    #[test]
    fn test_new_display_formats_run_id() {
        assert_eq!(display().run_id, "2026-01-30_001");
    }

    // Display methods only write to stderr; assert they don't panic
    #[test]
    fn test_display_methods_no_panic() {
        let display = display();
        display.print_header();
        display.print_saved("health_summary_2026-01-30_001.txt");
        display.print_complete(Path::new("outputs/2026-01-30_001"), 3);
    }
}
