//! Vitals - Project health summary generator
//!
//! CLI entry point for the report generator.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use vitals::report::{self, text, Format, ReportMeta};
use vitals::{
    derive_insights, DirLedger, HealthRecord, RenderedMetrics, ReportWriter, RunDisplay, RunLedger,
};

/// Project health summary generator
///
/// Reads one status record and renders dashboard-ready text, HTML, and JSON
/// views into a dated, run-numbered output folder.
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
struct Cli {
    /// Path to the health record file
    #[arg(long, default_value = "health.toml")]
    record: PathBuf,

    /// Root directory for generated reports
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,

    /// Generate the plain-text view
    #[arg(long)]
    text: bool,

    /// Generate the HTML view
    #[arg(long)]
    html: bool,

    /// Generate the JSON view
    #[arg(long)]
    json: bool,

    /// Generate the LLM prompt view
    #[arg(long)]
    prompt: bool,

    /// Print the text view to stdout and write no files
    #[arg(long)]
    console: bool,

    /// Append derived insights (blockers, imbalance, leading vendor)
    #[arg(long)]
    auto_insights: bool,
}

/// Resolve the requested output formats.
///
/// No format flags selects the three defaults (text, HTML, JSON); the
/// prompt view is opt-in only.
fn selected_formats(cli: &Cli) -> Vec<Format> {
    let all = !(cli.text || cli.html || cli.json || cli.prompt);

    let mut formats = Vec::new();
    if cli.text || all {
        formats.push(Format::Text);
    }
    if cli.html || all {
        formats.push(Format::Html);
    }
    if cli.json || all {
        formats.push(Format::Json);
    }
    if cli.prompt {
        formats.push(Format::Prompt);
    }
    formats
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate the record before anything is written
    let mut record = HealthRecord::from_path(&cli.record)
        .with_context(|| format!("Failed to load record from '{}'", cli.record.display()))?;

    if cli.auto_insights {
        let derived = derive_insights(&record);
        record.insights.extend(derived);
    }

    let generated_at = Local::now();

    if cli.console {
        // Console mode prints the text view only and consumes no run number
        let meta = ReportMeta {
            run_id: None,
            generated_at,
        };
        let rendered = RenderedMetrics::from_record(&record);
        println!("{}", text::render(&record, &rendered, &meta));
        return Ok(());
    }

    let ledger = DirLedger::new(&cli.output_dir);
    let run = ledger
        .next_run_id(generated_at.date_naive())
        .context("Failed to allocate run number")?;

    let display = RunDisplay::new(&run);
    display.print_header();

    let meta = ReportMeta {
        run_id: Some(run),
        generated_at,
    };
    let artifacts = report::render_all(&record, &selected_formats(&cli), &meta)?;

    let writer = ReportWriter::new(&cli.output_dir);
    let saved = writer
        .write(&run, &artifacts)
        .context("Failed to write report files")?;

    for file in &saved.files {
        display.print_saved(file);
    }
    display.print_complete(&saved.folder, saved.files.len());

    Ok(())
}
