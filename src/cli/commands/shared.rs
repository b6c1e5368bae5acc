//! Shared components for CLI commands
//!
//! Run summaries and the helpers that render them for people (coloured
//! text) or scripts (JSON).

use crate::Result;
use crate::app::services::pipeline::{PipelineResult, PipelineStats};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of one successfully processed source
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub input: PathBuf,
    /// Written file; `None` when the source went into a combined file
    pub output: Option<PathBuf>,
    pub records: usize,
    pub stats: PipelineStats,
}

impl SourceReport {
    pub fn new(input: &Path, output: Option<PathBuf>, result: &PipelineResult) -> Self {
        Self {
            source: result.source.clone(),
            input: input.to_path_buf(),
            output,
            records: result.record_count(),
            stats: result.stats.clone(),
        }
    }
}

/// A source that could not be read or written
#[derive(Debug, Clone, Serialize)]
pub struct FailedSource {
    pub input: PathBuf,
    pub error: String,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub sources: Vec<SourceReport>,
    pub failed: Vec<FailedSource>,
    pub combined_output: Option<PathBuf>,
    /// Statistics folded over every successful source
    pub totals: PipelineStats,
    pub elapsed_seconds: f64,
}

impl RunSummary {
    /// Check if any source failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Records emitted across all sources
    pub fn total_records(&self) -> usize {
        self.totals.records
    }
}

/// Create a progress bar with the standard styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print any serializable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a human-readable run summary
pub fn print_text_summary(summary: &RunSummary) {
    let totals = &summary.totals;
    let duration = HumanDuration(Duration::from_secs_f64(summary.elapsed_seconds));

    println!("\n{}", "Reconstruction Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Sources processed:".bright_cyan(),
        summary.sources.len().to_string().bright_white()
    );
    if summary.has_failures() {
        println!(
            "  {} {}",
            "Sources failed:".bright_red(),
            summary.failed.len().to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        totals.input_rows.to_string().bright_white()
    );
    println!(
        "  {} {} ({:.2} rows/record)",
        "Records emitted:".bright_cyan(),
        totals.records.to_string().bright_white().bold(),
        totals.reconstruction_ratio()
    );
    println!(
        "  {} {} header, {} metadata, {} blank",
        "Rows dropped:".bright_cyan(),
        totals.repeated_header_rows,
        totals.metadata_rows,
        totals.blank_rows
    );
    if totals.orphan_rows > 0 {
        println!(
            "  {} {}",
            "Orphan rows:".bright_yellow(),
            totals.orphan_rows.to_string().bright_yellow()
        );
    }
    if totals.normalization_misses > 0 {
        println!(
            "  {} {}",
            "Normalization misses:".bright_yellow(),
            totals.normalization_misses.to_string().bright_yellow()
        );
    }
    println!("  {} {}", "Time elapsed:".bright_cyan(), duration);

    if !summary.sources.is_empty() {
        println!("\n{}", "Output Files".bright_green().bold());
        for report in &summary.sources {
            let target = report
                .output
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(combined)".to_string());
            println!(
                "  {} -> {} ({} records)",
                report.source.bright_white(),
                target,
                report.records
            );
        }
    }

    if let Some(combined) = &summary.combined_output {
        println!(
            "  {} {}",
            "Combined file:".bright_cyan(),
            combined.display().to_string().bright_white().bold()
        );
    }

    for failure in &summary.failed {
        println!(
            "  {} {}: {}",
            "Failed:".bright_red().bold(),
            failure.input.display(),
            failure.error
        );
    }
    println!();
}
