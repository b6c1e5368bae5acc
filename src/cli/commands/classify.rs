//! Classify command implementation
//!
//! Reports the role inferred for each column of one source, plus the columns
//! that were excluded, without assembling any records.

use super::load_configuration;
use super::shared::print_json;
use crate::app::adapters::csv_source::read_source;
use crate::app::services::column_classifier::Classification;
use crate::app::services::pipeline::Pipeline;
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tokio::task;
use tracing::info;

/// Column report for one source
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub source: String,
    pub headers: Vec<String>,
    pub classification: Classification,
}

/// Classify command runner
pub async fn run_classify(args: ClassifyArgs) -> Result<ClassificationReport> {
    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;
    let pipeline = Pipeline::new(config)?;

    let input = args.input.clone();
    let report = task::spawn_blocking(move || classify_source(&pipeline, &input))
        .await
        .map_err(|e| Error::task_failed(args.input.display().to_string(), e.to_string()))??;

    info!(
        "Classified {} columns of '{}'",
        report.headers.len(),
        report.source
    );

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&report),
    }
    Ok(report)
}

/// Read a source and classify its columns
pub fn classify_source(pipeline: &Pipeline, input: &Path) -> Result<ClassificationReport> {
    let table = read_source(input)?;
    let classification = pipeline.classify(&table);

    Ok(ClassificationReport {
        source: table.name,
        headers: table.headers,
        classification,
    })
}

fn print_report(report: &ClassificationReport) {
    let classification = &report.classification;

    println!(
        "\n{} {}",
        "Columns of".bright_green().bold(),
        report.source.bright_white().bold()
    );
    for profile in &classification.profiles {
        let range = if profile.is_range { " (range)" } else { "" };
        println!(
            "  [{}] {} -> {}{}",
            profile.index,
            profile.header.bright_white(),
            profile.role.to_string().bright_cyan(),
            range
        );
    }

    if !classification.excluded.is_empty() {
        println!("\n{}", "Excluded".bright_yellow().bold());
        for column in &classification.excluded {
            println!("  [{}] '{}': {}", column.index, column.header, column.reason);
        }
    }

    for diagnostic in &classification.diagnostics {
        println!("  {} {}", "Warning:".bright_yellow(), diagnostic);
    }
    println!();
}
