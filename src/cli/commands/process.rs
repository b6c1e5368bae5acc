//! Process command implementation
//!
//! Discovers the input CSV files, reconstructs each one on the blocking pool
//! with bounded concurrency, and writes a cleaned file per source (or one
//! combined file). Results are gathered in input order.

use super::load_configuration;
use super::shared::{
    FailedSource, RunSummary, SourceReport, create_progress_bar, print_json, print_text_summary,
};
use crate::app::adapters::csv_source::{
    cleaned_output_path, discover_sources, read_source, source_name, write_combined,
    write_records,
};
use crate::app::services::pipeline::{Pipeline, PipelineResult};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::{Error, Result};
use colored::*;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, error, info, warn};

/// A reconstructed source and where it was written
#[derive(Debug)]
pub struct SourceOutcome {
    pub result: PipelineResult,
    pub output: Option<PathBuf>,
}

/// Process command runner
///
/// Individual sources that fail are reported in the summary and do not stop
/// the run; configuration and discovery errors do.
pub async fn run_process(args: ProcessArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    args.apply_to(&mut config);
    debug!("Effective configuration: {:?}", config);

    let inputs = discover_sources(&args.inputs)?;
    if inputs.is_empty() {
        return Err(Error::configuration("No CSV files found in the given inputs"));
    }
    info!("Discovered {} source files", inputs.len());
    if args.combine.is_none() {
        warn_on_output_collisions(&inputs, &args.output_dir);
    }

    if args.dry_run {
        return run_dry_run(&args, &inputs);
    }

    // CPU-bound work: cap at the core count
    let workers = args.workers.min(num_cpus::get()).min(inputs.len()).max(1);
    debug!(
        "Using {} workers ({} requested, {} CPU cores)",
        workers,
        args.workers,
        num_cpus::get()
    );

    let pipeline = Arc::new(Pipeline::new(config)?);
    let output_dir = args.combine.is_none().then(|| args.output_dir.clone());

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(inputs.len() as u64, "Processing sources"));

    let outcomes: Vec<(PathBuf, Result<SourceOutcome>)> = stream::iter(inputs)
        .map(|input| {
            let pipeline = Arc::clone(&pipeline);
            let output_dir = output_dir.clone();
            let progress = progress.clone();
            async move {
                if let Some(pb) = &progress {
                    pb.set_message(format!("Processing: {}", source_name(&input)));
                }

                let task_input = input.clone();
                let outcome = task::spawn_blocking(move || {
                    process_source(&pipeline, &task_input, output_dir.as_deref())
                })
                .await
                .map_err(|e| Error::task_failed(source_name(&input), e.to_string()))
                .and_then(|outcome| outcome);

                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                (input, outcome)
            }
        })
        .buffered(workers)
        .collect()
        .await;

    if let Some(pb) = &progress {
        pb.finish_with_message("Processing complete");
    }

    let mut summary = RunSummary::default();
    let mut results = Vec::new();

    for (input, outcome) in outcomes {
        match outcome {
            Ok(SourceOutcome { result, output }) => {
                summary.totals.merge(&result.stats);
                summary
                    .sources
                    .push(SourceReport::new(&input, output, &result));
                results.push(result);
            }
            Err(e) => {
                error!("Failed to process {}: {}", input.display(), e);
                summary.failed.push(FailedSource {
                    input,
                    error: e.to_string(),
                });
            }
        }
    }

    if let Some(combined) = &args.combine {
        write_combined(combined, &results)?;
        summary.combined_output = Some(combined.clone());
    }

    summary.elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!("{}", summary.totals.summary());

    report(&args, &summary)?;
    Ok(summary)
}

/// Read, reconstruct and (optionally) write one source
///
/// With no `output_dir` the result is only returned, for a combined write.
pub fn process_source(
    pipeline: &Pipeline,
    input: &Path,
    output_dir: Option<&Path>,
) -> Result<SourceOutcome> {
    let table = read_source(input)?;
    let result = pipeline.process(&table);

    let output = match output_dir {
        Some(dir) => {
            let path = cleaned_output_path(input, dir);
            write_records(&path, &result)?;
            info!("Wrote {} records to {}", result.record_count(), path.display());
            Some(path)
        }
        None => None,
    };

    Ok(SourceOutcome { result, output })
}

/// Show what would be processed without reading or writing anything
fn run_dry_run(args: &ProcessArgs, inputs: &[PathBuf]) -> Result<RunSummary> {
    info!("Performing dry run - no files will be created");

    match args.format {
        OutputFormat::Json => {
            let plan: Vec<_> = inputs
                .iter()
                .map(|input| {
                    serde_json::json!({
                        "input": input,
                        "output": planned_output(args, input),
                    })
                })
                .collect();
            print_json(&plan)?;
        }
        OutputFormat::Text => {
            println!("\n{}", "Dry run".bright_yellow().bold());
            for input in inputs {
                println!(
                    "  {} -> {}",
                    input.display().to_string().bright_white(),
                    planned_output(args, input).display()
                );
            }
            println!(
                "\n  {} {}\n",
                "Sources:".bright_cyan(),
                inputs.len().to_string().bright_white().bold()
            );
        }
    }

    Ok(RunSummary::default())
}

fn planned_output(args: &ProcessArgs, input: &Path) -> PathBuf {
    match &args.combine {
        Some(combined) => combined.clone(),
        None => cleaned_output_path(input, &args.output_dir),
    }
}

/// Two inputs with the same file stem would write the same output file
fn warn_on_output_collisions(inputs: &[PathBuf], output_dir: &Path) {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for input in inputs {
        let output = cleaned_output_path(input, output_dir);
        if let Some(previous) = seen.insert(output.clone(), input) {
            warn!(
                "{} and {} both write {}; the later one wins",
                previous.display(),
                input.display(),
                output.display()
            );
        }
    }
}

fn report(args: &ProcessArgs, summary: &RunSummary) -> Result<()> {
    match args.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Text if args.quiet => Ok(()),
        OutputFormat::Text => {
            print_text_summary(summary);
            Ok(())
        }
    }
}
