//! Command-line argument definitions for the crime log processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::constants::DEFAULT_PARALLEL_WORKERS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the crime log processor
///
/// Reconstructs incident records from messy campus crime log exports and
/// writes one clean CSV per source.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crimelog-processor",
    version,
    about = "Reconstruct and normalize campus crime log tables",
    long_about = "Cleans crime log tables exported from spreadsheets, web pages and PDF text \
                  extraction. Repeated page headers and report banners are dropped, incidents \
                  split across several rows are merged back together, and dates, times, \
                  dispositions and crime types are normalized."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Reconstruct and normalize crime log CSV files
    Process(ProcessArgs),
    /// Show how the columns of one source would be classified
    Classify(ClassifyArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// CSV files or directories to process
    ///
    /// Directories are searched recursively for `*.csv` files. Files this
    /// tool wrote earlier (`*_cleaned.csv`) are skipped.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Directory for cleaned output files
    ///
    /// Each input is written to `<output>/<stem>_cleaned.csv`. Created if it
    /// doesn't exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "cleaned",
        help = "Directory for cleaned output files"
    )]
    pub output_dir: PathBuf,

    /// Path to configuration file
    ///
    /// TOML configuration file for pattern tables and normalizer switches.
    /// If not specified, uses ~/.config/crimelog-processor/config.toml when
    /// it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Drop columns that match no role
    #[arg(
        long = "strict-schema",
        help = "Drop columns that match no role",
        conflicts_with = "standard_schema"
    )]
    pub strict_schema: bool,

    /// Reduce output to one standard column per role
    #[arg(
        long = "standard-schema",
        help = "Output the standard columns only (Case Number, Location, ...)"
    )]
    pub standard_schema: bool,

    /// Title-case text that was exported in all caps
    #[arg(long = "title-case", help = "Title-case shouting free-text values")]
    pub title_case: bool,

    /// Keep embedded dates and times in dispositions
    #[arg(
        long = "keep-disposition-dates",
        help = "Keep embedded dates and times in dispositions"
    )]
    pub keep_disposition_dates: bool,

    /// Leave disposition abbreviations unexpanded
    #[arg(
        long = "raw-disposition",
        help = "Do not expand disposition abbreviations"
    )]
    pub raw_disposition: bool,

    /// Write every source into one standard-schema file
    ///
    /// The combined file starts with a `Source` column naming the input each
    /// record came from. Implies `--standard-schema`.
    #[arg(
        long = "combine",
        value_name = "FILE",
        help = "Write all sources into one CSV file",
        conflicts_with = "strict_schema"
    )]
    pub combine: Option<PathBuf>,

    /// Number of parallel workers
    ///
    /// Controls how many files are processed concurrently.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_PARALLEL_WORKERS,
        help = "Number of parallel workers for processing"
    )]
    pub workers: usize,

    /// Output format for the run summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the run summary"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Perform a dry run without writing files
    ///
    /// Lists the discovered inputs and where their output would go.
    #[arg(
        long = "dry-run",
        help = "Show what would be processed without creating output files"
    )]
    pub dry_run: bool,
}

/// Arguments for the classify command
#[derive(Debug, Clone, Parser)]
pub struct ClassifyArgs {
    /// CSV file to classify
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the column report
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the column report"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format for summaries and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Log level requested by whichever command was given
    pub fn get_log_level(&self) -> &'static str {
        match &self.command {
            Some(Commands::Process(args)) => args.get_log_level(),
            Some(Commands::Classify(args)) => args.get_log_level(),
            None => "warn",
        }
    }

    /// Check if logging should use the compact quiet layout
    pub fn is_quiet(&self) -> bool {
        matches!(&self.command, Some(Commands::Process(args)) if args.quiet)
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.workers > 100 {
            return Err(Error::configuration("Number of workers cannot exceed 100"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(combine) = &self.combine {
            if combine.is_dir() {
                return Err(Error::configuration(format!(
                    "Combined output must be a file, not a directory: {}",
                    combine.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply command-line switches on top of the loaded configuration
    ///
    /// Flags only ever switch behavior on; a flag that is absent leaves the
    /// configured value alone.
    pub fn apply_to(&self, config: &mut Config) {
        if self.strict_schema {
            config.strict_schema = true;
            config.standard_schema = false;
        }
        if self.standard_schema || self.combine.is_some() {
            config.standard_schema = true;
            config.strict_schema = false;
        }
        if self.title_case {
            config.title_case_output = true;
        }
        if self.keep_disposition_dates {
            config.strip_dates_from_disposition = false;
        }
        if self.raw_disposition {
            config.standardize_disposition = false;
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

impl ClassifyArgs {
    /// Validate the classify command arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("cleaned"),
            config_file: None,
            strict_schema: false,
            standard_schema: false,
            title_case: false,
            keep_disposition_dates: false,
            raw_disposition: false,
            combine: None,
            workers: DEFAULT_PARALLEL_WORKERS,
            format: OutputFormat::Text,
            verbose: 0,
            quiet: false,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn process_args(argv: &[&str]) -> ProcessArgs {
        match parse(argv).command {
            Some(Commands::Process(args)) => args,
            other => panic!("expected process command, got {:?}", other),
        }
    }

    #[test]
    fn test_process_defaults() {
        let args = process_args(&["crimelog-processor", "process", "log.csv"]);

        assert_eq!(args.inputs, vec![PathBuf::from("log.csv")]);
        assert_eq!(args.output_dir, PathBuf::from("cleaned"));
        assert_eq!(args.workers, DEFAULT_PARALLEL_WORKERS);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.dry_run);
        assert!(args.combine.is_none());
    }

    #[test]
    fn test_process_requires_input() {
        assert!(Args::try_parse_from(["crimelog-processor", "process"]).is_err());
    }

    #[test]
    fn test_process_multiple_inputs_and_flags() {
        let args = process_args(&[
            "crimelog-processor",
            "process",
            "a.csv",
            "logs/",
            "-o",
            "out",
            "--title-case",
            "--raw-disposition",
            "-j",
            "2",
            "--format",
            "json",
        ]);

        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.title_case);
        assert!(args.raw_disposition);
        assert_eq!(args.workers, 2);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_schema_flags_conflict() {
        let result = Args::try_parse_from([
            "crimelog-processor",
            "process",
            "a.csv",
            "--strict-schema",
            "--standard-schema",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["crimelog-processor", "process", "a.csv", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_process_args_validation() {
        let args = ProcessArgs {
            inputs: vec![PathBuf::from("a.csv")],
            ..ProcessArgs::default()
        };
        assert!(args.validate().is_ok());

        let mut invalid_args = args.clone();
        invalid_args.workers = 0;
        assert!(invalid_args.validate().is_err());

        invalid_args.workers = 101;
        assert!(invalid_args.validate().is_err());

        let mut invalid_args = args.clone();
        invalid_args.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(invalid_args.validate().is_err());

        let temp_dir = TempDir::new().unwrap();
        let mut invalid_args = args;
        invalid_args.combine = Some(temp_dir.path().to_path_buf());
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_apply_to_config() {
        let args = ProcessArgs {
            title_case: true,
            keep_disposition_dates: true,
            raw_disposition: true,
            strict_schema: true,
            ..ProcessArgs::default()
        };

        let mut config = Config::default();
        args.apply_to(&mut config);

        assert!(config.title_case_output);
        assert!(!config.strip_dates_from_disposition);
        assert!(!config.standardize_disposition);
        assert!(config.strict_schema);
        assert!(!config.standard_schema);
    }

    #[test]
    fn test_combine_forces_standard_schema() {
        let args = ProcessArgs {
            combine: Some(PathBuf::from("all.csv")),
            ..ProcessArgs::default()
        };

        let mut config = Config {
            strict_schema: true,
            ..Config::default()
        };
        args.apply_to(&mut config);

        assert!(config.standard_schema);
        assert!(!config.strict_schema);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = Config {
            title_case_output: true,
            ..Config::default()
        };
        ProcessArgs::default().apply_to(&mut config);

        assert!(config.title_case_output);
        assert!(config.standardize_disposition);
        assert!(config.strip_dates_from_disposition);
    }

    #[test]
    fn test_log_level() {
        let mut args = ProcessArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = ProcessArgs::default();
        assert!(args.show_progress());

        args.format = OutputFormat::Json;
        assert!(!args.show_progress());

        args.format = OutputFormat::Text;
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_classify_command() {
        let args = parse(&["crimelog-processor", "classify", "log.csv", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");
        assert!(!args.is_quiet());

        match args.command {
            Some(Commands::Classify(classify)) => {
                assert_eq!(classify.input, PathBuf::from("log.csv"));
                assert_eq!(classify.format, OutputFormat::Text);
            }
            other => panic!("expected classify command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_command() {
        let args = parse(&["crimelog-processor"]);
        assert!(args.command.is_none());
        assert_eq!(args.get_log_level(), "warn");
    }
}
