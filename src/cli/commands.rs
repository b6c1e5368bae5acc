//! Command implementations for the crime log processor CLI
//!
//! This module wires parsed arguments to the command runners and owns the
//! process-wide setup: logging and layered configuration loading.

pub mod classify;
pub mod process;
pub mod shared;

pub use shared::{FailedSource, RunSummary, SourceReport};

use crate::cli::args::{Args, Commands};
use crate::config::Config;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging, then dispatches to the requested command. Commands that
/// do not process records return an empty summary.
pub async fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args)?;

    info!("Starting crime log processor");
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Classify(classify_args)) => {
            classify::run_classify(classify_args).await?;
            Ok(RunSummary::default())
        }
        None => Err(Error::configuration("No command given")),
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crimelog_processor={}", log_level)));

    let initialized = if args.is_quiet() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env)
///
/// Without an explicit file, the user config file is used when it exists.
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    Config::load_layered(config_file)
}
