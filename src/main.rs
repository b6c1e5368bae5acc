use clap::Parser;
use crimelog_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                let reason = match signal {
                    Ok(()) => "Processing interrupted by user".to_string(),
                    Err(e) => format!("Failed to listen for CTRL+C: {}", e),
                };
                Err(crimelog_processor::Error::processing_interrupted(reason))
            }
        }
    });

    match result {
        Ok(summary) if summary.has_failures() => {
            eprintln!(
                "Error: {} of {} sources failed",
                summary.failed.len(),
                summary.failed.len() + summary.sources.len()
            );
            process::exit(1);
        }
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Crime Log Processor - Campus Crime Log Reconstruction");
    println!("=====================================================");
    println!();
    println!("Rebuild incident records from messy crime log exports: drop repeated");
    println!("page headers, merge rows split across pages and normalize values.");
    println!();
    println!("USAGE:");
    println!("    crimelog-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Reconstruct and normalize crime log CSV files (main command)");
    println!("    classify    Show how the columns of one source would be classified");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean every CSV in a directory into ./cleaned:");
    println!("    crimelog-processor process logs/");
    println!();
    println!("    # Merge several logs into one standard-schema file:");
    println!("    crimelog-processor process logs/ --combine all_logs.csv");
    println!();
    println!("    # Inspect column roles before processing:");
    println!("    crimelog-processor classify logs/march.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    crimelog-processor <COMMAND> --help");
}
