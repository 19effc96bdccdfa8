// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments (and GITSWITCH_* variables) using clap
// 2. Set up logging to stderr (stdout is reserved for the XML)
// 3. Run the export pipeline
// 4. Write the XML to stdout or to the --output file
// 5. Exit with a code that says what went wrong:
//    0 = success, 1 = configuration, 2 = network, 3 = parse, 4 = output
//
// Rust concepts used:
// - async/await: the HTTP request runs on the tokio runtime
// - anyhow::Result with context: for the application-level errors
// - downcast_ref: recovering our typed ExportError from an anyhow::Error
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - settings for one export run
mod error;     // src/error.rs - error kinds and exit codes
mod export;    // src/export.rs - the fetch -> XML pipeline
mod github;    // src/github/ - GitHub API request and response handling
mod tracker;   // src/tracker/ - PivotalTracker story XML

use anyhow::{Context, Result};
use clap::Parser;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{ExportError, EXIT_CONFIGURATION, EXIT_OUTPUT};
use std::io::Write;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse arguments ourselves so that a bad flag is reported with our
    // configuration exit code; --help and --version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_CONFIGURATION);
        }
    };

    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

// Runs the export and writes the result
//
// The XML is only written once the whole document exists, so a failed run
// never leaves a partial document on stdout or in the output file.
async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from(cli);
    let xml = export::run(&config).await?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", xml))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", xml).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }

    Ok(())
}

// Logs go to stderr. RUST_LOG wins when set; otherwise warnings only,
// or debug output with --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "gitswitch=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// Pipeline errors carry their own exit code; anything else happened while
// writing the output
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ExportError>() {
        Some(export_error) => export_error.exit_code(),
        None => EXIT_OUTPUT,
    }
}
