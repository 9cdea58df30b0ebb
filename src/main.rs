//! webptidy: convert, clean up, and safely delete WebP images in a
//! category-organized image dataset.
//!
//! This is the main entry point for the `webptidy` CLI. It sets up logging,
//! parses arguments, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod scan;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; progress and summaries are printed to stdout.
    // Use RUST_LOG=debug for per-file decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
