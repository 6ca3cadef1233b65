//! # qmetrics
//!
//! **CLI Binary**
//!
//! This is the entry point for the `qmetrics` command-line application.
//! It resolves settings from flags, `qmetrics.toml` and defaults, then
//! drives the extraction, aggregation and formatting crates.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install the log subscriber
//! * Load configuration and check input preconditions
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;

use qmetrics_config::Cli;

pub use config::ResolvedConfig;

/// Entry point used by the `qmetrics` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global);
    commands::dispatch(cli)
}

/// Render an error chain with troubleshooting hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
