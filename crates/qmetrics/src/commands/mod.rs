pub(crate) mod completions;
pub(crate) mod complexity;
pub(crate) mod coupling;
pub(crate) mod run;

use std::path::Path;

use anyhow::Result;
use qmetrics_config as cli;
use qmetrics_types::error::PreconditionError;

use crate::config::ResolvedConfig;

pub(crate) const REPORT_ARTIFACT: &str = "PMD report";
pub(crate) const TABLE_ARTIFACT: &str = "CK class metrics table";

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command.unwrap_or(cli::Commands::Run(cli::RunArgs::default())) {
        cli::Commands::Completions(args) => completions::handle(args),
        cli::Commands::Run(args) => run::handle(&args, &ResolvedConfig::load(global)?),
        cli::Commands::Complexity(args) => {
            complexity::handle(&args, &ResolvedConfig::load(global)?)
        }
        cli::Commands::Coupling(args) => coupling::handle(&args, &ResolvedConfig::load(global)?),
    }
}

/// Fail before any processing when an input artifact is absent.
pub(crate) fn require_input(artifact: &str, path: &Path) -> Result<(), PreconditionError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(PreconditionError::NotAFile {
            artifact: artifact.to_string(),
            path: path.to_path_buf(),
        }),
        Err(_) => Err(PreconditionError::MissingInput {
            artifact: artifact.to_string(),
            path: path.to_path_buf(),
        }),
    }
}
