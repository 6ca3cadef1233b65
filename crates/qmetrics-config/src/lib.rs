//! # qmetrics-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `qmetrics.toml` file
//! structures. Values left unset here are filled from the config file and
//! then from the defaults in `qmetrics-settings`.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)
//! * Resolution of paths against the repository root

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use qmetrics_types::OutputFormat;

/// File name looked up under `--root` when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "qmetrics.toml";

/// `qmetrics` aggregates PMD complexity and CK coupling reports into CSV
/// tables and plain-text summaries.
///
/// Default mode (no subcommand) runs both pipelines.
#[derive(Parser, Debug)]
#[command(name = "qmetrics", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Repository root; relative inputs and outputs resolve against it.
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Config file [default: <root>/qmetrics.toml when present].
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the complexity and coupling pipelines (default).
    Run(RunArgs),

    /// Aggregate a PMD report into method and class complexity tables.
    Complexity(CliComplexityArgs),

    /// Rank CK class metrics and compute the coupling factor.
    Coupling(CliCouplingArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Output directory for every artifact [default: metrics/processed].
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Completion output [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliComplexityArgs {
    /// PMD XML report [default: metrics/raw/pmd.xml].
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Output directory [default: metrics/processed].
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// PMD rule to aggregate [default: CyclomaticComplexity].
    #[arg(long, value_name = "NAME")]
    pub rule: Option<String>,

    /// Length of the top lists in the summary [default: 10].
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Completion output [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliCouplingArgs {
    /// CK class metrics CSV [default: metrics/raw/ck_class.csv].
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Output directory [default: metrics/processed].
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Completion output [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Locations shared by both pipelines.
    pub paths: PathsConfig,

    /// Complexity pipeline settings.
    pub complexity: ComplexityConfig,

    /// Coupling pipeline settings.
    pub coupling: CouplingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Output directory for every artifact.
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityConfig {
    /// PMD XML report.
    pub report: Option<String>,

    /// PMD rule to aggregate.
    pub rule: Option<String>,

    /// Marker preceding the package path in report file names.
    pub source_root: Option<String>,

    /// Source file suffix stripped from class names.
    pub source_suffix: Option<String>,

    /// Length of the top lists in the summary.
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplingConfig {
    /// CK class metrics CSV.
    pub table: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
