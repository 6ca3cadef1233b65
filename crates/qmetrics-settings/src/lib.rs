//! # qmetrics-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the extraction, aggregation and writing
//! layers. The CLI and the TOML config file both resolve into these, so
//! library consumers never need Clap.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values (input locations, artifact names, rule, source layout)
//!
//! ## What does NOT belong here
//! * Clap parsing (use qmetrics-config)
//! * I/O operations
//! * Business logic

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use qmetrics_types::OutputFormat;

/// PMD rule whose violations carry cyclomatic complexity.
pub const DEFAULT_RULE: &str = "CyclomaticComplexity";

/// Length of the "top methods" and "top classes" summary lists.
pub const DEFAULT_TOP: usize = 10;

pub const DEFAULT_REPORT: &str = "metrics/raw/pmd.xml";
pub const DEFAULT_TABLE: &str = "metrics/raw/ck_class.csv";
pub const DEFAULT_OUT_DIR: &str = "metrics/processed";

pub const METHOD_TABLE_FILE: &str = "cc-by-method.csv";
pub const CLASS_TABLE_FILE: &str = "cc-by-class.csv";
pub const COMPLEXITY_SUMMARY_FILE: &str = "cc-summary.txt";
pub const COUPLING_TABLE_FILE: &str = "p8-class-metrics.csv";
pub const COUPLING_SUMMARY_FILE: &str = "p8-summary.txt";

/// Where sources live inside the analyzed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    /// Marker preceding the package path, e.g. `/src/main/java/`.
    pub source_root: String,
    /// Source file suffix stripped from the class name.
    pub suffix: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            source_root: qmetrics_path::DEFAULT_SOURCE_ROOT.to_string(),
            suffix: qmetrics_path::DEFAULT_SOURCE_SUFFIX.to_string(),
        }
    }
}

impl SourceLayout {
    /// Dotted class identifier for a report file path.
    #[must_use]
    pub fn class_name(&self, path: &str) -> String {
        qmetrics_path::class_name_for(path, &self.source_root, &self.suffix)
    }
}

/// What the violation extractor keeps and how it names classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractSettings {
    /// Rule identifier to keep; every other rule is skipped.
    #[serde(default = "default_rule")]
    pub rule: String,

    #[serde(default)]
    pub layout: SourceLayout,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            rule: default_rule(),
            layout: SourceLayout::default(),
        }
    }
}

fn default_rule() -> String {
    DEFAULT_RULE.to_string()
}

/// Settings for the complexity pipeline (`qmetrics complexity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexitySettings {
    /// PMD XML report to read.
    pub report: PathBuf,

    /// Directory receiving the tables and the summary.
    pub out_dir: PathBuf,

    #[serde(flatten)]
    pub extract: ExtractSettings,

    /// Length of the top lists in the summary.
    pub top: usize,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ComplexitySettings {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            extract: ExtractSettings::default(),
            top: DEFAULT_TOP,
            format: OutputFormat::Text,
        }
    }
}

impl ComplexitySettings {
    pub fn method_table(&self) -> PathBuf {
        self.out_dir.join(METHOD_TABLE_FILE)
    }

    pub fn class_table(&self) -> PathBuf {
        self.out_dir.join(CLASS_TABLE_FILE)
    }

    pub fn summary(&self) -> PathBuf {
        self.out_dir.join(COMPLEXITY_SUMMARY_FILE)
    }
}

/// Settings for the coupling pipeline (`qmetrics coupling`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouplingSettings {
    /// CK class metrics CSV to read.
    pub table: PathBuf,

    /// Directory receiving the table and the summary.
    pub out_dir: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for CouplingSettings {
    fn default() -> Self {
        Self {
            table: PathBuf::from(DEFAULT_TABLE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: OutputFormat::Text,
        }
    }
}

impl CouplingSettings {
    pub fn class_table(&self) -> PathBuf {
        self.out_dir.join(COUPLING_TABLE_FILE)
    }

    pub fn summary(&self) -> PathBuf {
        self.out_dir.join(COUPLING_SUMMARY_FILE)
    }
}
