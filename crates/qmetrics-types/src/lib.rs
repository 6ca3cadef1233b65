//! # qmetrics-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `qmetrics`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! The CSV column names emitted by `qmetrics-format` and the JSON receipt
//! shape are the public contract. Column constants live here so every writer
//! and the external chart renderer agree on them.
//!
//! ## What belongs here
//! * Pure data structs (records, aggregates, reports, receipts)
//! * Serialization/Deserialization logic
//! * The precondition error taxonomy
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Aggregation logic

pub mod error;

use serde::{Deserialize, Serialize};

pub use error::PreconditionError;

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Methods with a complexity strictly above this value count as "over 10".
pub const CC_THRESHOLD_HIGH: u32 = 10;

/// Methods with a complexity strictly above this value count as "over 15".
pub const CC_THRESHOLD_SEVERE: u32 = 15;

/// Column order of the method-level complexity table.
pub const METHOD_COLUMNS: [&str; 7] = [
    "class",
    "method",
    "cc",
    "beginline",
    "endline",
    "file",
    "message",
];

/// Column order of the class-level complexity table.
pub const CLASS_COLUMNS: [&str; 7] = [
    "class",
    "total_cc",
    "avg_cc",
    "max_cc",
    "methods",
    "count_over_10",
    "count_over_15",
];

/// Column order of the class-level coupling table.
pub const COUPLING_COLUMNS: [&str; 5] = ["class", "wmc", "lcom*", "cbo", "nom"];

/// One method flagged by the complexity rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodViolation {
    /// Dotted class identifier derived from the file path.
    pub class: String,
    /// Synthesized `method@<begin>-<end>` identifier.
    pub method: String,
    /// Cyclomatic complexity, always `>= 1`.
    pub cc: u32,
    pub begin_line: u64,
    pub end_line: u64,
    /// File path exactly as the report states it.
    pub file: String,
    pub message: String,
}

impl MethodViolation {
    /// Build the synthetic method identifier for a line span.
    #[must_use]
    pub fn method_id(begin_line: u64, end_line: u64) -> String {
        format!("method@{begin_line}-{end_line}")
    }
}

/// Per-class roll-up of method complexities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassComplexity {
    pub class: String,
    pub total_cc: u64,
    pub avg_cc: f64,
    pub max_cc: u32,
    pub methods: usize,
    pub over_10: usize,
    pub over_15: usize,
}

/// Headline numbers of a complexity run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplexityTotals {
    pub methods: usize,
    pub classes: usize,
    pub grand_total: u64,
    pub over_10: usize,
    pub over_15: usize,
}

/// Everything the complexity writers render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplexityReport {
    /// Every flagged method in extraction order.
    pub methods: Vec<MethodViolation>,
    /// Classes ranked by total complexity descending, then name ascending.
    pub classes: Vec<ClassComplexity>,
    pub totals: ComplexityTotals,
    pub top_methods: Vec<MethodViolation>,
    pub top_classes: Vec<ClassComplexity>,
    /// Requested length of the top lists.
    pub top: usize,
}

/// One class row from the coupling/cohesion table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassCoupling {
    pub class: String,
    pub wmc: u64,
    pub lcom: f64,
    pub cbo: u64,
    pub nom: u64,
}

/// System-wide coupling factor together with its operands.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CouplingFactor {
    pub classes: usize,
    pub sum_cbo: u64,
    pub value: f64,
}

/// Everything the coupling writers render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CouplingReport {
    /// Rows in ranked order.
    pub rows: Vec<ClassCoupling>,
    pub factor: CouplingFactor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "qmetrics".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// JSON receipt for `qmetrics complexity --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReceipt {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub mode: String,
    pub input: String,
    pub outputs: Vec<String>,
    pub totals: ComplexityTotals,
    pub top_methods: Vec<MethodViolation>,
    pub top_classes: Vec<ClassComplexity>,
}

/// JSON receipt for `qmetrics coupling --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingReceipt {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub mode: String,
    pub input: String,
    pub outputs: Vec<String>,
    pub factor: CouplingFactor,
}

/// How a command reports completion on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `[ok] ...` line plus the list of written artifacts.
    #[default]
    Text,
    /// A JSON receipt per pipeline (JSON Lines when both run).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_id_uses_line_span() {
        assert_eq!(MethodViolation::method_id(12, 40), "method@12-40");
        assert_eq!(MethodViolation::method_id(0, 0), "method@0-0");
    }

    #[test]
    fn output_format_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            "\"json\""
        );
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn column_contracts_are_stable() {
        assert_eq!(METHOD_COLUMNS[2], "cc");
        assert_eq!(CLASS_COLUMNS[1], "total_cc");
        assert_eq!(COUPLING_COLUMNS[2], "lcom*");
    }

    #[test]
    fn tool_info_names_binary() {
        let info = ToolInfo::current();
        assert_eq!(info.name, "qmetrics");
        assert!(!info.version.is_empty());
    }
}
