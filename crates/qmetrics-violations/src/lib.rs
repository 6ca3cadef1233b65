//! # qmetrics-violations
//!
//! **Tier 1 (Extraction)**
//!
//! Turns a PMD XML violation report into one [`MethodViolation`] per method
//! flagged by the complexity rule.
//!
//! ## What belongs here
//! * XML reading (`report`)
//! * The ordered complexity recovery chain (`recovery`)
//! * Line-span and class-name normalization of each record
//!
//! ## What does NOT belong here
//! * Aggregation and ranking (use qmetrics-complexity)
//! * Output writing

mod recovery;
mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use qmetrics_settings::{ExtractSettings, SourceLayout};
use qmetrics_types::MethodViolation;

pub use recovery::{
    DEFAULT_COMPLEXITY, METRIC_ATTRIBUTES, from_last_number, from_metric_attribute, from_phrase,
    recover_complexity,
};
pub use report::{RawViolation, parse_report};

/// Extract complexity records from report XML held in memory.
pub fn extract_violations(xml: &str, settings: &ExtractSettings) -> Result<Vec<MethodViolation>> {
    let raw = parse_report(xml.as_bytes())?;
    Ok(normalize(&raw, settings))
}

/// Read and extract a PMD report from disk.
///
/// The file handle lives only for the duration of the parse.
pub fn read_violations(path: &Path, settings: &ExtractSettings) -> Result<Vec<MethodViolation>> {
    let raw = {
        let file = File::open(path)
            .with_context(|| format!("Failed to open PMD report {}", path.display()))?;
        parse_report(BufReader::new(file))
            .with_context(|| format!("Failed to parse PMD report {}", path.display()))?
    };
    let records = normalize(&raw, settings);
    debug!(
        report = %path.display(),
        violations = raw.len(),
        kept = records.len(),
        rule = %settings.rule,
        "extracted complexity violations"
    );
    Ok(records)
}

/// Keep violations of the configured rule, in document order.
pub fn normalize(raw: &[RawViolation], settings: &ExtractSettings) -> Vec<MethodViolation> {
    raw.iter()
        .filter(|v| v.rule == settings.rule)
        .map(|v| to_method_violation(v, &settings.layout))
        .collect()
}

/// Build one normalized record from a raw violation.
pub fn to_method_violation(violation: &RawViolation, layout: &SourceLayout) -> MethodViolation {
    let begin_line = parse_line(violation.attr("beginline")).unwrap_or(0);
    let end_line = parse_line(violation.attr("endline")).unwrap_or(begin_line);
    MethodViolation {
        class: layout.class_name(&violation.file),
        method: MethodViolation::method_id(begin_line, end_line),
        cc: recover_complexity(violation),
        begin_line,
        end_line,
        file: violation.file.clone(),
        message: violation.text.clone(),
    }
}

fn parse_line(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}
