//! # qmetrics-format
//!
//! **Tier 3 (Formatting)**
//!
//! Renders complexity and coupling reports: the CSV tables consumed by the
//! chart renderer, the plain-text summaries, the JSON receipts and the
//! completion lines printed on stdout.
//!
//! ## What belongs here
//! * CSV serialization (column order is a contract)
//! * Summary text rendering
//! * Receipt construction and JSON rendering
//! * Output file writing (atomic replace)
//!
//! ## What does NOT belong here
//! * Business logic (ranking, folding, coupling factor)
//! * CLI arg parsing

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use qmetrics_math::round_f64;
use qmetrics_settings::{ComplexitySettings, CouplingSettings, OutputFormat};
use qmetrics_types::{
    CLASS_COLUMNS, COUPLING_COLUMNS, ClassComplexity, ClassCoupling, ComplexityReceipt,
    ComplexityReport, CouplingReceipt, CouplingReport, METHOD_COLUMNS, MethodViolation, ToolInfo,
};

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

// ---------------
// CSV tables
// ---------------

/// `cc-by-method.csv`: every flagged method in extraction order.
pub fn write_method_csv_to<W: Write>(out: W, methods: &[MethodViolation]) -> Result<()> {
    let mut wtr = csv_writer(out);
    wtr.write_record(METHOD_COLUMNS)?;
    for m in methods {
        wtr.write_record([
            m.class.clone(),
            m.method.clone(),
            m.cc.to_string(),
            m.begin_line.to_string(),
            m.end_line.to_string(),
            m.file.clone(),
            m.message.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `cc-by-class.csv`: ranked classes, `avg_cc` with two decimals.
pub fn write_class_csv_to<W: Write>(out: W, classes: &[ClassComplexity]) -> Result<()> {
    let mut wtr = csv_writer(out);
    wtr.write_record(CLASS_COLUMNS)?;
    for c in classes {
        wtr.write_record([
            c.class.clone(),
            c.total_cc.to_string(),
            format!("{:.2}", c.avg_cc),
            c.max_cc.to_string(),
            c.methods.to_string(),
            c.over_10.to_string(),
            c.over_15.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `p8-class-metrics.csv`: ranked coupling rows.
pub fn write_coupling_csv_to<W: Write>(out: W, rows: &[ClassCoupling]) -> Result<()> {
    let mut wtr = csv_writer(out);
    wtr.write_record(COUPLING_COLUMNS)?;
    for r in rows {
        wtr.write_record([
            r.class.clone(),
            r.wmc.to_string(),
            render_ratio(r.lcom),
            r.cbo.to_string(),
            r.nom.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Shortest round-trip decimal with at least one fractional digit.
pub fn render_ratio(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

// ---------------
// Summaries
// ---------------

pub fn render_complexity_summary(report: &ComplexityReport) -> String {
    let t = &report.totals;
    let mut s = String::new();

    s.push_str(&format!(
        "Grand total cyclomatic complexity (sum of methods): {}\n",
        t.grand_total
    ));
    s.push_str(&format!("Total methods flagged by PMD: {}\n", t.methods));
    s.push_str(&format!("Methods with CC > 10: {}\n", t.over_10));
    s.push_str(&format!("Methods with CC > 15: {}\n\n", t.over_15));

    s.push_str(&format!("Top {} methods by CC:\n", report.top));
    for m in &report.top_methods {
        s.push_str(&format!(
            "  {} :: {}  CC={}  [{}-{}]  {}\n",
            m.class, m.method, m.cc, m.begin_line, m.end_line, m.message
        ));
    }

    s.push_str(&format!("\nTop {} classes by total CC:\n", report.top));
    for c in &report.top_classes {
        s.push_str(&format!(
            "  {}  total={}  avg={:.2}  max={}  methods={}\n",
            c.class, c.total_cc, c.avg_cc, c.max_cc, c.methods
        ));
    }
    s
}

pub fn render_coupling_summary(report: &CouplingReport) -> String {
    let f = &report.factor;
    let n = f.classes as i64;
    let mut s = String::new();
    s.push_str(&format!("Classes analyzed (N): {}\n", f.classes));
    s.push_str(&format!("Sum of CBO across classes: {}\n", f.sum_cbo));
    s.push_str(&format!(
        "Coupling Factor (CF) = Sum(CBO) / (N*(N-1)) = {} / ({}*{}) = {:.4}\n",
        f.sum_cbo,
        n,
        n - 1,
        f.value
    ));
    s
}

// ---------------
// File output
// ---------------

/// Write `path` through a temporary file in the same directory, then rename
/// it into place. Readers never observe a partially written artifact.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write(&mut out).with_context(|| format!("Failed to write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Write the method table, the class table and the summary. Returns the
/// written paths in that order.
pub fn write_complexity_artifacts(
    report: &ComplexityReport,
    settings: &ComplexitySettings,
) -> Result<Vec<PathBuf>> {
    ensure_dir(&settings.out_dir)?;

    let method_table = settings.method_table();
    write_atomic(&method_table, |out| write_method_csv_to(out, &report.methods))?;

    let class_table = settings.class_table();
    write_atomic(&class_table, |out| write_class_csv_to(out, &report.classes))?;

    let summary = settings.summary();
    let text = render_complexity_summary(report);
    write_atomic(&summary, |out| Ok(out.write_all(text.as_bytes())?))?;

    debug!(out_dir = %settings.out_dir.display(), "wrote complexity artifacts");
    Ok(vec![method_table, class_table, summary])
}

/// Write the coupling table and its summary. Returns the written paths.
pub fn write_coupling_artifacts(
    report: &CouplingReport,
    settings: &CouplingSettings,
) -> Result<Vec<PathBuf>> {
    ensure_dir(&settings.out_dir)?;

    let class_table = settings.class_table();
    write_atomic(&class_table, |out| write_coupling_csv_to(out, &report.rows))?;

    let summary = settings.summary();
    let text = render_coupling_summary(report);
    write_atomic(&summary, |out| Ok(out.write_all(text.as_bytes())?))?;

    debug!(out_dir = %settings.out_dir.display(), "wrote coupling artifacts");
    Ok(vec![class_table, summary])
}

// ---------------
// Receipts
// ---------------

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

pub fn complexity_receipt(
    report: &ComplexityReport,
    input: &Path,
    outputs: &[PathBuf],
) -> ComplexityReceipt {
    ComplexityReceipt {
        schema_version: qmetrics_types::SCHEMA_VERSION,
        tool: ToolInfo::current(),
        mode: "complexity".to_string(),
        input: input.display().to_string(),
        outputs: display_paths(outputs),
        totals: report.totals.clone(),
        top_methods: report.top_methods.clone(),
        top_classes: report
            .top_classes
            .iter()
            .map(|c| ClassComplexity {
                avg_cc: round_f64(c.avg_cc, 2),
                ..c.clone()
            })
            .collect(),
    }
}

pub fn coupling_receipt(
    report: &CouplingReport,
    input: &Path,
    outputs: &[PathBuf],
) -> CouplingReceipt {
    CouplingReceipt {
        schema_version: qmetrics_types::SCHEMA_VERSION,
        tool: ToolInfo::current(),
        mode: "coupling".to_string(),
        input: input.display().to_string(),
        outputs: display_paths(outputs),
        factor: report.factor,
    }
}

fn wrote_line(outputs: &[String]) -> String {
    format!("Wrote {}", outputs.join(", "))
}

fn render_json<T: Serialize>(receipt: &T) -> Result<String> {
    serde_json::to_string(receipt).context("Failed to serialize receipt")
}

/// Stdout text for a finished complexity pipeline, without trailing newline.
pub fn render_complexity_outcome(
    receipt: &ComplexityReceipt,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let t = &receipt.totals;
            Ok(format!(
                "[ok] methods={} classes={} grand_total={}\n{}",
                t.methods,
                t.classes,
                t.grand_total,
                wrote_line(&receipt.outputs)
            ))
        }
        OutputFormat::Json => render_json(receipt),
    }
}

/// Stdout text for a finished coupling pipeline, without trailing newline.
pub fn render_coupling_outcome(receipt: &CouplingReceipt, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let f = &receipt.factor;
            Ok(format!(
                "[ok] classes={} sum_cbo={} coupling_factor={:.4}\n{}",
                f.classes,
                f.sum_cbo,
                f.value,
                wrote_line(&receipt.outputs)
            ))
        }
        OutputFormat::Json => render_json(receipt),
    }
}
