use anyhow::Result;
use qmetrics_config as cli;
use qmetrics_format as format;
use qmetrics_settings::ComplexitySettings;
use qmetrics_types::ComplexityReceipt;
use tracing::info;

use super::{REPORT_ARTIFACT, require_input};
use crate::config::ResolvedConfig;

pub(crate) fn handle(args: &cli::CliComplexityArgs, resolved: &ResolvedConfig) -> Result<()> {
    let settings = resolved.complexity(args);
    require_input(REPORT_ARTIFACT, &settings.report)?;
    let receipt = execute(&settings)?;
    println!("{}", format::render_complexity_outcome(&receipt, settings.format)?);
    Ok(())
}

/// Extract, aggregate and write; inputs are assumed to exist.
pub(crate) fn execute(settings: &ComplexitySettings) -> Result<ComplexityReceipt> {
    let methods = qmetrics_violations::read_violations(&settings.report, &settings.extract)?;
    let report = qmetrics_complexity::build_complexity_report(methods, settings.top);
    let outputs = format::write_complexity_artifacts(&report, settings)?;
    info!(
        methods = report.totals.methods,
        classes = report.totals.classes,
        grand_total = report.totals.grand_total,
        "complexity pipeline finished"
    );
    Ok(format::complexity_receipt(&report, &settings.report, &outputs))
}
