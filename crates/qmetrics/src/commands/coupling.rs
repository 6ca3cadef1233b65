use anyhow::Result;
use qmetrics_config as cli;
use qmetrics_format as format;
use qmetrics_settings::CouplingSettings;
use qmetrics_types::CouplingReceipt;
use tracing::info;

use super::{TABLE_ARTIFACT, require_input};
use crate::config::ResolvedConfig;

pub(crate) fn handle(args: &cli::CliCouplingArgs, resolved: &ResolvedConfig) -> Result<()> {
    let settings = resolved.coupling(args);
    require_input(TABLE_ARTIFACT, &settings.table)?;
    let receipt = execute(&settings)?;
    println!("{}", format::render_coupling_outcome(&receipt, settings.format)?);
    Ok(())
}

/// Read, rank and write; the table is assumed to exist.
pub(crate) fn execute(settings: &CouplingSettings) -> Result<CouplingReceipt> {
    let rows = qmetrics_coupling::read_coupling_table(&settings.table)?;
    let report = qmetrics_coupling::build_coupling_report(rows);
    let outputs = format::write_coupling_artifacts(&report, settings)?;
    info!(
        classes = report.factor.classes,
        sum_cbo = report.factor.sum_cbo,
        coupling_factor = report.factor.value,
        "coupling pipeline finished"
    );
    Ok(format::coupling_receipt(&report, &settings.table, &outputs))
}
