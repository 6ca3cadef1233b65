use anyhow::Result;
use qmetrics_config as cli;
use qmetrics_format as format;

use super::{REPORT_ARTIFACT, TABLE_ARTIFACT, complexity, coupling, require_input};
use crate::config::ResolvedConfig;

/// Both pipelines; both inputs are checked before either one starts.
pub(crate) fn handle(args: &cli::RunArgs, resolved: &ResolvedConfig) -> Result<()> {
    let (cc_settings, cp_settings) = resolved.run(args);
    require_input(REPORT_ARTIFACT, &cc_settings.report)?;
    require_input(TABLE_ARTIFACT, &cp_settings.table)?;

    let cc = complexity::execute(&cc_settings)?;
    println!("{}", format::render_complexity_outcome(&cc, cc_settings.format)?);

    let cp = coupling::execute(&cp_settings)?;
    println!("{}", format::render_coupling_outcome(&cp, cp_settings.format)?);
    Ok(())
}
