//! Runoff command: streamflow in cfs to runoff depth.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use flowstat_runoff::streamflow_to_runoff;

use crate::cli::RunoffArgs;
use crate::config::FlowstatConfig;
use crate::convert;
use crate::input::read_series;
use crate::output::{Cell, Table};

/// Run the runoff command.
pub fn run(args: RunoffArgs) -> Result<()> {
    let _cmd = info_span!("runoff").entered();
    let mut config = FlowstatConfig::load(args.common.config.as_deref())?;
    if let Some(f) = args.frequency {
        config.runoff.frequency = f;
    }
    let frequency = convert::parse_frequency(&config.runoff.frequency)?;
    let format = convert::parse_format(&args.common.format)?;

    let flows = read_series(&args.input, &config.io)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    let runoff = streamflow_to_runoff(&flows, args.drainage_area, frequency)?;
    info!(n_obs = runoff.len(), %frequency, "converted to runoff");

    let mut table = Table::new(["date", "runoff_mm"]);
    for (date, mm) in runoff.iter() {
        table.push(vec![Cell::from(date.to_string()), Cell::from(mm)]);
    }
    table.write(args.common.output.as_deref(), format)
}
