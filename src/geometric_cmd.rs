//! Geometric command: area-weighted runoff for one geography.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use flowstat_runoff::{SiteRunoff, calculate_geometric_runoff};

use crate::cli::GeometricArgs;
use crate::config::FlowstatConfig;
use crate::convert;
use crate::input::{read_site_series, read_weights};
use crate::output::{Cell, Table};

/// Run the geometric runoff command.
pub fn run(args: GeometricArgs) -> Result<()> {
    let _cmd = info_span!("geometric", geoid = %args.geoid).entered();
    let config = FlowstatConfig::load(args.common.config.as_deref())?;
    let format = convert::parse_format(&args.common.format)?;

    let weights = read_weights(&args.weights, &config.runoff)
        .with_context(|| format!("failed to read weights: {}", args.weights.display()))?;

    let mut sites = Vec::new();
    for path in &args.sites {
        let per_site = read_site_series(path, &config.io)
            .with_context(|| format!("failed to read site file: {}", path.display()))?;
        sites.extend(per_site.into_iter().map(|(id, s)| SiteRunoff::new(id, s)));
    }
    info!(n_sites = sites.len(), "site runoff loaded");

    let runoff = calculate_geometric_runoff(&args.geoid, &sites, &weights, args.start, args.end)?;

    let mut table = Table::new(["date", "runoff"]);
    for (date, value) in runoff.iter() {
        table.push(vec![Cell::from(date.to_string()), Cell::from(value)]);
    }
    table.write(args.common.output.as_deref(), format)
}
