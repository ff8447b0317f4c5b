//! Cumulative command: running totals within each year.

use anyhow::{Context, Result};
use tracing::info_span;

use flowstat_cumulative::calculate_daily_cumulative_values_by;

use crate::cli::CumulativeArgs;
use crate::config::FlowstatConfig;
use crate::convert;
use crate::input::read_series;
use crate::output::{Cell, Table};

/// Run the cumulative command.
pub fn run(args: CumulativeArgs) -> Result<()> {
    let _cmd = info_span!("cumulative").entered();
    let mut config = FlowstatConfig::load(args.common.config.as_deref())?;
    if let Some(yt) = args.year_type {
        config.cumulative.year_type = yt;
    }
    if let Some(a) = args.accumulation {
        config.cumulative.accumulation = a;
    }
    if args.approved_only {
        config.io.approved_only = true;
    }
    let year_type = convert::parse_year_type(&config.cumulative.year_type)?;
    let accumulation = convert::parse_accumulation(&config.cumulative.accumulation)?;
    let format = convert::parse_format(&args.common.format)?;

    let series = read_series(&args.input, &config.io)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    let cumulative = calculate_daily_cumulative_values_by(&series, year_type, accumulation)?;

    let mut table = Table::new(["year", "day", "date", "cumulative"]);
    for row in cumulative.rows() {
        table.push(vec![
            Cell::from(i64::from(row.year())),
            Cell::from(i64::from(row.day().get())),
            Cell::from(row.date().to_string()),
            Cell::from(row.cumulative()),
        ]);
    }
    table.write(args.common.output.as_deref(), format)
}
