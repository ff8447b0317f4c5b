//! Percentiles command: day-of-year or whole-record percentile thresholds.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use flowstat_percentiles::{
    ByDayConfig, ThresholdTable, calculate_fixed_percentile_thresholds,
    calculate_variable_percentile_thresholds_by_day, calculate_variable_percentiles_from_values,
};
use flowstat_series::{Series, apply_data_type};
use flowstat_stats::exceedance_probabilities;

use crate::cli::PercentilesArgs;
use crate::config::FlowstatConfig;
use crate::convert;
use crate::input::read_series;
use crate::output::{Cell, Table};

/// Run the percentiles command.
pub fn run(args: PercentilesArgs) -> Result<()> {
    let _cmd = info_span!("percentiles").entered();
    // 1. Load config and apply CLI overrides
    let mut config = FlowstatConfig::load(args.common.config.as_deref())?;
    if let Some(yt) = args.year_type {
        config.percentiles.year_type = yt;
    }
    if let Some(dt) = args.data_type {
        config.percentiles.data_type = dt;
    }
    if let Some(m) = args.method {
        config.percentiles.method = m;
    }
    if let Some(n) = args.min_years {
        config.percentiles.min_years = n;
    }
    if args.approved_only {
        config.io.approved_only = true;
    }
    let by_day = convert::build_by_day_config(&config.percentiles)?;
    let format = convert::parse_format(&args.common.format)?;

    // 2. Read observations
    let series = read_series(&args.input, &config.io)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;

    // 3. Compute
    let table = if args.fixed {
        fixed_table(&series, &by_day)?
    } else {
        let thresholds = calculate_variable_percentile_thresholds_by_day(&series, &by_day)
            .context("threshold computation failed")?;
        if args.rank {
            rank_table(&series, &thresholds, &by_day)?
        } else {
            threshold_table(&thresholds)
        }
    };

    // 4. Write
    info!(n_rows = table.len(), "writing percentiles");
    table.write(args.common.output.as_deref(), format)
}

fn rank_header(rank: f64) -> String {
    format!("p{rank}")
}

/// One row per day of year: day, calendar date label, one column per rank.
fn threshold_table(thresholds: &ThresholdTable) -> Table {
    let mut table = Table::new(
        ["day", "month_day"]
            .into_iter()
            .map(String::from)
            .chain(thresholds.percentiles().iter().map(|&p| rank_header(p))),
    );
    for row in thresholds.rows() {
        let mut cells = vec![
            Cell::from(i64::from(row.doy().get())),
            Cell::from(row.month_day()),
        ];
        cells.extend(row.thresholds().iter().map(|&t| Cell::from(t)));
        table.push(cells);
    }
    table
}

/// Thresholds over the whole (smoothed) record, with the exceedance
/// probability of each threshold.
fn fixed_table(series: &Series, config: &ByDayConfig) -> Result<Table> {
    let smoothed = apply_data_type(series, config.data_type());
    let fixed = calculate_fixed_percentile_thresholds(smoothed.values(), config.thresholds())
        .context("threshold computation failed")?;
    let exceedance = exceedance_probabilities(fixed.thresholds(), smoothed.values());

    let mut table = Table::new(["percentile", "threshold", "exceedance"]);
    for ((p, t), e) in fixed.iter().zip(exceedance) {
        table.push(vec![Cell::from(p), Cell::from(t), Cell::from(e)]);
    }
    Ok(table)
}

/// Each observation's percentile against its day-of-year thresholds.
fn rank_table(series: &Series, thresholds: &ThresholdTable, config: &ByDayConfig) -> Result<Table> {
    let smoothed = apply_data_type(series, config.data_type());
    let ranked = calculate_variable_percentiles_from_values(&smoothed, thresholds)
        .context("percentile ranking failed")?;

    let mut table = Table::new(["date", "value", "percentile"]);
    for ((date, value), (_, pct)) in smoothed.iter().zip(ranked.iter()) {
        table.push(vec![
            Cell::from(date.to_string()),
            Cell::from(value),
            Cell::from(pct),
        ]);
    }
    Ok(table)
}
