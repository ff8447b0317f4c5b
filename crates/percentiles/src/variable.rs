//! Day-of-year variable percentile thresholds.

use std::collections::BTreeMap;

use flowstat_calendar::{Doy, calendar_doy};
use flowstat_series::{
    LabeledSeries, Series, apply_data_type, calculate_metadata, filter_data_by_time,
};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ByDayConfig;
use crate::error::PercentileError;
use crate::fixed::calculate_fixed_percentile_thresholds;
use crate::table::{ThresholdRow, ThresholdTable};

/// Computes percentile thresholds for every observed day of year.
///
/// The series is first smoothed according to the configured data type and
/// labelled under the configured year type. Each day between the earliest
/// and latest observed day of the year-type cycle is then sampled across all
/// years, using the leading/trailing window. A day whose sample spans fewer than
/// `min_years` year labels, or holds no observed value, gets a row of `NaN`.
///
/// Days are independent and computed in parallel.
///
/// # Errors
///
/// Returns [`PercentileError::InvalidConfig`] for a bad configuration and
/// [`PercentileError::EmptySeries`] for an empty series.
#[tracing::instrument(skip_all, fields(n_obs = series.len(), year_type = %config.year_type()))]
pub fn calculate_variable_percentile_thresholds_by_day(
    series: &Series,
    config: &ByDayConfig,
) -> Result<ThresholdTable, PercentileError> {
    config.validate()?;
    if series.is_empty() {
        return Err(PercentileError::EmptySeries);
    }

    let year_type = config.year_type();
    let ranks = config.thresholds().percentiles().to_vec();
    let smoothed = apply_data_type(series, config.data_type());
    let labeled = LabeledSeries::new(&smoothed, year_type);

    // a series of only leap days has no ordinal
    let Some((first, last)) = labeled.relative_doy_range() else {
        return Ok(ThresholdTable::new(year_type, ranks, Vec::new()));
    };
    // observed span in cycle order, sampled by calendar ordinal
    let days: Vec<Doy> = (first.get()..=last.get())
        .filter_map(|d| Doy::new(d).ok())
        .map(|relative| calendar_doy(relative, year_type))
        .collect();

    let by_day: BTreeMap<Doy, Vec<f64>> = days
        .par_iter()
        .map(|&doy| -> Result<(Doy, Vec<f64>), PercentileError> {
            let sample = filter_data_by_time(
                &labeled,
                doy,
                config.leading_values(),
                config.trailing_values(),
                config.drop_missing(),
            );
            let meta = calculate_metadata(&sample);
            if meta.n_years() < config.min_years() || meta.n_data() == 0 {
                debug!(
                    doy = doy.get(),
                    n_years = meta.n_years(),
                    n_data = meta.n_data(),
                    "insufficient record: thresholds left missing"
                );
                return Ok((doy, vec![f64::NAN; ranks.len()]));
            }
            let fixed = calculate_fixed_percentile_thresholds(&sample.values(), config.thresholds())?;
            Ok((doy, fixed.thresholds().to_vec()))
        })
        .collect::<Result<_, PercentileError>>()?;

    let rows: Vec<ThresholdRow> = by_day
        .into_iter()
        .map(|(doy, thresholds)| ThresholdRow::new(doy, year_type, thresholds))
        .collect();
    let n_missing = rows.iter().filter(|r| r.is_missing()).count();
    info!(n_days = rows.len(), n_missing, "variable thresholds computed");

    Ok(ThresholdTable::new(year_type, ranks, rows))
}
