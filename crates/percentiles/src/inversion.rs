//! Percentile of a value given a set of thresholds.

use flowstat_series::Series;
use flowstat_stats::interp;

use crate::error::PercentileError;
use crate::fixed::FixedPercentiles;
use crate::table::ThresholdTable;

/// Percentile rank of `value` against `fixed` thresholds.
///
/// Interpolates linearly between `(threshold, rank)` pairs and extends the
/// first or last segment beyond the table, so results may fall outside
/// 0..=100. When thresholds repeat, the highest rank sharing that threshold
/// is returned. `NaN` in `value` or in any threshold yields `NaN`.
///
/// # Errors
///
/// Returns [`PercentileError::Stats`] if `fixed` is empty or its thresholds
/// decrease.
///
/// # Example
///
/// ```
/// use flowstat_percentiles::{FixedPercentiles, calculate_percentile_from_value};
///
/// let fixed = FixedPercentiles::new(vec![0.0, 50.0, 100.0], vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(calculate_percentile_from_value(2.5, &fixed).unwrap(), 75.0);
/// ```
pub fn calculate_percentile_from_value(
    value: f64,
    fixed: &FixedPercentiles,
) -> Result<f64, PercentileError> {
    Ok(interp(value, fixed.thresholds(), fixed.percentiles())?)
}

/// Applies [`calculate_percentile_from_value`] to each of `values`.
pub fn calculate_percentiles_from_values(
    values: &[f64],
    fixed: &FixedPercentiles,
) -> Result<Vec<f64>, PercentileError> {
    values
        .iter()
        .map(|&v| calculate_percentile_from_value(v, fixed))
        .collect()
}

/// Percentile rank of each observation against the threshold row of its
/// day of year.
///
/// February 29 is ranked with the February 28 row. Observations whose day
/// has no row, or whose row is missing, get `NaN`.
pub fn calculate_variable_percentiles_from_values(
    series: &Series,
    table: &ThresholdTable,
) -> Result<Series, PercentileError> {
    let ranks = table.percentiles();
    let values = series
        .iter()
        .map(|(date, value)| match table.row_for_date(date) {
            Some(row) => Ok(interp(value, row.thresholds(), ranks)?),
            None => Ok(f64::NAN),
        })
        .collect::<Result<Vec<f64>, PercentileError>>()?;
    Ok(Series::new(series.dates().to_vec(), values)?)
}
