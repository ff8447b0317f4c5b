//! Fixed percentile thresholds from a single sample.

use flowstat_stats::percentiles;

use crate::config::ThresholdConfig;
use crate::error::PercentileError;

/// Percentile ranks paired with their threshold values.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPercentiles {
    percentiles: Vec<f64>,
    thresholds: Vec<f64>,
}

impl FixedPercentiles {
    /// Pairs ranks with thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PercentileError::LengthMismatch`] if the lengths differ.
    pub fn new(percentiles: Vec<f64>, thresholds: Vec<f64>) -> Result<Self, PercentileError> {
        if percentiles.len() != thresholds.len() {
            return Err(PercentileError::LengthMismatch {
                percentiles: percentiles.len(),
                thresholds: thresholds.len(),
            });
        }
        Ok(Self {
            percentiles,
            thresholds,
        })
    }

    /// Percentile ranks (0..=100).
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Threshold values aligned with [`percentiles`](Self::percentiles).
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Threshold for an exact rank, if present.
    pub fn threshold_at(&self, percentile: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .position(|&p| p == percentile)
            .map(|i| self.thresholds[i])
    }

    /// Iterates over `(rank, threshold)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.percentiles
            .iter()
            .copied()
            .zip(self.thresholds.iter().copied())
    }

    /// Returns `true` if every threshold is `NaN`.
    pub fn is_empty_row(&self) -> bool {
        self.thresholds.iter().all(|t| t.is_nan())
    }
}

/// Estimates percentile thresholds of `data`.
///
/// # Errors
///
/// Returns [`PercentileError::InvalidConfig`] for bad ranks and
/// [`PercentileError::Stats`] wrapping `EmptySample` when no usable value
/// remains.
///
/// # Example
///
/// ```
/// use flowstat_percentiles::{ThresholdConfig, calculate_fixed_percentile_thresholds};
///
/// let data: Vec<f64> = (0..=100).map(f64::from).collect();
/// let config = ThresholdConfig::new().with_percentiles(vec![0.0, 50.0, 100.0]);
/// let fixed = calculate_fixed_percentile_thresholds(&data, &config).unwrap();
/// assert_eq!(fixed.thresholds(), &[0.0, 50.0, 100.0]);
/// ```
pub fn calculate_fixed_percentile_thresholds(
    data: &[f64],
    config: &ThresholdConfig,
) -> Result<FixedPercentiles, PercentileError> {
    config.validate()?;
    let thresholds = percentiles(
        data,
        config.percentiles(),
        config.method(),
        config.ignore_missing(),
    )?;
    FixedPercentiles::new(config.percentiles().to_vec(), thresholds)
}
