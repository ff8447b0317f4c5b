//! Error types for the flowstat-percentiles crate.

use flowstat_series::SeriesError;
use flowstat_stats::StatsError;

/// Error type for all fallible operations in the flowstat-percentiles crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PercentileError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the by-day engine is given a series with no observations.
    #[error("input series is empty")]
    EmptySeries,

    /// Returned when percentile ranks and thresholds differ in length.
    #[error("length mismatch: {percentiles} percentiles, {thresholds} thresholds")]
    LengthMismatch {
        /// Number of percentile ranks.
        percentiles: usize,
        /// Number of threshold values.
        thresholds: usize,
    },

    /// Statistics error.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Series error.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
