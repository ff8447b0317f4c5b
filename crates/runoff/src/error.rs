//! Error types for the flowstat-runoff crate.

use chrono::NaiveDate;
use flowstat_series::SeriesError;

/// Error type for all fallible operations in the flowstat-runoff crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunoffError {
    /// Returned when a frequency name is not recognised.
    #[error("invalid frequency: {name:?} (expected \"annual\", \"monthly\" or \"daily\")")]
    InvalidFrequency {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a drainage area is not a positive finite number.
    #[error("invalid drainage area: {area} (must be finite and > 0)")]
    InvalidDrainageArea {
        /// The rejected area in square kilometres.
        area: f64,
    },

    /// Returned when geometric runoff is requested without any site.
    #[error("no sites supplied")]
    NoSites,

    /// Returned when the requested start date is after the end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested first date.
        start: NaiveDate,
        /// Requested last date.
        end: NaiveDate,
    },

    /// Returned when the weights matrix holds no weight for a geography.
    #[error("unknown geography: {geoid:?}")]
    UnknownGeography {
        /// The geography identifier.
        geoid: String,
    },

    /// Series error.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
