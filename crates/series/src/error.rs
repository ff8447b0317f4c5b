//! Error types for the flowstat-series crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the flowstat-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the date and value columns differ in length.
    #[error("length mismatch: {dates} dates, {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// Returned when the qualifier column differs in length from the values.
    #[error("length mismatch: {qualifiers} qualifiers, {values} values")]
    QualifierLengthMismatch {
        /// Number of qualifiers.
        qualifiers: usize,
        /// Number of values.
        values: usize,
    },

    /// Returned when the same date appears twice in one series.
    #[error("duplicate date in series: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Returned when approval filtering is requested on a series without a
    /// qualifier column.
    #[error("series has no qualifier column to filter on")]
    MissingQualifiers,

    /// Returned when a data-type name is not recognised.
    #[error("unknown data type: {name:?} (expected \"daily\", \"7-day\", \"14-day\" or \"28-day\")")]
    UnknownDataType {
        /// The unrecognised name.
        name: String,
    },
}
