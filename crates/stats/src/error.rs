//! Error types for the flowstat-stats crate.

/// Error type for all fallible operations in the flowstat-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when a quantile is requested from a sample with no usable values.
    #[error("cannot compute percentiles of an empty sample")]
    EmptySample,

    /// Returned when a percentile rank is non-finite or outside 0..=100.
    #[error("invalid percentile: {value} (must be finite and in 0..=100)")]
    InvalidPercentile {
        /// The offending rank.
        value: f64,
    },

    /// Returned when a quantile method name is not recognised.
    #[error("unknown quantile method: {name:?}")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when interpolation abscissae and ordinates differ in length.
    #[error("interpolation table length mismatch: {xp_len} x-values, {fp_len} y-values")]
    LengthMismatch {
        /// Number of x-values.
        xp_len: usize,
        /// Number of y-values.
        fp_len: usize,
    },

    /// Returned when an interpolation table has no points.
    #[error("interpolation table is empty")]
    EmptyTable,

    /// Returned when interpolation abscissae decrease.
    #[error("interpolation x-values must be non-decreasing (violated at index {index})")]
    UnsortedTable {
        /// Index of the first value smaller than its predecessor.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_sample() {
        assert_eq!(
            StatsError::EmptySample.to_string(),
            "cannot compute percentiles of an empty sample"
        );
    }

    #[test]
    fn error_invalid_percentile() {
        let e = StatsError::InvalidPercentile { value: 101.0 };
        assert_eq!(
            e.to_string(),
            "invalid percentile: 101 (must be finite and in 0..=100)"
        );
    }

    #[test]
    fn error_unknown_method() {
        let e = StatsError::UnknownMethod {
            name: "type9".to_string(),
        };
        assert_eq!(e.to_string(), "unknown quantile method: \"type9\"");
    }

    #[test]
    fn error_length_mismatch() {
        let e = StatsError::LengthMismatch {
            xp_len: 3,
            fp_len: 2,
        };
        assert_eq!(
            e.to_string(),
            "interpolation table length mismatch: 3 x-values, 2 y-values"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<StatsError>();
    }
}
