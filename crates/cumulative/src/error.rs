//! Error types for the flowstat-cumulative crate.

/// Error type for all fallible operations in the flowstat-cumulative crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CumulativeError {
    /// Returned when the input series has no observations.
    #[error("input series is empty")]
    EmptySeries,

    /// Returned when an accumulation name is not recognised.
    #[error("unknown accumulation {name:?} (expected \"calendar-year\" or \"year-type\")")]
    UnknownAccumulation { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_series() {
        assert_eq!(CumulativeError::EmptySeries.to_string(), "input series is empty");
    }

    #[test]
    fn error_unknown_accumulation() {
        let e = CumulativeError::UnknownAccumulation {
            name: "weekly".to_string(),
        };
        assert!(e.to_string().contains("\"weekly\""));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CumulativeError>();
    }
}
