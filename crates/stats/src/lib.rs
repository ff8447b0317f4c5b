//! Statistical helper functions for flowstat.
//!
//! Everything here works on plain `f64` slices and treats `NaN` as a missing
//! value.

mod error;
mod exceedance;
mod interp;
mod quantile;

pub use error::StatsError;
pub use exceedance::{exceedance_probabilities, exceedance_probability};
pub use interp::interp;
pub use quantile::{QuantileMethod, percentiles, quantile};

/// Mean of the non-missing values. Returns `NaN` if there are none.
pub fn nanmean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
