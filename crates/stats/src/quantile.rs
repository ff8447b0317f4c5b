//! Sample quantile rules.
//!
//! The continuous rules follow the Hyndman & Fan family parameterised by
//! plotting-position constants `(alpha, beta)`: for a sorted sample of size
//! `n` and probability `q`, the 0-based virtual index is
//! `n*q + alpha + q*(1 - alpha - beta) - 1`, clipped to `[0, n-1]`, and the
//! result interpolates linearly between the neighbouring order statistics.

use std::fmt;
use std::str::FromStr;

use crate::error::StatsError;

/// Rule used to turn a sorted sample into a quantile estimate.
///
/// Names match the `method` argument of NumPy's `percentile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantileMethod {
    /// `p(k) = k / (n + 1)`; the usual hydrologic plotting position.
    #[default]
    Weibull,
    /// `p(k) = (k - 1) / (n - 1)`; R type 7.
    Linear,
    /// `p(k) = (k - 0.5) / n`.
    Hazen,
    /// `p(k) = (k - 1/3) / (n + 1/3)`.
    MedianUnbiased,
    /// `p(k) = (k - 3/8) / (n + 1/4)`.
    NormalUnbiased,
    /// `p(k) = k / n`.
    InterpolatedInvertedCdf,
    /// Order statistic below the linear virtual index.
    Lower,
    /// Order statistic above the linear virtual index.
    Higher,
    /// Order statistic nearest the linear virtual index (ties to even).
    Nearest,
    /// Mean of [`Lower`](Self::Lower) and [`Higher`](Self::Higher).
    Midpoint,
}

impl QuantileMethod {
    /// Every supported method, in declaration order.
    pub const ALL: [QuantileMethod; 10] = [
        Self::Weibull,
        Self::Linear,
        Self::Hazen,
        Self::MedianUnbiased,
        Self::NormalUnbiased,
        Self::InterpolatedInvertedCdf,
        Self::Lower,
        Self::Higher,
        Self::Nearest,
        Self::Midpoint,
    ];

    /// Returns the name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weibull => "weibull",
            Self::Linear => "linear",
            Self::Hazen => "hazen",
            Self::MedianUnbiased => "median_unbiased",
            Self::NormalUnbiased => "normal_unbiased",
            Self::InterpolatedInvertedCdf => "interpolated_inverted_cdf",
            Self::Lower => "lower",
            Self::Higher => "higher",
            Self::Nearest => "nearest",
            Self::Midpoint => "midpoint",
        }
    }

    /// Plotting-position constants for the continuous rules.
    fn alpha_beta(self) -> Option<(f64, f64)> {
        match self {
            Self::Weibull => Some((0.0, 0.0)),
            Self::Linear => Some((1.0, 1.0)),
            Self::Hazen => Some((0.5, 0.5)),
            Self::MedianUnbiased => Some((1.0 / 3.0, 1.0 / 3.0)),
            Self::NormalUnbiased => Some((3.0 / 8.0, 3.0 / 8.0)),
            Self::InterpolatedInvertedCdf => Some((0.0, 1.0)),
            Self::Lower | Self::Higher | Self::Nearest | Self::Midpoint => None,
        }
    }
}

impl FromStr for QuantileMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| StatsError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantile `q` (0..=1) of pre-sorted, NaN-free data.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile(sorted: &[f64], q: f64, method: QuantileMethod) -> f64 {
    assert!(!sorted.is_empty(), "quantile: input must not be empty");
    let n = sorted.len();
    let last = (n - 1) as f64;

    let Some((alpha, beta)) = method.alpha_beta() else {
        let h = q * last;
        let lo = h.floor();
        let hi = h.ceil();
        return match method {
            QuantileMethod::Lower => sorted[lo as usize],
            QuantileMethod::Higher => sorted[hi as usize],
            QuantileMethod::Nearest => sorted[h.round_ties_even() as usize],
            _ => (sorted[lo as usize] + sorted[hi as usize]) / 2.0,
        };
    };

    let h = (n as f64 * q + alpha + q * (1.0 - alpha - beta) - 1.0).clamp(0.0, last);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile thresholds of `data` for ranks given in percent (0..=100).
///
/// Missing values (`NaN`) are dropped when `ignore_missing` is set;
/// otherwise a single missing value makes every threshold `NaN`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidPercentile`] for a non-finite rank or one
/// outside 0..=100, and [`StatsError::EmptySample`] when no values remain.
pub fn percentiles(
    data: &[f64],
    ranks: &[f64],
    method: QuantileMethod,
    ignore_missing: bool,
) -> Result<Vec<f64>, StatsError> {
    if let Some(&value) = ranks
        .iter()
        .find(|r| !r.is_finite() || !(0.0..=100.0).contains(*r))
    {
        return Err(StatsError::InvalidPercentile { value });
    }

    let has_missing = data.iter().any(|v| v.is_nan());
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if has_missing && !ignore_missing {
        return Ok(vec![f64::NAN; ranks.len()]);
    }
    sorted.sort_by(f64::total_cmp);

    Ok(ranks
        .iter()
        .map(|&r| quantile(&sorted, r / 100.0, method))
        .collect())
}
