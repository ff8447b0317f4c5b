//! Configuration for percentile threshold estimation.

use flowstat_calendar::YearType;
use flowstat_series::DataType;
use flowstat_stats::QuantileMethod;

use crate::error::PercentileError;

/// Percentile ranks used when none are configured.
pub const DEFAULT_PERCENTILES: [f64; 8] = [0.0, 5.0, 10.0, 25.0, 75.0, 90.0, 95.0, 100.0];

/// Settings for estimating fixed percentile thresholds from one sample.
///
/// # Example
///
/// ```
/// use flowstat_percentiles::ThresholdConfig;
/// use flowstat_stats::QuantileMethod;
///
/// let config = ThresholdConfig::new()
///     .with_percentiles(vec![10.0, 50.0, 90.0])
///     .with_method(QuantileMethod::Hazen);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdConfig {
    percentiles: Vec<f64>,
    method: QuantileMethod,
    ignore_missing: bool,
}

impl ThresholdConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `percentiles = [0, 5, 10, 25, 75, 90, 95, 100]`,
    /// `method = Weibull`, `ignore_missing = true`.
    pub fn new() -> Self {
        Self {
            percentiles: DEFAULT_PERCENTILES.to_vec(),
            method: QuantileMethod::Weibull,
            ignore_missing: true,
        }
    }

    /// Sets the percentile ranks (0..=100, strictly ascending).
    pub fn with_percentiles(mut self, percentiles: Vec<f64>) -> Self {
        self.percentiles = percentiles;
        self
    }

    /// Sets the quantile estimation method.
    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets whether missing values are dropped before estimation.
    pub fn with_ignore_missing(mut self, b: bool) -> Self {
        self.ignore_missing = b;
        self
    }

    /// Returns the percentile ranks.
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Returns the quantile estimation method.
    pub fn method(&self) -> QuantileMethod {
        self.method
    }

    /// Returns whether missing values are dropped before estimation.
    pub fn ignore_missing(&self) -> bool {
        self.ignore_missing
    }

    /// Validates this configuration.
    ///
    /// Checks that at least one rank is given, every rank is finite and
    /// within 0..=100, and ranks are strictly ascending.
    pub fn validate(&self) -> Result<(), PercentileError> {
        if self.percentiles.is_empty() {
            return Err(PercentileError::InvalidConfig {
                reason: "percentiles must not be empty".to_string(),
            });
        }

        if let Some(p) = self
            .percentiles
            .iter()
            .find(|p| !p.is_finite() || !(0.0..=100.0).contains(*p))
        {
            return Err(PercentileError::InvalidConfig {
                reason: format!("percentiles must be finite and in 0..=100, got {p}"),
            });
        }

        if self.percentiles.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PercentileError::InvalidConfig {
                reason: format!(
                    "percentiles must be strictly ascending, got {:?}",
                    self.percentiles
                ),
            });
        }

        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for the day-of-year variable percentile engine.
///
/// # Example
///
/// ```
/// use flowstat_calendar::YearType;
/// use flowstat_percentiles::ByDayConfig;
/// use flowstat_series::DataType;
///
/// let config = ByDayConfig::new()
///     .with_year_type(YearType::Water)
///     .with_data_type(DataType::SevenDay)
///     .with_min_years(5);
/// assert_eq!(config.leading_values(), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ByDayConfig {
    thresholds: ThresholdConfig,
    year_type: YearType,
    data_type: DataType,
    leading_values: u16,
    trailing_values: u16,
    min_years: usize,
    drop_missing: bool,
}

impl ByDayConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: default [`ThresholdConfig`], `year_type = Calendar`,
    /// `data_type = Daily`, `leading_values = 0`, `trailing_values = 0`,
    /// `min_years = 10`, `drop_missing = true`.
    pub fn new() -> Self {
        Self {
            thresholds: ThresholdConfig::new(),
            year_type: YearType::Calendar,
            data_type: DataType::Daily,
            leading_values: 0,
            trailing_values: 0,
            min_years: 10,
            drop_missing: true,
        }
    }

    // --- Builder methods ---

    /// Sets the per-day threshold estimation settings.
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the year convention used to label observations.
    pub fn with_year_type(mut self, year_type: YearType) -> Self {
        self.year_type = year_type;
        self
    }

    /// Sets the averaging period applied before sampling.
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Sets how many days before the target day join its sample.
    pub fn with_leading_values(mut self, n: u16) -> Self {
        self.leading_values = n;
        self
    }

    /// Sets how many days after the target day join its sample.
    pub fn with_trailing_values(mut self, n: u16) -> Self {
        self.trailing_values = n;
        self
    }

    /// Sets the minimum number of years a day needs for thresholds.
    pub fn with_min_years(mut self, n: usize) -> Self {
        self.min_years = n;
        self
    }

    /// Sets whether missing values are dropped while sampling.
    pub fn with_drop_missing(mut self, b: bool) -> Self {
        self.drop_missing = b;
        self
    }

    // --- Accessors ---

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn leading_values(&self) -> u16 {
        self.leading_values
    }

    pub fn trailing_values(&self) -> u16 {
        self.trailing_values
    }

    pub fn min_years(&self) -> usize {
        self.min_years
    }

    pub fn drop_missing(&self) -> bool {
        self.drop_missing
    }

    /// Validates the threshold settings.
    ///
    /// Any `min_years` is accepted; 0 disables the year-count gate, and days
    /// without observed values still get a missing row.
    pub fn validate(&self) -> Result<(), PercentileError> {
        self.thresholds.validate()
    }
}

impl Default for ByDayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults() {
        let cfg = ThresholdConfig::new();
        assert_eq!(cfg.percentiles(), &DEFAULT_PERCENTILES);
        assert_eq!(cfg.method(), QuantileMethod::Weibull);
        assert!(cfg.ignore_missing());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn by_day_defaults() {
        let cfg = ByDayConfig::default();
        assert_eq!(cfg.year_type(), YearType::Calendar);
        assert_eq!(cfg.data_type(), DataType::Daily);
        assert_eq!(cfg.min_years(), 10);
        assert_eq!(cfg.leading_values(), 0);
        assert_eq!(cfg.trailing_values(), 0);
        assert!(cfg.drop_missing());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = ByDayConfig::new()
            .with_thresholds(ThresholdConfig::new().with_ignore_missing(false))
            .with_year_type(YearType::Climate)
            .with_data_type(DataType::FourteenDay)
            .with_leading_values(3)
            .with_trailing_values(4)
            .with_min_years(2)
            .with_drop_missing(false);
        assert!(!cfg.thresholds().ignore_missing());
        assert_eq!(cfg.year_type(), YearType::Climate);
        assert_eq!(cfg.data_type(), DataType::FourteenDay);
        assert_eq!(cfg.leading_values(), 3);
        assert_eq!(cfg.trailing_values(), 4);
        assert_eq!(cfg.min_years(), 2);
        assert!(!cfg.drop_missing());
    }

    #[test]
    fn validate_rank_bounds() {
        for bad in [vec![-1.0], vec![100.5], vec![f64::NAN], vec![]] {
            assert!(
                ThresholdConfig::new()
                    .with_percentiles(bad)
                    .validate()
                    .is_err()
            );
        }
    }

    #[test]
    fn validate_rank_order() {
        assert!(
            ThresholdConfig::new()
                .with_percentiles(vec![50.0, 10.0])
                .validate()
                .is_err()
        );
        assert!(
            ThresholdConfig::new()
                .with_percentiles(vec![10.0, 10.0])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn zero_min_years_is_valid() {
        assert!(ByDayConfig::new().with_min_years(0).validate().is_ok());
    }

    #[test]
    fn by_day_validate_checks_thresholds() {
        let cfg = ByDayConfig::new()
            .with_thresholds(ThresholdConfig::new().with_percentiles(vec![200.0]));
        assert!(matches!(
            cfg.validate(),
            Err(PercentileError::InvalidConfig { .. })
        ));
    }
}
