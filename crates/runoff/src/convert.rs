//! Conversion from volumetric streamflow to runoff depth.

use std::fmt;
use std::str::FromStr;

use flowstat_series::Series;

use crate::error::RunoffError;

const SECONDS_PER_DAY: f64 = 86_400.0;
const CUBIC_METRES_PER_CUBIC_FOOT: f64 = 0.3048 * 0.3048 * 0.3048;
const SQUARE_METRES_PER_SQUARE_KM: f64 = 1.0e6;
const MM_PER_M: f64 = 1000.0;

/// Accumulation period of a runoff depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    /// Depth per year (365.25 days).
    #[default]
    Annual,
    /// Depth per month (365.25 / 12 days).
    Monthly,
    /// Depth per day.
    Daily,
}

impl Frequency {
    /// Length of the period in days.
    pub fn days(self) -> f64 {
        match self {
            Self::Annual => 365.25,
            Self::Monthly => 365.25 / 12.0,
            Self::Daily => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
        }
    }
}

impl FromStr for Frequency {
    type Err = RunoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Self::Annual),
            "monthly" => Ok(Self::Monthly),
            "daily" => Ok(Self::Daily),
            _ => Err(RunoffError::InvalidFrequency {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_area(drainage_area_km2: f64) -> Result<(), RunoffError> {
    if !drainage_area_km2.is_finite() || drainage_area_km2 <= 0.0 {
        return Err(RunoffError::InvalidDrainageArea {
            area: drainage_area_km2,
        });
    }
    Ok(())
}

/// Converts a flow in cubic feet per second to a runoff depth in millimetres
/// per `frequency` period over a drainage area in square kilometres.
///
/// A missing flow yields `NaN`.
///
/// # Errors
///
/// Returns [`RunoffError::InvalidDrainageArea`] if the area is not finite and
/// positive.
///
/// # Example
///
/// ```
/// use flowstat_runoff::{Frequency, convert_cfs_to_runoff};
///
/// let mm = convert_cfs_to_runoff(14.0, 250.0, Frequency::Annual).unwrap();
/// assert!((mm - 50.0).abs() < 0.1);
/// ```
pub fn convert_cfs_to_runoff(
    cfs: f64,
    drainage_area_km2: f64,
    frequency: Frequency,
) -> Result<f64, RunoffError> {
    check_area(drainage_area_km2)?;
    Ok(depth_mm(cfs, drainage_area_km2, frequency))
}

fn depth_mm(cfs: f64, drainage_area_km2: f64, frequency: Frequency) -> f64 {
    let volume_m3 = cfs * SECONDS_PER_DAY * frequency.days() * CUBIC_METRES_PER_CUBIC_FOOT;
    volume_m3 / (drainage_area_km2 * SQUARE_METRES_PER_SQUARE_KM) * MM_PER_M
}

/// Converts every value of a streamflow series to runoff depth.
pub fn streamflow_to_runoff(
    series: &Series,
    drainage_area_km2: f64,
    frequency: Frequency,
) -> Result<Series, RunoffError> {
    check_area(drainage_area_km2)?;
    Ok(series.map_values(|cfs| depth_mm(cfs, drainage_area_km2, frequency)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn annual_reference_value() {
        assert_relative_eq!(
            convert_cfs_to_runoff(14.0, 250.0, Frequency::Annual).unwrap(),
            50.0,
            epsilon = 0.1
        );
    }

    #[test]
    fn periods_scale_by_days() {
        let annual = convert_cfs_to_runoff(10.0, 100.0, Frequency::Annual).unwrap();
        let monthly = convert_cfs_to_runoff(10.0, 100.0, Frequency::Monthly).unwrap();
        let daily = convert_cfs_to_runoff(10.0, 100.0, Frequency::Daily).unwrap();
        assert_relative_eq!(annual / monthly, 12.0, epsilon = 1e-9);
        assert_relative_eq!(annual / daily, 365.25, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_area() {
        for area in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                convert_cfs_to_runoff(1.0, area, Frequency::Daily),
                Err(RunoffError::InvalidDrainageArea { .. })
            ));
        }
    }

    #[test]
    fn missing_flow_stays_missing() {
        assert!(
            convert_cfs_to_runoff(f64::NAN, 10.0, Frequency::Daily)
                .unwrap()
                .is_nan()
        );
    }

    #[test]
    fn parse_frequency() {
        assert_eq!("Monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("weekly".parse::<Frequency>().is_err());
        assert_eq!(Frequency::Daily.to_string(), "daily");
    }

    #[test]
    fn series_conversion() {
        let dates = (1..=3)
            .map(|d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap())
            .collect();
        let series = Series::new(dates, vec![14.0, 15.0, 16.0]).unwrap();
        let runoff = streamflow_to_runoff(&series, 250.0, Frequency::Annual).unwrap();
        let expected = [50.0, 53.6, 57.2];
        for (got, want) in runoff.values().iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 0.1);
        }
        assert_eq!(runoff.dates(), series.dates());
    }
}
