//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use flowstat_calendar::YearType;
use flowstat_cumulative::Accumulation;
use flowstat_percentiles::{ByDayConfig, ThresholdConfig};
use flowstat_runoff::Frequency;
use flowstat_series::DataType;
use flowstat_stats::QuantileMethod;

use crate::config::PercentilesToml;
use crate::output::OutputFormat;

/// Parses a year-type name (calendar, water, climate).
pub fn parse_year_type(s: &str) -> Result<YearType> {
    Ok(s.parse::<YearType>()?)
}

/// Parses a data-type name (daily, 7-day, 14-day, 28-day).
pub fn parse_data_type(s: &str) -> Result<DataType> {
    Ok(s.parse::<DataType>()?)
}

/// Parses a quantile method name.
pub fn parse_method(s: &str) -> Result<QuantileMethod> {
    Ok(s.parse::<QuantileMethod>()?)
}

/// Parses a cumulative restart period (calendar-year, year-type).
pub fn parse_accumulation(s: &str) -> Result<Accumulation> {
    Ok(s.parse::<Accumulation>()?)
}

/// Parses a runoff period name (annual, monthly, daily).
pub fn parse_frequency(s: &str) -> Result<Frequency> {
    Ok(s.parse::<Frequency>()?)
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?} (expected \"csv\" or \"json\")"),
    }
}

/// Builds a validated [`ThresholdConfig`] from the TOML percentile section.
pub fn build_threshold_config(p: &PercentilesToml) -> Result<ThresholdConfig> {
    let cfg = ThresholdConfig::new()
        .with_percentiles(p.percentiles.clone())
        .with_method(parse_method(&p.method)?)
        .with_ignore_missing(p.ignore_missing);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a validated [`ByDayConfig`] from the TOML percentile section.
pub fn build_by_day_config(p: &PercentilesToml) -> Result<ByDayConfig> {
    let cfg = ByDayConfig::new()
        .with_thresholds(build_threshold_config(p)?)
        .with_year_type(parse_year_type(&p.year_type)?)
        .with_data_type(parse_data_type(&p.data_type)?)
        .with_leading_values(p.leading_values)
        .with_trailing_values(p.trailing_values)
        .with_min_years(p.min_years)
        .with_drop_missing(p.drop_missing);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build() {
        let cfg = build_by_day_config(&PercentilesToml::default()).unwrap();
        assert_eq!(cfg.year_type(), YearType::Calendar);
        assert_eq!(cfg.data_type(), DataType::Daily);
        assert_eq!(cfg.thresholds().method(), QuantileMethod::Weibull);
        assert_eq!(cfg.min_years(), 10);
    }

    #[test]
    fn names_are_parsed() {
        let p = PercentilesToml {
            method: "hazen".to_string(),
            year_type: "climate".to_string(),
            data_type: "28-day".to_string(),
            ..PercentilesToml::default()
        };
        let cfg = build_by_day_config(&p).unwrap();
        assert_eq!(cfg.thresholds().method(), QuantileMethod::Hazen);
        assert_eq!(cfg.year_type(), YearType::Climate);
        assert_eq!(cfg.data_type(), DataType::TwentyEightDay);
    }

    #[test]
    fn bad_values_rejected() {
        let bad_year = PercentilesToml {
            year_type: "fiscal".to_string(),
            ..PercentilesToml::default()
        };
        assert!(build_by_day_config(&bad_year).is_err());

        let bad_ranks = PercentilesToml {
            percentiles: vec![90.0, 10.0],
            ..PercentilesToml::default()
        };
        assert!(build_threshold_config(&bad_ranks).is_err());
    }

    #[test]
    fn zero_min_years_disables_gate() {
        let p = PercentilesToml {
            min_years: 0,
            ..PercentilesToml::default()
        };
        assert_eq!(build_by_day_config(&p).unwrap().min_years(), 0);
    }

    #[test]
    fn formats() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
        assert_eq!(parse_frequency("monthly").unwrap(), Frequency::Monthly);
        assert_eq!(parse_accumulation("year-type").unwrap(), Accumulation::YearType);
        assert!(parse_accumulation("weekly").is_err());
    }
}
