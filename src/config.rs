use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level flowstat configuration. Every section is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FlowstatConfig {
    /// Input column settings.
    #[serde(default)]
    pub io: IoToml,

    /// Percentile threshold settings.
    #[serde(default)]
    pub percentiles: PercentilesToml,

    /// Runoff settings.
    #[serde(default)]
    pub runoff: RunoffToml,

    /// Cumulative flow settings.
    #[serde(default)]
    pub cumulative: CumulativeToml,
}

impl FlowstatConfig {
    /// Reads the TOML file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_value_column")]
    pub value_column: String,
    #[serde(default)]
    pub qualifier_column: Option<String>,
    #[serde(default = "default_site_column")]
    pub site_column: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub approved_only: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            value_column: default_value_column(),
            qualifier_column: None,
            site_column: default_site_column(),
            date_format: default_date_format(),
            approved_only: false,
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_value_column() -> String {
    "value".to_string()
}
fn default_site_column() -> String {
    "site".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PercentilesToml {
    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<f64>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_true")]
    pub ignore_missing: bool,
    #[serde(default = "default_year_type")]
    pub year_type: String,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default)]
    pub leading_values: u16,
    #[serde(default)]
    pub trailing_values: u16,
    #[serde(default = "default_min_years")]
    pub min_years: usize,
    #[serde(default = "default_true")]
    pub drop_missing: bool,
}

impl Default for PercentilesToml {
    fn default() -> Self {
        Self {
            percentiles: default_percentiles(),
            method: default_method(),
            ignore_missing: true,
            year_type: default_year_type(),
            data_type: default_data_type(),
            leading_values: 0,
            trailing_values: 0,
            min_years: default_min_years(),
            drop_missing: true,
        }
    }
}

fn default_percentiles() -> Vec<f64> {
    flowstat_percentiles::DEFAULT_PERCENTILES.to_vec()
}
fn default_method() -> String {
    "weibull".to_string()
}
fn default_year_type() -> String {
    "calendar".to_string()
}
fn default_data_type() -> String {
    "daily".to_string()
}
fn default_min_years() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunoffToml {
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default = "default_site_column")]
    pub weights_site_column: String,
    #[serde(default = "default_geoid_column")]
    pub weights_geoid_column: String,
    #[serde(default = "default_weight_column")]
    pub weights_value_column: String,
}

impl Default for RunoffToml {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            weights_site_column: default_site_column(),
            weights_geoid_column: default_geoid_column(),
            weights_value_column: default_weight_column(),
        }
    }
}

fn default_frequency() -> String {
    "annual".to_string()
}
fn default_geoid_column() -> String {
    "geoid".to_string()
}
fn default_weight_column() -> String {
    "weight".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CumulativeToml {
    #[serde(default = "default_year_type")]
    pub year_type: String,
    #[serde(default = "default_accumulation")]
    pub accumulation: String,
}

impl Default for CumulativeToml {
    fn default() -> Self {
        Self {
            year_type: default_year_type(),
            accumulation: default_accumulation(),
        }
    }
}

fn default_accumulation() -> String {
    "calendar-year".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: FlowstatConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.io.date_column, "date");
        assert_eq!(cfg.percentiles.min_years, 10);
        assert_eq!(cfg.percentiles.percentiles.len(), 8);
        assert_eq!(cfg.runoff.frequency, "annual");
        assert_eq!(cfg.cumulative.year_type, "calendar");
        assert_eq!(cfg.cumulative.accumulation, "calendar-year");
    }

    #[test]
    fn sections_override_defaults() {
        let cfg: FlowstatConfig = toml::from_str(
            r#"
            [io]
            value_column = "flow_cfs"
            qualifier_column = "qualifiers"

            [percentiles]
            percentiles = [10.0, 50.0, 90.0]
            year_type = "water"
            data_type = "7-day"
            leading_values = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.value_column, "flow_cfs");
        assert_eq!(cfg.io.qualifier_column.as_deref(), Some("qualifiers"));
        assert_eq!(cfg.percentiles.percentiles, vec![10.0, 50.0, 90.0]);
        assert_eq!(cfg.percentiles.year_type, "water");
        assert_eq!(cfg.percentiles.leading_values, 3);
        assert_eq!(cfg.percentiles.trailing_values, 0);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<FlowstatConfig>("[percentiles]\nmin_yrs = 3\n").is_err());
    }

    #[test]
    fn load_without_path() {
        let cfg = FlowstatConfig::load(None).unwrap();
        assert_eq!(cfg.io.site_column, "site");
    }
}
