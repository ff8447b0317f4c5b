//! # flowstat-percentiles
//!
//! Percentile thresholds for daily flow records, either fixed over a whole
//! sample or varying by day of year, and the inverse mapping from a value
//! to its percentile rank.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Series"] -->|"apply_data_type()"| B["smoothed Series"]
//!     B -->|"LabeledSeries::new()"| C["LabeledSeries"]
//!     C -->|"filter_data_by_time() per day"| D["Sample"]
//!     D -->|"calculate_metadata() gate"| E["FixedPercentiles or NaN row"]
//!     E --> F["ThresholdTable"]
//!     F -->|"calculate_variable_percentiles_from_values()"| G["percentile Series"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use flowstat_percentiles::{ByDayConfig, calculate_variable_percentile_thresholds_by_day};
//! use flowstat_series::Series;
//!
//! let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let dates: Vec<NaiveDate> = start.iter_days().take(12 * 366).collect();
//! let values: Vec<f64> = (0..dates.len()).map(|i| (i % 97) as f64).collect();
//! let series = Series::new(dates, values).unwrap();
//!
//! let table = calculate_variable_percentile_thresholds_by_day(&series, &ByDayConfig::new()).unwrap();
//! assert_eq!(table.len(), 365);
//! assert_eq!(table.percentiles().len(), 8);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Threshold and by-day engine settings |
//! | `fixed` | Thresholds of a single sample |
//! | `variable` | Day-of-year threshold engine |
//! | `table` | Threshold table and row lookup |
//! | `inversion` | Value to percentile rank |
//! | `error` | Error types |

mod config;
mod error;
mod fixed;
mod inversion;
mod table;
mod variable;

pub use config::{ByDayConfig, DEFAULT_PERCENTILES, ThresholdConfig};
pub use error::PercentileError;
pub use fixed::{FixedPercentiles, calculate_fixed_percentile_thresholds};
pub use inversion::{
    calculate_percentile_from_value, calculate_percentiles_from_values,
    calculate_variable_percentiles_from_values,
};
pub use table::{ThresholdRow, ThresholdTable};
pub use variable::calculate_variable_percentile_thresholds_by_day;
