//! # flowstat-series
//!
//! Daily observation series and the day-of-year sampling that every
//! statistic in flowstat is built on.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use flowstat_calendar::{Doy, YearType};
//! use flowstat_series::{LabeledSeries, Series, calculate_metadata, filter_data_by_time};
//!
//! let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
//! let dates: Vec<NaiveDate> = start.iter_days().take(730).collect();
//! let values = vec![1.0; 730];
//! let series = Series::new(dates, values).unwrap();
//!
//! let labeled = LabeledSeries::new(&series, YearType::Calendar);
//! let sample = filter_data_by_time(&labeled, Doy::new(100).unwrap(), 7, 7, true);
//! assert_eq!(sample.len(), 30);
//! assert_eq!(calculate_metadata(&sample).n_years(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | Date-sorted value series with optional qualifiers |
//! | `data_type` | Averaging periods (daily, 7/14/28-day) |
//! | `rolling` | Trailing time-based rolling means |
//! | `labeled` | Year-label and ordinal annotation |
//! | `window` | Day-of-year samples |
//! | `metadata` | Sample counts and date span |
//! | `error` | Error types |

mod data_type;
mod error;
mod labeled;
mod metadata;
mod rolling;
mod series;
mod window;

pub use data_type::DataType;
pub use error::SeriesError;
pub use labeled::{LabeledObservation, LabeledSeries};
pub use metadata::{LOW_VALUE_THRESHOLD, SampleMetadata, calculate_metadata};
pub use rolling::{apply_data_type, rolling_mean};
pub use series::{APPROVED, Series};
pub use window::{Sample, SampleEntry, filter_data_by_day, filter_data_by_time};
