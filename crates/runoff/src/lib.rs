//! # flowstat-runoff
//!
//! Converts streamflow (cubic feet per second) into runoff depth
//! (millimetres per period) and combines gauge sites into area-weighted
//! runoff for a geography.
//!
//! ```
//! use chrono::NaiveDate;
//! use flowstat_runoff::{SiteRunoff, WeightsMatrix, calculate_geometric_runoff};
//! use flowstat_series::Series;
//!
//! let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
//! let a = SiteRunoff::new("a", Series::new(vec![day], vec![2.0]).unwrap());
//! let b = SiteRunoff::new("b", Series::new(vec![day], vec![4.0]).unwrap());
//! let weights = WeightsMatrix::from_entries([("a", "huc8", 1.0), ("b", "huc8", 3.0)]);
//!
//! let out = calculate_geometric_runoff("huc8", &[a, b], &weights, None, None).unwrap();
//! assert_eq!(out.values(), &[3.5]);
//! ```

mod convert;
mod error;
mod geometric;
mod weights;

pub use convert::{Frequency, convert_cfs_to_runoff, streamflow_to_runoff};
pub use error::RunoffError;
pub use geometric::{SiteRunoff, calculate_geometric_runoff};
pub use weights::WeightsMatrix;
