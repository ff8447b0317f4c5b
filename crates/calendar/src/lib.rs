//! # flowstat-calendar
//!
//! Date arithmetic for the 365-slot no-leap cycle under calendar, water and
//! climate year conventions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=365)"]
//!     A -->|"day_of_year()"| C["CalendarPosition"]
//!     B -->|"relative_doy()"| D["cycle-relative Doy"]
//!     D -->|"calendar_doy()"| B
//!     B -->|"window_days()"| E["Vec of Doy"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use flowstat_calendar::{Doy, YearType, day_of_year, relative_doy};
//!
//! let yt: YearType = "water".parse().unwrap();
//! let pos = day_of_year(NaiveDate::from_ymd_opt(2000, 10, 1).unwrap(), yt).unwrap();
//! assert_eq!(pos.year(), 2001);
//! assert_eq!(pos.relative().get(), 1);
//!
//! let sep30 = Doy::from_month_day(9, 30).unwrap();
//! assert_eq!(relative_doy(sep30, yt).get(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and month tables |
//! | `year_type` | Calendar / water / climate conventions and ordinal shifting |
//! | `position` | Date → (year label, ordinal) mapping |
//! | `water_year` | Year labelling for an arbitrary start month |
//! | `window` | Leading/trailing day windows |
//! | `error` | Error types |

mod doy;
mod error;
mod position;
mod water_year;
mod window;
mod year_type;

pub use doy::{DAYS_PER_CYCLE, Doy};
pub use error::CalendarError;
pub use position::{CalendarPosition, day_of_year};
pub use water_year::water_year;
pub use window::{window_days, window_mask};
pub use year_type::{YearType, calendar_doy, relative_doy};
