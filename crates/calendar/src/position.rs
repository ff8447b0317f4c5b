//! Position of a Gregorian date within a year-type cycle.

use chrono::NaiveDate;

use crate::doy::Doy;
use crate::year_type::{YearType, relative_doy};

/// Where a date falls in its yearly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarPosition {
    year: i32,
    doy: Doy,
    relative: Doy,
}

impl CalendarPosition {
    /// Year label under the year type used to build this position.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Calendar (January-based) no-leap ordinal.
    pub fn doy(self) -> Doy {
        self.doy
    }

    /// Ordinal counted from the first day of the year-type cycle.
    pub fn relative(self) -> Doy {
        self.relative
    }
}

/// Maps a date onto its year-type cycle.
///
/// Returns `None` for February 29, which has no ordinal in the 365-slot
/// scheme.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flowstat_calendar::{YearType, day_of_year};
///
/// let oct1 = NaiveDate::from_ymd_opt(2019, 10, 1).unwrap();
/// let pos = day_of_year(oct1, YearType::Water).unwrap();
/// assert_eq!(pos.year(), 2020);
/// assert_eq!(pos.relative().get(), 1);
/// assert_eq!(pos.doy().get(), 274);
/// ```
pub fn day_of_year(date: NaiveDate, year_type: YearType) -> Option<CalendarPosition> {
    let doy = Doy::from_date(date)?;
    Some(CalendarPosition {
        year: year_type.year_label(date),
        doy,
        relative: relative_doy(doy, year_type),
    })
}
