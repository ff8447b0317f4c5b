//! Day-of-year newtype for the 365-slot no-leap cycle.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Day-of-year in the 365-day no-leap cycle (1..=365).
///
/// February 29 has no ordinal: March 1 is always 60 and December 31 is
/// always 365, so the same ordinal names the same calendar day in every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of ordinals in one cycle.
pub const DAYS_PER_CYCLE: u16 = 365;

/// Number of days in each month (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ordinal on which each month starts (index 0 unused, index 1 = January).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// Creates a new `Doy` from an ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=DAYS_PER_CYCLE).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// month; February 29 is always rejected.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(MONTH_START_DOY[month as usize] + day as u16 - 1))
    }

    /// Returns the no-leap ordinal of a Gregorian date, or `None` for
    /// February 29.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::from_month_day(date.month() as u8, date.day() as u8).ok()
    }

    /// Wraps an arbitrary signed ordinal onto the 1..=365 cycle.
    pub(crate) fn wrapping(ordinal: i32) -> Self {
        let n = DAYS_PER_CYCLE as i32;
        Self(((ordinal - 1).rem_euclid(n) + 1) as u16)
    }

    /// Returns the inner ordinal (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=364).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the `(month, day)` pair for this ordinal.
    pub fn month_day(self) -> (u8, u8) {
        // MONTH_START_DOY is ascending, so the month is the last start <= self.
        let month = MONTH_START_DOY[1..]
            .iter()
            .rposition(|&start| start <= self.0)
            .map_or(1, |i| i + 1);
        let day = self.0 - MONTH_START_DOY[month] + 1;
        (month as u8, day as u8)
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month_day().0
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.month_day().1
    }

    /// Returns the `"MM-DD"` label used to align tables across year types.
    pub fn month_day_label(self) -> String {
        let (m, d) = self.month_day();
        format!("{m:02}-{d:02}")
    }
}
