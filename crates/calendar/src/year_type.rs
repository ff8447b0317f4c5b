//! Year-numbering conventions.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::doy::{DAYS_PER_CYCLE, Doy};
use crate::error::CalendarError;
use crate::water_year::label_for_month;

/// Year-numbering convention used to label observations and to number the
/// days of each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearType {
    /// January 1 – December 31, labelled by the calendar year.
    #[default]
    Calendar,
    /// October 1 – September 30, labelled by the ending calendar year.
    Water,
    /// April 1 – March 31, labelled by the ending calendar year.
    Climate,
}

impl YearType {
    /// Month (1..=12) on which the cycle starts.
    pub fn start_month(self) -> u8 {
        match self {
            Self::Calendar => 1,
            Self::Water => 10,
            Self::Climate => 4,
        }
    }

    /// Number of no-leap ordinals preceding the cycle start within a
    /// calendar year (0, 273 or 90).
    pub fn offset(self) -> u16 {
        match self {
            Self::Calendar => 0,
            Self::Water => 273,
            Self::Climate => 90,
        }
    }

    /// Returns the year label of `date` under this convention.
    pub fn year_label(self, date: NaiveDate) -> i32 {
        label_for_month(date.year(), date.month() as u8, self.start_month())
    }

    /// Returns the lowercase name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Water => "water",
            Self::Climate => "climate",
        }
    }
}

impl FromStr for YearType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "water" => Ok(Self::Water),
            "climate" => Ok(Self::Climate),
            _ => Err(CalendarError::InvalidYearType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for YearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shifts a calendar ordinal so that day 1 is the first day of the
/// `year_type` cycle, wrapping negative results by +365.
///
/// # Examples
///
/// ```
/// use flowstat_calendar::{Doy, YearType, relative_doy};
///
/// let oct1 = Doy::from_month_day(10, 1).unwrap();
/// assert_eq!(relative_doy(oct1, YearType::Water).get(), 1);
///
/// let jan1 = Doy::new(1).unwrap();
/// assert_eq!(relative_doy(jan1, YearType::Climate).get(), 276);
/// ```
pub fn relative_doy(doy: Doy, year_type: YearType) -> Doy {
    let mut shifted = doy.get() as i32 - year_type.offset() as i32;
    if shifted <= 0 {
        shifted += DAYS_PER_CYCLE as i32;
    }
    Doy::wrapping(shifted)
}

/// Inverse of [`relative_doy`]: maps a cycle-relative ordinal back to the
/// calendar ordinal.
pub fn calendar_doy(relative: Doy, year_type: YearType) -> Doy {
    Doy::wrapping(relative.get() as i32 + year_type.offset() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(month: u8, day: u8) -> Doy {
        Doy::from_month_day(month, day).unwrap()
    }

    #[test]
    fn parse_names() {
        assert_eq!("calendar".parse::<YearType>().unwrap(), YearType::Calendar);
        assert_eq!("water".parse::<YearType>().unwrap(), YearType::Water);
        assert_eq!("Climate".parse::<YearType>().unwrap(), YearType::Climate);
    }

    #[test]
    fn parse_unknown_fails() {
        assert_eq!(
            "fiscal".parse::<YearType>().unwrap_err(),
            CalendarError::InvalidYearType {
                value: "fiscal".to_string()
            }
        );
    }

    #[test]
    fn display_roundtrip() {
        for yt in [YearType::Calendar, YearType::Water, YearType::Climate] {
            assert_eq!(yt.to_string().parse::<YearType>().unwrap(), yt);
        }
    }

    #[test]
    fn relative_calendar_is_identity() {
        for d in 1..=365u16 {
            let doy = Doy::new(d).unwrap();
            assert_eq!(relative_doy(doy, YearType::Calendar), doy);
        }
    }

    #[test]
    fn relative_water() {
        assert_eq!(relative_doy(md(10, 1), YearType::Water).get(), 1);
        assert_eq!(relative_doy(md(9, 30), YearType::Water).get(), 365);
        assert_eq!(relative_doy(md(1, 1), YearType::Water).get(), 93);
        assert_eq!(relative_doy(md(12, 31), YearType::Water).get(), 92);
    }

    #[test]
    fn relative_climate() {
        assert_eq!(relative_doy(md(4, 1), YearType::Climate).get(), 1);
        assert_eq!(relative_doy(md(3, 31), YearType::Climate).get(), 365);
        assert_eq!(relative_doy(md(1, 1), YearType::Climate).get(), 276);
    }

    #[test]
    fn relative_is_bijective() {
        for yt in [YearType::Calendar, YearType::Water, YearType::Climate] {
            let mut seen = [false; 365];
            for d in 1..=365u16 {
                let rel = relative_doy(Doy::new(d).unwrap(), yt);
                assert!(!seen[rel.index()], "{yt}: duplicate relative doy {}", rel.get());
                seen[rel.index()] = true;
                assert_eq!(calendar_doy(rel, yt).get(), d);
            }
        }
    }

    #[test]
    fn year_labels() {
        let sep30 = NaiveDate::from_ymd_opt(2020, 9, 30).unwrap();
        let oct1 = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
        let mar31 = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
        let apr1 = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();

        assert_eq!(YearType::Calendar.year_label(oct1), 2020);
        assert_eq!(YearType::Water.year_label(sep30), 2020);
        assert_eq!(YearType::Water.year_label(oct1), 2021);
        assert_eq!(YearType::Climate.year_label(mar31), 2020);
        assert_eq!(YearType::Climate.year_label(apr1), 2021);
    }
}
