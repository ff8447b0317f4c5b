use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use flowstat_calendar::YearType;

use crate::error::CumulativeError;

/// Span over which a running total accumulates before restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accumulation {
    /// Restart every January 1. Days are still numbered in the year-type
    /// cycle, so a water-year table of one calendar year runs from day 93.
    #[default]
    CalendarYear,
    /// Restart on the first day of each calendar, water or climate year.
    YearType,
}

impl Accumulation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CalendarYear => "calendar-year",
            Self::YearType => "year-type",
        }
    }

    /// Key of the accumulation period holding `date`.
    pub(crate) fn period(self, date: NaiveDate, year_type: YearType) -> i32 {
        match self {
            Self::CalendarYear => date.year(),
            Self::YearType => year_type.year_label(date),
        }
    }
}

impl FromStr for Accumulation {
    type Err = CumulativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "calendar-year" => Ok(Self::CalendarYear),
            "year-type" => Ok(Self::YearType),
            _ => Err(CumulativeError::UnknownAccumulation {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Accumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
