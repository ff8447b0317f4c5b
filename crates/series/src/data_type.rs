//! Averaging period applied to daily values before computing statistics.

use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;

/// Trailing averaging period for daily values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Raw daily values.
    #[default]
    Daily,
    /// Trailing 7-day mean.
    SevenDay,
    /// Trailing 14-day mean.
    FourteenDay,
    /// Trailing 28-day mean.
    TwentyEightDay,
}

impl DataType {
    /// Length of the averaging window in days.
    pub fn window_len(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::SevenDay => 7,
            Self::FourteenDay => 14,
            Self::TwentyEightDay => 28,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::SevenDay => "7-day",
            Self::FourteenDay => "14-day",
            Self::TwentyEightDay => "28-day",
        }
    }
}

impl FromStr for DataType {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "7-day" => Ok(Self::SevenDay),
            "14-day" => Ok(Self::FourteenDay),
            "28-day" => Ok(Self::TwentyEightDay),
            _ => Err(SeriesError::UnknownDataType {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
