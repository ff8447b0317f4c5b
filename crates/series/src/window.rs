//! Selecting observations by day of year across all years.

use chrono::NaiveDate;
use flowstat_calendar::{Doy, window_mask};

use crate::labeled::LabeledSeries;

/// One observation drawn into a day-of-year sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleEntry {
    date: NaiveDate,
    year: i32,
    value: f64,
}

impl SampleEntry {
    pub fn new(date: NaiveDate, year: i32, value: f64) -> Self {
        Self { date, year, value }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Year label under the year type of the source series.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Observations pooled from one or more days of year, in date order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    entries: Vec<SampleEntry>,
}

impl Sample {
    /// Builds a sample from entries, sorting them by date.
    pub fn new(mut entries: Vec<SampleEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    /// Values in date order, missing values included.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects observations whose calendar ordinal falls within
/// `[target - leading, target + trailing]`, wrapping across the year seam.
///
/// With `drop_missing`, observations with a missing value are left out.
pub fn filter_data_by_time(
    labeled: &LabeledSeries,
    target: Doy,
    leading: u16,
    trailing: u16,
    drop_missing: bool,
) -> Sample {
    let mask = window_mask(target, leading, trailing);
    let entries = labeled
        .observations()
        .iter()
        .filter(|o| mask[o.doy().index()])
        .filter(|o| !(drop_missing && o.value().is_nan()))
        .map(|o| SampleEntry::new(o.date(), o.year(), o.value()))
        .collect();
    Sample { entries }
}

/// Collects every observation on exactly `doy`, missing values included.
pub fn filter_data_by_day(labeled: &LabeledSeries, doy: Doy) -> Sample {
    filter_data_by_time(labeled, doy, 0, 0, false)
}
