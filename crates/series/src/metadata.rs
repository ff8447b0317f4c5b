//! Descriptive counts for a day-of-year sample.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::window::Sample;

/// Values at or below this are counted as low flow.
pub const LOW_VALUE_THRESHOLD: f64 = 0.01;

/// Record-keeping counts describing a [`Sample`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleMetadata {
    n_years: usize,
    n_data: usize,
    n_gaps: usize,
    n_zeros: usize,
    n_nans: usize,
    n_lows: usize,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl SampleMetadata {
    /// Distinct year labels, missing observations included.
    pub fn n_years(&self) -> usize {
        self.n_years
    }

    /// Observations with a value.
    pub fn n_data(&self) -> usize {
        self.n_data
    }

    /// Years inside the covered span with no observation at all.
    pub fn n_gaps(&self) -> usize {
        self.n_gaps
    }

    pub fn n_zeros(&self) -> usize {
        self.n_zeros
    }

    pub fn n_nans(&self) -> usize {
        self.n_nans
    }

    /// Observations at or below [`LOW_VALUE_THRESHOLD`].
    pub fn n_lows(&self) -> usize {
        self.n_lows
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

/// Computes [`SampleMetadata`] for `sample`.
pub fn calculate_metadata(sample: &Sample) -> SampleMetadata {
    let entries = sample.entries();
    let years: BTreeSet<i32> = entries.iter().map(|e| e.year()).collect();
    let n_gaps = match (years.first(), years.last()) {
        (Some(&first), Some(&last)) => (last - first + 1) as usize - years.len(),
        _ => 0,
    };

    let mut meta = SampleMetadata {
        n_years: years.len(),
        n_gaps,
        start_date: entries.iter().map(|e| e.date()).min(),
        end_date: entries.iter().map(|e| e.date()).max(),
        ..SampleMetadata::default()
    };
    for v in entries.iter().map(|e| e.value()) {
        if v.is_nan() {
            meta.n_nans += 1;
            continue;
        }
        meta.n_data += 1;
        if v == 0.0 {
            meta.n_zeros += 1;
        }
        if v <= LOW_VALUE_THRESHOLD {
            meta.n_lows += 1;
        }
    }
    meta
}
