//! Series annotated with year labels and day-of-year ordinals.

use chrono::NaiveDate;
use flowstat_calendar::{CalendarPosition, Doy, YearType, day_of_year};

use crate::series::Series;

/// One observation placed on its yearly cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledObservation {
    date: NaiveDate,
    position: CalendarPosition,
    value: f64,
}

impl LabeledObservation {
    /// Observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Year label under the series' year type.
    pub fn year(&self) -> i32 {
        self.position.year()
    }

    /// Calendar (January-based) ordinal.
    pub fn doy(&self) -> Doy {
        self.position.doy()
    }

    /// Ordinal counted from the start of the year-type cycle.
    pub fn relative_doy(&self) -> Doy {
        self.position.relative()
    }

    /// Observed value, `NaN` if missing.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A [`Series`] with every observation labelled by year and ordinal.
///
/// February 29 has no ordinal and is left out.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    year_type: YearType,
    observations: Vec<LabeledObservation>,
}

impl LabeledSeries {
    /// Labels `series` under `year_type`.
    pub fn new(series: &Series, year_type: YearType) -> Self {
        let observations = series
            .iter()
            .filter_map(|(date, value)| {
                day_of_year(date, year_type).map(|position| LabeledObservation {
                    date,
                    position,
                    value,
                })
            })
            .collect();
        Self {
            year_type,
            observations,
        }
    }

    /// The year type the labels were computed under.
    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Labelled observations in date order.
    pub fn observations(&self) -> &[LabeledObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Smallest and largest calendar ordinals present, or `None` if empty.
    pub fn doy_range(&self) -> Option<(Doy, Doy)> {
        let min = self.observations.iter().map(|o| o.doy()).min()?;
        let max = self.observations.iter().map(|o| o.doy()).max()?;
        Some((min, max))
    }

    /// Smallest and largest cycle-relative ordinals present, or `None` if
    /// empty.
    pub fn relative_doy_range(&self) -> Option<(Doy, Doy)> {
        let min = self.observations.iter().map(|o| o.relative_doy()).min()?;
        let max = self.observations.iter().map(|o| o.relative_doy()).max()?;
        Some((min, max))
    }
}
