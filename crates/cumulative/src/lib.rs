//! # flowstat-cumulative
//!
//! Running totals of daily values. By default totals restart every
//! January 1 while days are numbered in the calendar, water or climate year
//! cycle; [`Accumulation::YearType`] restarts them at each year-type year.

mod accumulation;
mod error;

pub use accumulation::Accumulation;
pub use error::CumulativeError;

use chrono::NaiveDate;
use flowstat_calendar::{Doy, YearType, day_of_year};
use flowstat_series::Series;
use tracing::debug;

/// Running total on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeRow {
    year: i32,
    day: Doy,
    date: NaiveDate,
    cumulative: f64,
}

impl CumulativeRow {
    /// Accumulation period: the calendar year, or the year label under
    /// [`Accumulation::YearType`].
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Day of year counted from the start of the year-type cycle.
    pub fn day(&self) -> Doy {
        self.day
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Total of the period's values up to and including this day, or `NaN`
    /// when this day's value is missing.
    pub fn cumulative(&self) -> f64 {
        self.cumulative
    }
}

/// Cumulative values in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable {
    year_type: YearType,
    accumulation: Accumulation,
    rows: Vec<CumulativeRow>,
}

impl CumulativeTable {
    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    pub fn accumulation(&self) -> Accumulation {
        self.accumulation
    }

    pub fn rows(&self) -> &[CumulativeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct accumulation periods in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// Rows belonging to period `year`.
    pub fn year(&self, year: i32) -> impl Iterator<Item = &CumulativeRow> {
        self.rows.iter().filter(move |r| r.year == year)
    }

    /// Final running total of each year, skipping years whose last row is
    /// missing.
    pub fn year_totals(&self) -> Vec<(i32, f64)> {
        self.years()
            .into_iter()
            .filter_map(|y| {
                let last = self.year(y).last()?;
                (!last.cumulative.is_nan()).then_some((y, last.cumulative))
            })
            .collect()
    }
}

/// Accumulates daily values within each calendar year, numbering days in
/// the `year_type` cycle.
///
/// Equivalent to [`calculate_daily_cumulative_values_by`] with
/// [`Accumulation::CalendarYear`].
///
/// # Errors
///
/// Returns [`CumulativeError::EmptySeries`] if `series` has no observations.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use flowstat_calendar::YearType;
/// use flowstat_cumulative::calculate_daily_cumulative_values;
/// use flowstat_series::Series;
///
/// let start = NaiveDate::from_ymd_opt(2019, 9, 29).unwrap();
/// let dates: Vec<NaiveDate> = start.iter_days().take(4).collect();
/// let series = Series::new(dates, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
///
/// let table = calculate_daily_cumulative_values(&series, YearType::Water).unwrap();
/// let days: Vec<u16> = table.rows().iter().map(|r| r.day().get()).collect();
/// let totals: Vec<f64> = table.rows().iter().map(|r| r.cumulative()).collect();
/// assert_eq!(days, vec![364, 365, 1, 2]);
/// assert_eq!(totals, vec![1.0, 3.0, 6.0, 10.0]);
/// ```
pub fn calculate_daily_cumulative_values(
    series: &Series,
    year_type: YearType,
) -> Result<CumulativeTable, CumulativeError> {
    calculate_daily_cumulative_values_by(series, year_type, Accumulation::CalendarYear)
}

/// Accumulates daily values within each `accumulation` period, numbering
/// days in the `year_type` cycle.
///
/// February 29 gets no row, but its value is carried into the running total
/// of the following days. Missing values add nothing; their own row holds
/// `NaN`.
///
/// # Errors
///
/// Returns [`CumulativeError::EmptySeries`] if `series` has no observations.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use flowstat_calendar::YearType;
/// use flowstat_cumulative::{Accumulation, calculate_daily_cumulative_values_by};
/// use flowstat_series::Series;
///
/// let start = NaiveDate::from_ymd_opt(2019, 9, 29).unwrap();
/// let dates: Vec<NaiveDate> = start.iter_days().take(4).collect();
/// let series = Series::new(dates, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
///
/// let table =
///     calculate_daily_cumulative_values_by(&series, YearType::Water, Accumulation::YearType)
///         .unwrap();
/// let totals: Vec<f64> = table.rows().iter().map(|r| r.cumulative()).collect();
/// assert_eq!(totals, vec![1.0, 3.0, 3.0, 7.0]);
/// assert_eq!(table.years(), vec![2019, 2020]);
/// ```
#[tracing::instrument(skip(series), fields(n_obs = series.len()))]
pub fn calculate_daily_cumulative_values_by(
    series: &Series,
    year_type: YearType,
    accumulation: Accumulation,
) -> Result<CumulativeTable, CumulativeError> {
    if series.is_empty() {
        return Err(CumulativeError::EmptySeries);
    }

    let mut rows = Vec::with_capacity(series.len());
    let mut running: Option<(i32, f64)> = None;
    for (date, value) in series.iter() {
        let year = accumulation.period(date, year_type);
        let total = match running {
            Some((y, total)) if y == year => total,
            _ => 0.0,
        };
        let total = if value.is_nan() { total } else { total + value };
        running = Some((year, total));

        let Some(position) = day_of_year(date, year_type) else {
            debug!(%date, "leap day folded into running total");
            continue;
        };
        rows.push(CumulativeRow {
            year,
            day: position.relative(),
            date,
            cumulative: if value.is_nan() { f64::NAN } else { total },
        });
    }

    Ok(CumulativeTable {
        year_type,
        accumulation,
        rows,
    })
}
