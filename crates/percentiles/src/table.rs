//! Day-of-year threshold tables.

use chrono::NaiveDate;
use flowstat_calendar::{Doy, YearType, relative_doy};

use crate::fixed::FixedPercentiles;

/// Thresholds for one day of year.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRow {
    doy: Doy,
    calendar_doy: Doy,
    thresholds: Vec<f64>,
}

impl ThresholdRow {
    pub(crate) fn new(calendar_doy: Doy, year_type: YearType, thresholds: Vec<f64>) -> Self {
        Self {
            doy: relative_doy(calendar_doy, year_type),
            calendar_doy,
            thresholds,
        }
    }

    /// Day of year counted from the start of the year-type cycle.
    pub fn doy(&self) -> Doy {
        self.doy
    }

    /// Calendar (January-based) day of year.
    pub fn calendar_doy(&self) -> Doy {
        self.calendar_doy
    }

    /// `"MM-DD"` label of the row.
    pub fn month_day(&self) -> String {
        self.calendar_doy.month_day_label()
    }

    /// Threshold values, one per table percentile; all `NaN` when the day
    /// did not meet the minimum-years requirement.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns `true` if the row holds no usable threshold.
    pub fn is_missing(&self) -> bool {
        self.thresholds.iter().all(|t| t.is_nan())
    }
}

/// Percentile thresholds for each day of year, ordered by the day's
/// position in the year-type cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    year_type: YearType,
    percentiles: Vec<f64>,
    rows: Vec<ThresholdRow>,
}

impl ThresholdTable {
    /// Builds a table, sorting rows by cycle-relative day of year.
    pub(crate) fn new(year_type: YearType, percentiles: Vec<f64>, mut rows: Vec<ThresholdRow>) -> Self {
        rows.sort_by_key(|r| r.doy);
        Self {
            year_type,
            percentiles,
            rows,
        }
    }

    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Column ranks shared by every row.
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    pub fn rows(&self) -> &[ThresholdRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a calendar day of year.
    pub fn row_for_doy(&self, calendar_doy: Doy) -> Option<&ThresholdRow> {
        let key = relative_doy(calendar_doy, self.year_type);
        self.rows
            .binary_search_by_key(&key, |r| r.doy)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Row that applies to `date`. February 29 uses the February 28 row.
    pub fn row_for_date(&self, date: NaiveDate) -> Option<&ThresholdRow> {
        let doy = Doy::from_date(date).or_else(|| date.pred_opt().and_then(Doy::from_date))?;
        self.row_for_doy(doy)
    }

    /// The row for `calendar_doy` paired with the table percentiles.
    pub fn fixed_for(&self, calendar_doy: Doy) -> Option<FixedPercentiles> {
        self.row_for_doy(calendar_doy)
            .and_then(|row| FixedPercentiles::new(self.percentiles.clone(), row.thresholds.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(year_type: YearType) -> ThresholdTable {
        let rows = [1u16, 59, 274, 365]
            .iter()
            .map(|&d| ThresholdRow::new(Doy::new(d).unwrap(), year_type, vec![f64::from(d)]))
            .collect();
        ThresholdTable::new(year_type, vec![50.0], rows)
    }

    #[test]
    fn rows_sorted_by_relative_doy() {
        let t = table(YearType::Water);
        let order: Vec<u16> = t.rows().iter().map(|r| r.calendar_doy().get()).collect();
        assert_eq!(order, vec![274, 365, 1, 59]);
        assert_eq!(t.rows()[0].doy().get(), 1);
        assert_eq!(t.rows()[0].month_day(), "10-01");
    }

    #[test]
    fn lookup_by_date() {
        let t = table(YearType::Calendar);
        let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(t.row_for_date(jan1).unwrap().thresholds(), &[1.0]);
        let feb29 = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(t.row_for_date(feb29).unwrap().calendar_doy().get(), 59);
        let jan2 = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        assert!(t.row_for_date(jan2).is_none());
    }

    #[test]
    fn fixed_for_pairs_percentiles() {
        let t = table(YearType::Climate);
        let fixed = t.fixed_for(Doy::new(365).unwrap()).unwrap();
        assert_eq!(fixed.percentiles(), &[50.0]);
        assert_eq!(fixed.thresholds(), &[365.0]);
    }

    #[test]
    fn missing_row() {
        let row = ThresholdRow::new(Doy::new(10).unwrap(), YearType::Calendar, vec![f64::NAN; 3]);
        assert!(row.is_missing());
    }
}
