//! Daily observation series.

use chrono::NaiveDate;

use crate::error::SeriesError;

/// Qualifier code marking an approved observation.
pub const APPROVED: &str = "A";

/// A date-ordered sequence of daily observations.
///
/// Values may be missing (`NaN`). Dates are unique and sorted ascending;
/// both invariants are established at construction. An optional qualifier
/// column carries per-observation approval codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    qualifiers: Option<Vec<String>>,
}

impl Series {
    /// Creates a series from parallel date and value columns, sorting by date.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the columns differ in length
    /// and [`SeriesError::DuplicateDate`] if a date repeats.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, SeriesError> {
        Self::build(dates, values, None)
    }

    /// Creates a series that also carries a qualifier column.
    ///
    /// # Errors
    ///
    /// As [`Series::new`], plus [`SeriesError::QualifierLengthMismatch`].
    pub fn with_qualifiers(
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
        qualifiers: Vec<String>,
    ) -> Result<Self, SeriesError> {
        if qualifiers.len() != values.len() {
            return Err(SeriesError::QualifierLengthMismatch {
                qualifiers: qualifiers.len(),
                values: values.len(),
            });
        }
        Self::build(dates, values, Some(qualifiers))
    }

    fn build(
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
        qualifiers: Option<Vec<String>>,
    ) -> Result<Self, SeriesError> {
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }

        if dates.windows(2).all(|w| w[0] < w[1]) {
            return Ok(Self {
                dates,
                values,
                qualifiers,
            });
        }

        let mut order: Vec<usize> = (0..dates.len()).collect();
        order.sort_by_key(|&i| dates[i]);
        if let Some(w) = order.windows(2).find(|w| dates[w[0]] == dates[w[1]]) {
            return Err(SeriesError::DuplicateDate { date: dates[w[0]] });
        }

        Ok(Self {
            dates: order.iter().map(|&i| dates[i]).collect(),
            values: order.iter().map(|&i| values[i]).collect(),
            qualifiers: qualifiers.map(|q| order.iter().map(|&i| q[i].clone()).collect()),
        })
    }

    /// Returns the dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the values aligned with [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the qualifier column, if present.
    pub fn qualifiers(&self) -> Option<&[String]> {
        self.qualifiers.as_deref()
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over `(date, value)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns the first and last dates, or `None` for an empty series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    /// Returns the value recorded on `date`, if any.
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|i| self.values[i])
    }

    /// Returns a copy with every value passed through `f`; dates and
    /// qualifiers are kept.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            dates: self.dates.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            qualifiers: self.qualifiers.clone(),
        }
    }

    /// Replaces the values, keeping dates and qualifiers.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.values.len());
        Self {
            dates: self.dates.clone(),
            values,
            qualifiers: self.qualifiers.clone(),
        }
    }

    /// Keeps only observations whose qualifier is [`APPROVED`].
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::MissingQualifiers`] when the series has no
    /// qualifier column.
    pub fn filter_approved(&self) -> Result<Self, SeriesError> {
        let qualifiers = self
            .qualifiers
            .as_ref()
            .ok_or(SeriesError::MissingQualifiers)?;
        let keep: Vec<usize> = qualifiers
            .iter()
            .enumerate()
            .filter(|(_, q)| q.as_str() == APPROVED)
            .map(|(i, _)| i)
            .collect();
        Ok(Self {
            dates: keep.iter().map(|&i| self.dates[i]).collect(),
            values: keep.iter().map(|&i| self.values[i]).collect(),
            qualifiers: Some(keep.iter().map(|&i| qualifiers[i].clone()).collect()),
        })
    }
}
