//! Year labelling for cycles that start on the first of an arbitrary month.

use crate::error::CalendarError;

/// Computes the year label for a calendar year and month, given the month in
/// which the cycle starts.
///
/// All months from `start_month` onward belong to the cycle that ends in the
/// *next* calendar year, so the label is always the ending year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` or `start_month` is
/// outside 1..=12.
///
/// # Examples
///
/// ```
/// use flowstat_calendar::water_year;
///
/// assert_eq!(water_year(2000, 10, 10).unwrap(), 2001); // Oct 2000 -> WY 2001
/// assert_eq!(water_year(2001, 9, 10).unwrap(), 2001);
/// assert_eq!(water_year(2000, 6, 1).unwrap(), 2000);
/// ```
pub fn water_year(year: i32, month: u8, start_month: u8) -> Result<i32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if !(1..=12).contains(&start_month) {
        return Err(CalendarError::InvalidMonth { month: start_month });
    }
    Ok(label_for_month(year, month, start_month))
}

/// Infallible core of [`water_year`]; both months must already be valid.
pub(crate) fn label_for_month(year: i32, month: u8, start_month: u8) -> i32 {
    if start_month > 1 && month >= start_month {
        year + 1
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_month_1_returns_year() {
        for m in 1..=12 {
            assert_eq!(water_year(2000, m, 1).unwrap(), 2000);
        }
    }

    #[test]
    fn october_start() {
        assert_eq!(water_year(2000, 10, 10).unwrap(), 2001);
        assert_eq!(water_year(2000, 12, 10).unwrap(), 2001);
        assert_eq!(water_year(2001, 1, 10).unwrap(), 2001);
        assert_eq!(water_year(2001, 9, 10).unwrap(), 2001);
    }

    #[test]
    fn april_start() {
        assert_eq!(water_year(2000, 3, 4).unwrap(), 2000);
        assert_eq!(water_year(2000, 4, 4).unwrap(), 2001);
    }

    #[test]
    fn invalid_months() {
        assert_eq!(
            water_year(2000, 0, 10).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            water_year(2000, 6, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn negative_year() {
        assert_eq!(water_year(-1, 10, 10).unwrap(), 0);
    }
}
