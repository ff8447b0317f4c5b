//! Trailing time-based rolling means.

use chrono::Days;
use flowstat_stats::nanmean;

use crate::data_type::DataType;
use crate::series::Series;

/// Trailing mean over the `days` calendar days ending at each observation.
///
/// The window for a date `d` covers `(d - days, d]`. It is defined by dates,
/// not by row count, so gaps in the record shorten the window rather than
/// reaching further back. Missing values inside the window are skipped; a
/// window with no observed value yields `NaN`. A `days` of 0 is treated as 1.
pub fn rolling_mean(series: &Series, days: u32) -> Series {
    let days = u64::from(days.max(1));
    if days == 1 {
        return series.clone();
    }

    let dates = series.dates();
    let values = series.values();
    let mut out = Vec::with_capacity(values.len());
    let mut start = 0;
    for (i, &date) in dates.iter().enumerate() {
        // first date still inside the window is date - (days - 1)
        let earliest = date.checked_sub_days(Days::new(days - 1));
        while let Some(earliest) = earliest {
            if dates[start] >= earliest {
                break;
            }
            start += 1;
        }
        out.push(nanmean(&values[start..=i]));
    }
    series.with_values(out)
}

/// Applies the averaging period of `data_type` to `series`.
pub fn apply_data_type(series: &Series, data_type: DataType) -> Series {
    rolling_mean(series, data_type.window_len())
}
