use approx::assert_relative_eq;
use chrono::NaiveDate;
use flowstat_calendar::{Doy, YearType};
use flowstat_series::{
    DataType, LabeledSeries, Series, apply_data_type, filter_data_by_time,
};

fn ramp(start: NaiveDate, n: usize) -> Series {
    let dates: Vec<NaiveDate> = start.iter_days().take(n).collect();
    let values = (0..n).map(|i| i as f64).collect();
    Series::new(dates, values).unwrap()
}

#[test]
fn leap_day_feeds_rolling_mean_but_not_samples() {
    // 2020-02-25 .. 2020-03-02 includes Feb 29
    let series = ramp(NaiveDate::from_ymd_opt(2020, 2, 25).unwrap(), 7);
    let averaged = apply_data_type(&series, DataType::SevenDay);
    // full 7-day window on Mar 2 covers values 0..=6, Feb 29 included
    assert_relative_eq!(averaged.values()[6], 3.0, epsilon = 1e-12);

    let labeled = LabeledSeries::new(&averaged, YearType::Calendar);
    assert_eq!(labeled.len(), 6);
}

#[test]
fn water_year_window_labels_by_water_year() {
    let series = ramp(NaiveDate::from_ymd_opt(2010, 9, 25).unwrap(), 14);
    let labeled = LabeledSeries::new(&series, YearType::Water);
    let oct1 = Doy::from_month_day(10, 1).unwrap();
    let sample = filter_data_by_time(&labeled, oct1, 2, 2, true);
    let years: Vec<i32> = sample.entries().iter().map(|e| e.year()).collect();
    assert_eq!(years, vec![2010, 2010, 2011, 2011, 2011]);
}
