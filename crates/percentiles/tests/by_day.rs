use chrono::{Datelike, NaiveDate};
use flowstat_calendar::{Doy, YearType};
use flowstat_percentiles::{
    ByDayConfig, ThresholdConfig, calculate_variable_percentile_thresholds_by_day,
    calculate_variable_percentiles_from_values,
};
use flowstat_series::{DataType, Series};

/// Deterministic daily record: seasonal shape plus a per-year offset.
fn synthetic(first_year: i32, last_year: i32) -> Series {
    let start = NaiveDate::from_ymd_opt(first_year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(last_year, 12, 31).unwrap();
    let dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let values = dates
        .iter()
        .map(|d| {
            let season = (f64::from(d.ordinal()) / 365.0 * std::f64::consts::TAU).sin() * 50.0;
            let wobble = f64::from((d.year() * 7 + d.ordinal() as i32 * 13) % 23);
            100.0 + season + wobble
        })
        .collect();
    Series::new(dates, values).unwrap()
}

#[test]
fn gated_rows_are_finite_and_monotone() {
    let series = synthetic(1990, 2004);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &ByDayConfig::new()).unwrap();
    assert_eq!(table.len(), 365);
    for row in table.rows() {
        assert!(row.thresholds().iter().all(|t| t.is_finite()), "{}", row.month_day());
        assert!(row.thresholds().windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn rows_below_gate_are_all_missing() {
    let series = synthetic(1990, 1995);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &ByDayConfig::new()).unwrap();
    assert!(table.rows().iter().all(|r| r.thresholds().iter().all(|t| t.is_nan())));

    let relaxed = ByDayConfig::new().with_min_years(6);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &relaxed).unwrap();
    assert!(table.rows().iter().all(|r| !r.is_missing()));
}

#[test]
fn water_year_rows_start_in_october() {
    let series = synthetic(1990, 2001);
    let config = ByDayConfig::new().with_year_type(YearType::Water);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &config).unwrap();
    let first = &table.rows()[0];
    assert_eq!(first.doy().get(), 1);
    assert_eq!(first.month_day(), "10-01");
    let last = table.rows().last().unwrap();
    assert_eq!(last.month_day(), "09-30");
}

#[test]
fn climate_year_rows_start_in_april() {
    let series = synthetic(1990, 2001);
    let config = ByDayConfig::new().with_year_type(YearType::Climate);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &config).unwrap();
    assert_eq!(table.len(), 365);
    let first = &table.rows()[0];
    assert_eq!(first.doy().get(), 1);
    assert_eq!(first.month_day(), "04-01");
    let last = table.rows().last().unwrap();
    assert_eq!(last.doy().get(), 365);
    assert_eq!(last.month_day(), "03-31");
    let days: Vec<u16> = table.rows().iter().map(|r| r.doy().get()).collect();
    assert_eq!(days, (1..=365).collect::<Vec<u16>>());
}

#[test]
fn partial_water_year_gets_observed_rows_only() {
    let start = NaiveDate::from_ymd_opt(2000, 10, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2001, 3, 31).unwrap();
    let dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let values = vec![1.0; dates.len()];
    let series = Series::new(dates, values).unwrap();
    let config = ByDayConfig::new()
        .with_year_type(YearType::Water)
        .with_min_years(1);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &config).unwrap();
    assert_eq!(table.len(), 182);
    assert!(table.rows().iter().all(|r| !r.is_missing()));
    assert_eq!(table.rows()[0].month_day(), "10-01");
    assert_eq!(table.rows().last().unwrap().month_day(), "03-31");
}

#[test]
fn window_and_smoothing_widen_samples() {
    let series = synthetic(1990, 1999);
    let config = ByDayConfig::new()
        .with_data_type(DataType::SevenDay)
        .with_leading_values(3)
        .with_trailing_values(3)
        .with_thresholds(ThresholdConfig::new().with_percentiles(vec![0.0, 50.0, 100.0]));
    let table = calculate_variable_percentile_thresholds_by_day(&series, &config).unwrap();
    let jan1 = table.row_for_doy(Doy::new(1).unwrap()).unwrap();
    assert!(jan1.thresholds()[0] < jan1.thresholds()[2]);
}

#[test]
fn observations_rank_within_their_day() {
    let series = synthetic(1990, 2004);
    let table = calculate_variable_percentile_thresholds_by_day(&series, &ByDayConfig::new()).unwrap();
    let ranked = calculate_variable_percentiles_from_values(&series, &table).unwrap();
    assert_eq!(ranked.len(), series.len());
    // leap days reuse Feb 28 and still get a rank
    let feb29 = NaiveDate::from_ymd_opt(1996, 2, 29).unwrap();
    assert!(ranked.value_on(feb29).unwrap().is_finite());
    // the observed minimum and maximum of a day sit at its 0th and 100th rank
    for (date, p) in ranked.iter() {
        if date.month() == 2 && date.day() == 29 {
            continue;
        }
        assert!((-1e-9..=100.0 + 1e-9).contains(&p), "{date}: {p}");
    }
}
