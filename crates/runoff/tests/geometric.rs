use approx::assert_relative_eq;
use chrono::NaiveDate;
use flowstat_runoff::{
    Frequency, SiteRunoff, WeightsMatrix, calculate_geometric_runoff, streamflow_to_runoff,
};
use flowstat_series::Series;

fn flows(first_day: u32, values: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2021, 5, first_day).unwrap();
    let dates = start.iter_days().take(values.len()).collect();
    Series::new(dates, values.to_vec()).unwrap()
}

#[test]
fn missing_weight_is_same_as_absent_site() {
    let a = SiteRunoff::new("a", flows(1, &[1.0, 2.0, 3.0]));
    let b = SiteRunoff::new("b", flows(1, &[10.0, 20.0, 30.0]));
    let c = SiteRunoff::new("c", flows(1, &[100.0, 200.0, 300.0]));

    let weights = WeightsMatrix::from_entries([
        ("a", "g", 0.4),
        ("b", "g", 0.6),
        ("c", "g", f64::NAN),
        ("c", "other", 1.0),
    ]);

    let with_c =
        calculate_geometric_runoff("g", &[a.clone(), b.clone(), c], &weights, None, None).unwrap();
    let without_c = calculate_geometric_runoff("g", &[a, b], &weights, None, None).unwrap();
    assert_eq!(with_c, without_c);
    assert_relative_eq!(with_c.values()[0], 6.4, epsilon = 1e-12);
}

#[test]
fn staggered_records_use_union_of_dates() {
    let a = SiteRunoff::new("a", flows(1, &[2.0, 2.0]));
    let b = SiteRunoff::new("b", flows(3, &[8.0, 8.0]));
    let weights = WeightsMatrix::from_entries([("a", "g", 1.0), ("b", "g", 1.0)]);
    let out = calculate_geometric_runoff("g", &[a, b], &weights, None, None).unwrap();
    assert_eq!(out.values(), &[2.0, 2.0, 8.0, 8.0]);
}

#[test]
fn converts_then_combines() {
    let cfs = flows(1, &[14.0]);
    let runoff = streamflow_to_runoff(&cfs, 250.0, Frequency::Annual).unwrap();
    let weights = WeightsMatrix::from_entries([("a", "g", 0.5)]);
    let out = calculate_geometric_runoff("g", &[SiteRunoff::new("a", runoff)], &weights, None, None)
        .unwrap();
    assert_relative_eq!(out.values()[0], 50.0, epsilon = 0.1);
}
