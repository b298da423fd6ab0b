// File: crates/chart-core/tests/extrema.rs
// Purpose: Range extrema scans and dataset-level combination.

mod common;

use chart_core::dataset::MAX_VALUE;
use chart_core::extrema::combine;
use chart_core::{compute_extrema, ChartError, Dataset, Extrema};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn scan_is_end_exclusive_and_clamped() {
    let v = [3, 1, 4, 1, 5];
    assert_eq!(compute_extrema(&v, 0, 5), Some(Extrema::new(1, 5)));
    assert_eq!(compute_extrema(&v, 0, 4), Some(Extrema::new(1, 4)));
    assert_eq!(compute_extrema(&v, 2, 100), Some(Extrema::new(1, 5)));
    assert_eq!(compute_extrema(&v, 2, 2), None);
    assert_eq!(compute_extrema(&v, 7, 9), None);
}

#[test]
fn combine_of_nothing_is_flat_zero() {
    assert_eq!(combine(Vec::new()), Extrema::EMPTY);
    assert_eq!(combine([Extrema::new(2, 9), Extrema::new(-1, 4)]), Extrema::new(-1, 9));
}

#[test]
fn initial_extrema_skip_the_last_point() {
    let ds = Dataset::new(
        "t",
        common::dates(4),
        vec![common::series("a", &[1, 2, 3, 50])],
    )
    .unwrap();
    assert_eq!(ds.extrema(), Extrema::new(1, 3));
    assert_eq!(ds.full_range_max_y(), 3);
}

#[test]
fn only_selected_series_count() {
    let mut ds = common::only_a();
    assert_eq!(ds.compute_extrema(0, 10), Extrema::new(100, 300));
    let mut both = common::two_series();
    assert_eq!(both.compute_extrema(0, 10), Extrema::new(100, 1000));
    assert_eq!(both.compute_extrema(5, 9), Extrema::new(100, 700));
}

#[test]
fn dataset_validation() {
    let short = Dataset::new("t", common::dates(1), vec![]);
    assert_eq!(short.unwrap_err(), ChartError::TooFewDates(1));

    let mismatch = Dataset::new("t", common::dates(3), vec![common::series("a", &[1, 2])]);
    assert!(matches!(mismatch, Err(ChartError::LengthMismatch { expected: 3, actual: 2, .. })));

    let dup = Dataset::new(
        "t",
        common::dates(2),
        vec![common::series("a", &[1, 2]), common::series("a", &[3, 4])],
    );
    assert_eq!(dup.unwrap_err(), ChartError::DuplicateSeries("a".into()));

    let blank = Dataset::new("t", common::dates(2), vec![common::series("", &[1, 2])]);
    assert_eq!(blank.unwrap_err(), ChartError::EmptySeriesId);
}

#[test]
fn values_outside_the_axis_domain_are_rejected() {
    let huge = i64::MAX / 2 + 10;
    let big = Dataset::new("t", common::dates(3), vec![common::series("a", &[1, huge, 3])]);
    assert_eq!(big.unwrap_err(), ChartError::ValueOutOfRange { id: "a".into(), index: 1, value: huge });

    let negative = Dataset::new("t", common::dates(2), vec![common::series("a", &[-1, 2])]);
    assert!(matches!(negative, Err(ChartError::ValueOutOfRange { index: 0, value: -1, .. })));

    let edge = Dataset::new("t", common::dates(2), vec![common::series("a", &[0, MAX_VALUE])]);
    assert!(edge.is_ok());
}

#[test]
fn largest_values_keep_axis_math_finite() {
    let ds = Dataset::new("t", common::dates(3), vec![common::series("a", &[MAX_VALUE; 3])]).unwrap();
    let state = chart_core::ViewportState::new(ds);
    assert!(state.current().step > 0);
    assert!(state.current().max >= state.current().step);
}

#[test]
fn emptiness() {
    assert!(!common::two_series().is_empty());
    assert!(common::series("a", &[]).is_empty());
    assert!(!common::series("a", &[1]).is_empty());
}

#[test]
fn series_lookup_by_id() {
    let ds = common::two_series();
    assert_eq!(ds.series_index("b"), Some(1));
    assert_eq!(ds.series_index("c"), None);
    assert_eq!(ds.series()[0], common::series("a", &[0; 10]));
}

#[quickcheck]
fn scan_bounds_every_value_in_window(values: Vec<i64>, start: usize, end: usize) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let start = start % values.len();
    let end = start + 1 + end % (values.len() - start);
    let Some(e) = compute_extrema(&values, start, end) else {
        return TestResult::failed();
    };
    let window = &values[start..end];
    TestResult::from_bool(
        e.min <= e.max
            && window.iter().all(|&v| e.min <= v && v <= e.max)
            && window.contains(&e.min)
            && window.contains(&e.max),
    )
}
