// File: crates/chart-core/tests/axis_step.rs
// Purpose: Nice-number gridline step and compact axis labels.

use chart_core::{readable_label, y_value_step, AxisScale, Extrema};

#[test]
fn step_for_round_ranges() {
    assert_eq!(y_value_step(0, 1000), 200);
    assert_eq!(y_value_step(0, 10_000), 2000);
    assert_eq!(y_value_step(100, 1000), 200);
    assert_eq!(y_value_step(100, 300), 70);
}

#[test]
fn step_scales_with_the_range() {
    let small = y_value_step(0, 1000);
    let large = y_value_step(0, 10_000);
    assert_eq!(large, small * 10);
}

#[test]
fn range_wraps_as_min_plus_max() {
    assert_eq!(y_value_step(10, 240), y_value_step(0, 250));
}

#[test]
fn halfway_mantissa_rounds_to_even() {
    // 250 -> adjusted 45 -> 4.5 at magnitude 10
    assert_eq!(y_value_step(0, 250), 40);
}

#[test]
fn empty_range_has_zero_step() {
    assert_eq!(y_value_step(0, 0), 0);
    assert_eq!(AxisScale::from_extrema(Extrema::EMPTY), AxisScale { step: 0, max: 0 });
}

#[test]
fn axis_max_is_five_steps() {
    assert_eq!(AxisScale::from_step(200).max, 1000);
    assert_eq!(AxisScale::from_extrema(Extrema::new(100, 300)), AxisScale { step: 70, max: 350 });
}

#[test]
fn readable_labels() {
    let cases = [
        (0, "0"),
        (500, "500"),
        (999, "999"),
        (1000, "1K"),
        (1500, "1.5K"),
        (12_000, "12K"),
        (1_000_000, "1M"),
        (2_600_000, "2.6M"),
    ];
    for (value, expected) in cases {
        assert_eq!(readable_label(value), expected, "label for {value}");
    }
}
