// File: crates/chart-core/tests/dates.rs
// Purpose: Date label density bands and cross-fading label sets.

mod common;

use chart_core::dates::{date_labels, density_band, label_count};
use chart_core::scale::WindowTransform;
use chart_core::Layout;

#[test]
fn label_counts_per_level() {
    let counts: Vec<usize> = (1..=5).map(label_count).collect();
    assert_eq!(counts, vec![30, 15, 10, 7, 6]);
}

#[test]
fn density_band_boundaries() {
    assert_eq!(density_band(1.0), (5, 1.0));
    assert_eq!(density_band(0.2), (1, 1.0));
    let (level, progress) = density_band(0.3);
    assert_eq!(level, 2);
    assert!((progress - 0.5).abs() < 1e-4);
}

#[test]
fn fully_zoomed_out_shows_six_labels() {
    let track = Layout::default().content_rect();
    let transform = WindowTransform::new(track.left, track.width(), 0.0, 1.0);
    let labels = date_labels(&common::dates(31), track, &transform);

    assert_eq!(labels.len(), 6);
    assert!(labels.iter().all(|l| l.alpha == 255));
    assert_eq!(labels[0].text, "1 Mar");
    assert_eq!(labels[5].text, "31 Mar");
    assert_eq!(labels[0].x, track.left);
}

#[test]
fn mid_band_cross_fades_two_sets() {
    let track = Layout::default().content_rect();
    let transform = WindowTransform::new(track.left, track.width(), 0.0, 0.3);
    let labels = date_labels(&common::dates(31), track, &transform);

    let alphas: Vec<u8> = labels.iter().map(|l| l.alpha).collect();
    assert!(alphas.iter().any(|&a| a > 100 && a < 155), "{alphas:?}");
    assert!(labels.iter().all(|l| l.x >= track.left && l.x <= track.right));
}

#[test]
fn no_dates_no_labels() {
    let track = Layout::default().content_rect();
    let transform = WindowTransform::new(track.left, track.width(), 0.0, 1.0);
    assert!(date_labels(&[], track, &transform).is_empty());
}
