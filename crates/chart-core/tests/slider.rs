// File: crates/chart-core/tests/slider.rs
// Purpose: Slider window clamping, hit-test bands and derived visible ranges.

use chart_core::geometry::RectF;
use chart_core::{DragKind, SliderGeometry, VisibleRange, MIN_SHARE};
use quickcheck_macros::quickcheck;

fn slider() -> SliderGeometry {
    SliderGeometry::new(RectF::from_ltrb(16.0, 100.0, 704.0, 144.0), 10.0, 2.0)
}

fn within_track(s: &SliderGeometry) -> bool {
    let (t, w) = (s.track(), s.window());
    w.left >= t.left - 1e-3 && w.right <= t.right + 1e-3 && w.width() >= s.min_width() - 1e-3
}

#[test]
fn starts_fully_zoomed_out() {
    let s = slider();
    assert_eq!(s.window(), RectF::from_ltrb(16.0, 98.0, 704.0, 146.0));
    assert_eq!(s.width_share(), 1.0);
    assert_eq!(s.left_share(), 0.0);
    assert_eq!(s.visible_range(10), VisibleRange { start: 0, end: 10 });
}

#[test]
fn move_at_full_width_is_a_no_op() {
    let mut s = slider();
    assert!(!s.translate(50.0));
    assert!(!s.translate(-50.0));
}

#[test]
fn resize_is_floored_at_min_share() {
    let mut s = slider();
    assert!(s.resize_left(10_000.0));
    assert!((s.width_share() - MIN_SHARE).abs() < 1e-4);
    assert!(!s.resize_left(1.0));

    let mut s = slider();
    assert!(s.resize_right(-10_000.0));
    assert!((s.window().width() - s.min_width()).abs() < 1e-3);
    assert_eq!(s.window().left, 16.0);
}

#[test]
fn dragging_fully_right_reaches_the_last_index() {
    let mut s = slider();
    s.resize_right(-400.0);
    assert!(s.translate(10_000.0));
    assert_eq!(s.window().right, 704.0);
    let range = s.visible_range(10);
    assert_eq!(range.end, 10);
    assert!(range.start < range.end);
    assert!(!s.translate(1.0));
}

#[test]
fn hit_test_prefers_body_then_left_then_right() {
    let s = slider();
    assert_eq!(s.hit_test(360.0, 120.0), Some(DragKind::Move));
    assert_eq!(s.hit_test(45.0, 120.0), Some(DragKind::Move));
    assert_eq!(s.hit_test(20.0, 120.0), Some(DragKind::ResizeLeft));
    assert_eq!(s.hit_test(0.0, 120.0), Some(DragKind::ResizeLeft));
    assert_eq!(s.hit_test(700.0, 120.0), Some(DragKind::ResizeRight));
    assert_eq!(s.hit_test(360.0, 200.0), None);
    assert_eq!(s.hit_test(-10.0, 120.0), None);
}

#[test]
fn placing_a_range_round_trips_through_visible_range() {
    let s = slider().with_visible_range(VisibleRange { start: 45, end: 80 }, 100);
    let r = s.visible_range(100);
    assert!(r.start.abs_diff(45) <= 1, "{r:?}");
    assert!(r.end.abs_diff(80) <= 1, "{r:?}");
}

#[test]
fn narrow_ranges_are_widened_to_min_share() {
    let s = slider().with_visible_range(VisibleRange { start: 10, end: 12 }, 100);
    assert!((s.window().width() - s.min_width()).abs() < 1e-3);
    assert!(within_track(&s));
}

#[quickcheck]
fn no_drag_sequence_escapes_the_track(ops: Vec<(u8, i16)>) -> bool {
    let mut s = slider();
    for (kind, dx) in ops {
        let kind = match kind % 3 {
            0 => DragKind::Move,
            1 => DragKind::ResizeLeft,
            _ => DragKind::ResizeRight,
        };
        s.drag(kind, dx as f32);
        if !within_track(&s) {
            return false;
        }
        let r = s.visible_range(50);
        if r.start >= r.end || r.end > 50 {
            return false;
        }
    }
    true
}
