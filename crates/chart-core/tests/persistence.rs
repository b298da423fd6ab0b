// File: crates/chart-core/tests/persistence.rs
// Purpose: Snapshot/restore of a viewport session.

mod common;

use chart_core::{AnimationMode, AxisScale, ChartError, ViewportState, VisibleRange};
use common::{ms, run_out};

#[test]
fn restore_round_trips_an_idle_session() {
    let mut state = ViewportState::new(common::two_series());
    state.set_visible_range(VisibleRange { start: 5, end: 9 });
    run_out(&mut state);
    state.toggle_series(0, false).unwrap();
    run_out(&mut state);

    let snap = state.snapshot();
    assert_eq!((snap.visible_start, snap.visible_end), (5, 9));
    let restored = ViewportState::restore(snap).unwrap();

    assert_eq!(restored.current(), state.current());
    assert_eq!(restored.visible_range(), state.visible_range());
    assert_eq!(restored.dataset().extrema(), state.dataset().extrema());
    assert!(!restored.dataset().series()[0].is_selected());
    assert_eq!(restored.mode(), AnimationMode::Idle);
}

#[test]
fn snapshot_mid_tween_restores_idle_at_the_committed_scale() {
    let mut state = ViewportState::new(common::two_series());
    state.toggle_series(1, false).unwrap();
    state.tick(ms(100));

    let restored = ViewportState::restore(state.snapshot()).unwrap();
    assert!(!restored.is_animating());
    assert_eq!(restored.current(), AxisScale { step: 200, max: 1000 });
    assert_eq!(restored.pending(), None);
}

#[test]
fn restore_rejects_ranges_outside_the_dataset() {
    let state = ViewportState::new(common::two_series());
    let mut snap = state.snapshot();
    snap.visible_start = 4;
    snap.visible_end = 4;
    assert_eq!(
        ViewportState::restore(snap.clone()).unwrap_err(),
        ChartError::InvalidRange { start: 4, end: 4, len: 10 }
    );
    snap.visible_end = 11;
    assert!(ViewportState::restore(snap).is_err());
}
