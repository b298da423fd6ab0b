// File: crates/chart-core/src/grid.rs
// Summary: Horizontal gridline layout for the main plot, per animation mode.

use crate::animation::AnimationMode;
use crate::axis::readable_label;
use crate::scale::ValueScale;
use crate::types::STEP_COUNT;
use crate::view::ViewportState;

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub value: i64,
    pub y: f32,
    pub label: String,
    pub alpha: u8,
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Gridlines to draw this frame, bottom (baseline) first.
///
/// Only a step change moves lines: COMPLEX cross-fades the old set out and the new
/// set in at their animated heights. Every other mode keeps the fixed spacing and
/// only varies opacity.
pub fn gridlines(state: &ViewportState, baseline: f32, axis_step: f32) -> Vec<GridLine> {
    let display = state.display();
    let step = state.current().step;
    match state.mode() {
        AnimationMode::Idle if state.is_empty() => Vec::new(),
        AnimationMode::Idle | AnimationMode::Simple => fixed(step, baseline, axis_step, 255),
        AnimationMode::ToEmpty => fixed(step, baseline, axis_step, display.alpha_hide),
        AnimationMode::FromEmpty => fixed(step, baseline, axis_step, display.alpha_show),
        AnimationMode::Complex => {
            let scale = ValueScale::for_step(baseline, axis_step, display.step_y);
            let pending = state.pending().map_or(step, |p| p.step);
            let mut lines = vec![line(0, baseline, 255)];
            lines.extend(moving(step, scale, display.alpha_hide));
            lines.extend(moving(pending, scale, display.alpha_show));
            lines
        }
    }
}

fn fixed(step: i64, baseline: f32, axis_step: f32, alpha: u8) -> Vec<GridLine> {
    let top = baseline as f64 - axis_step as f64 * (STEP_COUNT - 1) as f64;
    linspace(baseline as f64, top, STEP_COUNT)
        .into_iter()
        .enumerate()
        .map(|(i, y)| line(step * i as i64, y as f32, alpha))
        .collect()
}

fn moving(step: i64, scale: ValueScale, alpha: u8) -> impl Iterator<Item = GridLine> {
    (1..STEP_COUNT as i64).map(move |i| {
        let value = step * i;
        line(value, scale.to_px(value as f64), alpha)
    })
}

fn line(value: i64, y: f32, alpha: u8) -> GridLine {
    GridLine { value, y, label: readable_label(value), alpha }
}
