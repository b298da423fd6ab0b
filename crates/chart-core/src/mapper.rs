// File: crates/chart-core/src/mapper.rs
// Summary: Projects (index, value) pairs into screen-space polylines for the main plot and the overview.

use crate::dataset::Dataset;
use crate::geometry::{Point, RectF};
use crate::scale::{IndexScale, ValueScale, WindowTransform};
use crate::style::series_styles;
use crate::theme::Color;
use crate::view::ViewportState;

/// One series' line in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub series: usize,
    pub color: Color,
    pub alpha: u8,
    pub points: Vec<Point>,
}

/// Main plot lines over the *full* date range, scaled vertically by the animated step
/// (`axis_step / step_y` pixels per unit). Zooming is applied afterwards by
/// [`apply_window`], never by re-tessellating.
pub fn main_polylines(state: &ViewportState, content: RectF, axis_step: f32) -> Vec<Polyline> {
    let dataset = state.dataset();
    let xs = IndexScale::new(content.left, content.width(), dataset.len());
    let ys = ValueScale::for_step(content.bottom, axis_step, state.display().step_y);
    let styles = series_styles(state);
    dataset
        .series()
        .iter()
        .zip(styles)
        .enumerate()
        .map(|(i, (s, style))| Polyline {
            series: i,
            color: s.color,
            alpha: style.line_alpha,
            points: project(s.values(), &xs, &ys),
        })
        .collect()
}

/// Squeeze/shift full-range lines so the slider window fills the plot width.
pub fn apply_window(lines: &mut [Polyline], transform: &WindowTransform) {
    for p in lines.iter_mut().flat_map(|l| l.points.iter_mut()) {
        p.x = transform.apply(p.x);
    }
}

/// Overview lines inside the slider track. The vertical scale is the dataset's
/// load-time full-range max, so this geometry ignores selection, zoom and animation
/// and only needs recomputing when the layout changes.
///
/// That max is scanned over `[0, N-1)`, so the last point may exceed it; points are
/// pinned to the track top rather than drawn outside it.
pub fn overview_polylines(dataset: &Dataset, track: RectF) -> Vec<Polyline> {
    let xs = IndexScale::new(track.left, track.width(), dataset.len());
    let ys = ValueScale::fit(track.bottom, track.height(), dataset.full_range_max_y());
    dataset
        .series()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mut points = project(s.values(), &xs, &ys);
            for p in &mut points {
                p.y = p.y.max(track.top);
            }
            Polyline { series: i, color: s.color, alpha: 255, points }
        })
        .collect()
}

fn project(values: &[i64], xs: &IndexScale, ys: &ValueScale) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(xs.to_px(i), ys.to_px(v as f64)))
        .collect()
}
