// File: crates/chart-core/src/chart.rs
// Summary: Chart session façade: wires input, clock ticks and drawing around one viewport state.

use std::time::Duration;

use crate::dates::date_labels;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::grid::gridlines;
use crate::mapper::{apply_window, main_polylines, overview_polylines, Polyline};
use crate::slider::{DragKind, SliderGeometry};
use crate::style::series_styles;
use crate::surface::{Surface, TextAlign, TextStyle};
use crate::theme::Theme;
use crate::types::Layout;
use crate::view::{ViewportSnapshot, ViewportState, VisibleRange};

pub struct Chart {
    state: ViewportState,
    layout: Layout,
    theme: Theme,
    slider: SliderGeometry,
    overview: Vec<Polyline>,
    drag: Option<DragKind>,
}

impl Chart {
    pub fn new(dataset: Dataset, layout: Layout, theme: Theme) -> Self {
        Self::with_state(ViewportState::new(dataset), layout, theme)
    }

    /// Rebuild a chart from a persisted snapshot; starts idle.
    pub fn restore(snapshot: ViewportSnapshot, layout: Layout, theme: Theme) -> Result<Self> {
        Ok(Self::with_state(ViewportState::restore(snapshot)?, layout, theme))
    }

    fn with_state(state: ViewportState, layout: Layout, theme: Theme) -> Self {
        let slider = place_slider(&state, &layout);
        let overview = overview_polylines(state.dataset(), layout.track_rect());
        Self { state, layout, theme, slider, overview, drag: None }
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn slider(&self) -> &SliderGeometry {
        &self.slider
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn height(&self) -> f32 {
        self.layout.height()
    }

    /// Layout pass: new dimensions keep the visible range and rebuild the overview.
    pub fn relayout(&mut self, layout: Layout) {
        self.layout = layout;
        self.slider = place_slider(&self.state, &layout);
        self.overview = overview_polylines(self.state.dataset(), layout.track_rect());
        self.drag = None;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_series_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        self.state.toggle_series(index, selected)
    }

    /// Flip series `index` and animate the change.
    pub fn toggle_series(&mut self, index: usize) -> Result<()> {
        let series = self.state.dataset().series();
        let selected = series
            .get(index)
            .map(|s| !s.is_selected())
            .ok_or(ChartError::SeriesOutOfBounds { index, len: series.len() })?;
        self.state.toggle_series(index, selected)
    }

    pub fn toggle_series_by_id(&mut self, id: &str) -> Result<()> {
        let index = self
            .state
            .dataset()
            .series_index(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        self.toggle_series(index)
    }

    /// Start a gesture. Returns whether the slider grabbed it.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.drag = self.slider.hit_test(x, y);
        self.drag.is_some()
    }

    /// Continue the grabbed gesture by `dx` pixels. Returns whether a redraw is needed.
    pub fn drag_by(&mut self, dx: f32) -> bool {
        let Some(kind) = self.drag else {
            return false;
        };
        if !self.slider.drag(kind, dx) {
            return false;
        }
        let range = self.slider.visible_range(self.state.dataset().len());
        self.state.set_visible_range(range);
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn active_drag(&self) -> Option<DragKind> {
        self.drag
    }

    /// Frame callback from the host's animation clock. Returns whether a redraw is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.state.tick(dt)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let l = &self.layout;
        let t = &self.theme;
        let content = l.content_rect();
        let track = self.slider.track();
        let window = self.slider.window();
        let transform = self.slider.transform();
        let styles = series_styles(&self.state);

        surface.clear(t.background);
        surface.draw_text(
            self.state.dataset().title(),
            Point::new(l.padding, l.padding + l.title_size),
            TextStyle { size: l.title_size, color: t.title, align: TextAlign::Left, bold: true },
        );

        for g in gridlines(&self.state, l.baseline(), l.axis_step) {
            if g.alpha == 0 {
                continue;
            }
            surface.stroke_line(
                Point::new(content.left, g.y),
                Point::new(content.right, g.y),
                l.grid_width,
                t.grid.faded(g.alpha),
            );
            surface.draw_text(
                &g.label,
                Point::new(content.left, g.y - l.y_label_offset),
                TextStyle { size: l.label_size, color: t.axis_label.faded(g.alpha), align: TextAlign::Left, bold: false },
            );
        }

        let mut lines = main_polylines(&self.state, content, l.axis_step);
        apply_window(&mut lines, &transform);
        surface.push_clip(RectF::from_ltrb(content.left, 0.0, content.right, content.bottom + l.line_width));
        for line in lines.iter().filter(|p| p.alpha > 0) {
            surface.stroke_polyline(&line.points, l.line_width, line.color.faded(line.alpha));
        }
        surface.pop_clip();

        for label in date_labels(self.state.dataset().dates(), content, &transform) {
            surface.draw_text(
                &label.text,
                Point::new(label.x, l.dates_y()),
                TextStyle { size: l.label_size, color: t.date_label.faded(label.alpha), align: TextAlign::Center, bold: false },
            );
        }

        surface.push_clip(track);
        for (line, style) in self.overview.iter().zip(&styles) {
            if style.line_alpha > 0 {
                surface.stroke_polyline(&line.points, l.line_width * 0.5, line.color.faded(style.line_alpha));
            }
        }
        surface.pop_clip();

        surface.fill_rect(RectF::from_ltrb(track.left, track.top, window.left, track.bottom), t.slider_dim);
        surface.fill_rect(RectF::from_ltrb(window.right, track.top, track.right, track.bottom), t.slider_dim);

        let h = self.slider.handle_width();
        let left_handle = RectF::from_ltrb(window.left, window.top, window.left + h, window.bottom);
        let right_handle = RectF::from_ltrb(window.right - h, window.top, window.right, window.bottom);
        surface.fill_rect(left_handle, t.slider_frame);
        surface.fill_rect(right_handle, t.slider_frame);
        surface.fill_rect(RectF::from_ltrb(left_handle.right, window.top, right_handle.left, track.top), t.slider_frame);
        surface.fill_rect(RectF::from_ltrb(left_handle.right, track.bottom, right_handle.left, window.bottom), t.slider_frame);

        let (dw, dh) = l.handle_decoration;
        for handle in [left_handle, right_handle] {
            let deco = RectF::from_ltwh(handle.center_x() - dw * 0.5, handle.center_y() - dh * 0.5, dw, dh);
            surface.fill_round_rect(deco, dw * 0.5, t.handle_decoration);
        }
    }
}

fn place_slider(state: &ViewportState, layout: &Layout) -> SliderGeometry {
    let slider = SliderGeometry::new(layout.track_rect(), layout.handle_width, layout.slider_border);
    let len = state.dataset().len();
    let range = state.visible_range();
    if range == VisibleRange::full(len) { slider } else { slider.with_visible_range(range, len) }
}
