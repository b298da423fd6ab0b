// File: crates/chart-core/src/slider.rs
// Summary: Overview slider window: drag/resize clamping, hit-test bands and range derivation.

use crate::geometry::{clamp, RectF};
use crate::scale::WindowTransform;
use crate::types::MIN_SHARE;
use crate::view::VisibleRange;

/// What a pointer-down on the slider grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    Move,
    ResizeLeft,
    ResizeRight,
}

/// Draggable window over a fixed-width track.
/// Contract: `track.left <= window.left`, `window.right <= track.right` and
/// `window.width() >= min_width()` after every operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderGeometry {
    track: RectF,
    window: RectF,
    handle_width: f32,
    border: f32,
}

impl SliderGeometry {
    /// Window spans the whole track (fully zoomed out).
    /// `track` is the inner track; the window extends `border` above and below it.
    pub fn new(track: RectF, handle_width: f32, border: f32) -> Self {
        let window = RectF::from_ltrb(track.left, track.top - border, track.right, track.bottom + border);
        Self { track, window, handle_width, border }
    }

    /// Place the window so it covers `range` over `len` dates.
    pub fn with_visible_range(mut self, range: VisibleRange, len: usize) -> Self {
        let t = WindowTransform::from_visible_range(self.track.left, self.track.width(), range.start, range.end, len);
        let width = (t.width_share * self.track.width()).max(self.min_width()).min(self.track.width());
        let left = clamp(self.track.left + t.left_share * self.track.width(), self.track.left, self.track.right - width);
        self.window.left = left;
        self.window.right = left + width;
        self
    }

    pub fn track(&self) -> RectF {
        self.track
    }

    pub fn window(&self) -> RectF {
        self.window
    }

    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    pub fn min_width(&self) -> f32 {
        self.track.width() * MIN_SHARE
    }

    /// Window width as a fraction of the track.
    pub fn width_share(&self) -> f32 {
        self.window.width() / self.track.width()
    }

    /// Window left edge as a fraction of the track.
    pub fn left_share(&self) -> f32 {
        (self.window.left - self.track.left) / self.track.width()
    }

    /// Transform zooming the main plot onto this window.
    pub fn transform(&self) -> WindowTransform {
        WindowTransform::new(self.track.left, self.track.width(), self.left_share(), self.width_share())
    }

    /// Date index window this slider position selects:
    /// `[leftShare * (N-1), (leftShare + widthShare) * N]`.
    pub fn visible_range(&self, len: usize) -> VisibleRange {
        let start = (self.left_share() * len.saturating_sub(1) as f32) as usize;
        // exactly N when the window touches the track's right edge
        let right = (self.window.right - self.track.left) / self.track.width();
        let end = ((right * len as f32) as usize).min(len);
        VisibleRange { start, end: end.max(start + 1) }
    }

    /// Move the whole window by `dx`, clamped to the track. Returns whether it moved.
    pub fn translate(&mut self, dx: f32) -> bool {
        let dx = clamp(dx, self.track.left - self.window.left, self.track.right - self.window.right);
        if dx == 0.0 {
            return false;
        }
        self.window.offset(dx, 0.0);
        true
    }

    /// Drag the left edge by `dx`; never past the track or within `min_width` of the right edge.
    pub fn resize_left(&mut self, dx: f32) -> bool {
        let left = clamp(self.window.left + dx, self.track.left, self.window.right - self.min_width());
        let moved = left != self.window.left;
        self.window.left = left;
        moved
    }

    /// Drag the right edge by `dx`; never past the track or within `min_width` of the left edge.
    pub fn resize_right(&mut self, dx: f32) -> bool {
        let right = clamp(self.window.right + dx, self.window.left + self.min_width(), self.track.right);
        let moved = right != self.window.right;
        self.window.right = right;
        moved
    }

    pub fn drag(&mut self, kind: DragKind, dx: f32) -> bool {
        match kind {
            DragKind::Move => self.translate(dx),
            DragKind::ResizeLeft => self.resize_left(dx),
            DragKind::ResizeRight => self.resize_right(dx),
        }
    }

    /// Classify a pointer-down. The body wins over the handles, then left, then right.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<DragKind> {
        let h = self.handle_width;
        let w = self.window;
        let body = w.inset(h * 2.0, self.border);
        let left = RectF::from_ltrb(w.left - h * 2.0, w.top, w.left + h * 3.5, w.bottom);
        let right = RectF::from_ltrb(w.right - h * 3.5, w.top, w.right + h * 2.0, w.bottom);
        if body.contains(x, y) {
            Some(DragKind::Move)
        } else if left.contains(x, y) {
            Some(DragKind::ResizeLeft)
        } else if right.contains(x, y) {
            Some(DragKind::ResizeRight)
        } else {
            None
        }
    }
}
