// File: crates/chart-core/src/types.rs
// Summary: Shared constants and the pixel layout configuration supplied by the host.

use std::time::Duration;

use crate::geometry::RectF;

/// Number of horizontal gridlines on the main plot, baseline included.
pub const STEP_COUNT: usize = 6;

/// Narrowest slider window, as a fraction of the track width.
pub const MIN_SHARE: f32 = 0.20;

/// Length of every rescale / cross-fade tween.
pub const TWEEN_DURATION: Duration = Duration::from_millis(250);

/// Default chart width in pixels.
pub const WIDTH: f32 = 720.0;

/// Pixel dimensions of a chart card. The core treats every value as plain pixels.
/// Contract: all fields are non-negative and `width > 2 * padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub padding: f32,
    /// Top of the plot area (room for the title above it).
    pub content_top: f32,
    /// Vertical distance between two gridlines.
    pub axis_step: f32,
    pub y_label_offset: f32,
    /// Height of the band holding the date labels under the plot.
    pub date_band: f32,
    pub slider_height: f32,
    /// Thickness of the window frame above and below the track.
    pub slider_border: f32,
    pub handle_width: f32,
    pub handle_decoration: (f32, f32),
    pub corner_radius: f32,
    pub line_width: f32,
    pub grid_width: f32,
    pub label_size: f32,
    pub title_size: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            padding: 16.0,
            content_top: 56.0,
            axis_step: 44.0,
            y_label_offset: 6.0,
            date_band: 36.0,
            slider_height: 48.0,
            slider_border: 2.0,
            handle_width: 10.0,
            handle_decoration: (2.0, 12.0),
            corner_radius: 6.0,
            line_width: 2.5,
            grid_width: 1.0,
            label_size: 12.0,
            title_size: 16.0,
        }
    }
}

impl Layout {
    pub fn with_width(width: f32) -> Self {
        Self { width, ..Self::default() }
    }

    /// y of the zero gridline.
    pub fn baseline(&self) -> f32 {
        self.content_top + self.axis_step * STEP_COUNT as f32
    }

    /// Main plot area; its bottom edge is the baseline.
    pub fn content_rect(&self) -> RectF {
        RectF::from_ltrb(self.padding, self.content_top, self.width - self.padding, self.baseline())
    }

    /// Baseline of the date label row.
    pub fn dates_y(&self) -> f32 {
        self.baseline() + self.padding + self.label_size * 0.5
    }

    /// Outer rectangle of the slider, frame included.
    pub fn slider_rect(&self) -> RectF {
        let top = self.baseline() + self.date_band;
        RectF::from_ltrb(self.padding, top, self.width - self.padding, top + self.slider_height)
    }

    /// Track the window slides on; the overview is drawn inside it.
    pub fn track_rect(&self) -> RectF {
        let s = self.slider_rect();
        RectF::from_ltrb(s.left, s.top + self.slider_border, s.right, s.bottom - self.slider_border)
    }

    /// Total card height.
    pub fn height(&self) -> f32 {
        self.slider_rect().bottom + self.padding
    }
}
