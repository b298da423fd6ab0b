// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; viewport, animation and coordinate engine for overview line charts.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod extrema;
pub mod geometry;
pub mod grid;
pub mod mapper;
pub mod scale;
pub mod series;
pub mod slider;
pub mod style;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use animation::{AnimationMode, DisplayValues, Tween};
pub use axis::{readable_label, y_value_step, AxisScale};
pub use chart::Chart;
pub use dataset::Dataset;
pub use error::{ChartError, Result};
pub use extrema::{compute_extrema, Extrema};
pub use geometry::{Point, RectF};
pub use series::Series;
pub use slider::{DragKind, SliderGeometry};
pub use surface::{Surface, TextAlign, TextStyle};
pub use theme::{Color, Theme};
pub use types::{Layout, MIN_SHARE, STEP_COUNT, TWEEN_DURATION};
pub use view::{ViewportSnapshot, ViewportState, VisibleRange};
