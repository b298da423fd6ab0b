// File: crates/chart-core/src/surface.rs
// Summary: Rendering collaborator interface; the core only ever pushes geometry into it.

use crate::geometry::{Point, RectF};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
}

/// Pixel drawing backend. Colors arrive with their final alpha already applied;
/// text is positioned by its baseline.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: RectF, color: Color);
    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color);
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle);
    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: RectF);
    fn pop_clip(&mut self);
}
