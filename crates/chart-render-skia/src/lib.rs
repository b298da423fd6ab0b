// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for chart sessions: canvas surface, PNG and RGBA output.

use std::path::Path;

use anyhow::{anyhow, Result};
use log::debug;
use skia_safe as skia;

use chart_core::geometry::{Point, RectF};
use chart_core::surface::{Surface, TextStyle};
use chart_core::{Chart, Color};

pub mod text;

pub use text::TextShaper;

pub struct RenderOptions {
    /// Device pixels per layout pixel.
    pub scale: f32,
    /// Text is skipped when false (keeps pixel output font-independent).
    pub draw_labels: bool,
    /// Replaces the theme background when set.
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true, background: None }
    }
}

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

/// [`Surface`] drawing straight into a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: TextShaper,
    draw_labels: bool,
    background: Option<Color>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, opts: &RenderOptions) -> Self {
        Self { canvas, shaper: TextShaper::new(), draw_labels: opts.draw_labels, background: opts.background }
    }

    fn fill(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(color));
        paint
    }

    fn stroke(width: f32, color: Color) -> skia::Paint {
        let mut paint = Self::fill(color);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_skia(self.background.unwrap_or(color)));
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.canvas.draw_rect(to_rect(rect), &Self::fill(color));
        }
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        self.canvas.draw_round_rect(to_rect(rect), radius, radius, &Self::fill(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let mut paint = Self::stroke(width, color);
        paint.set_stroke_cap(skia::paint::Cap::Butt);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        self.canvas.draw_path(&path, &Self::stroke(width, color));
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        if self.draw_labels && style.color.a > 0 {
            self.shaper.draw(self.canvas, text, at.x, at.y, &style);
        }
    }

    fn push_clip(&mut self, rect: RectF) {
        self.canvas.save();
        self.canvas.clip_rect(to_rect(rect), None, true);
    }

    fn pop_clip(&mut self) {
        self.canvas.restore();
    }
}

/// Draw one frame of `chart` onto a fresh CPU raster surface.
pub fn render_to_surface(chart: &Chart, opts: &RenderOptions) -> Result<skia::Surface> {
    let scale = opts.scale.max(0.1);
    let width = (chart.layout().width * scale).ceil() as i32;
    let height = (chart.height() * scale).ceil() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;

    let canvas = surface.canvas();
    canvas.save();
    canvas.scale((scale, scale));
    chart.draw(&mut SkiaSurface::new(canvas, opts));
    canvas.restore();
    debug!("rendered {width}x{height} frame ({:?})", chart.state().mode());
    Ok(surface)
}

/// Render and encode as PNG bytes.
pub fn render_to_png_bytes(chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_to_surface(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(chart: &Chart, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Render to a tightly packed, unpremultiplied RGBA8 buffer.
/// Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &Chart, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = render_to_surface(chart, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(anyhow!("read_pixels failed"));
    }
    Ok((pixels, w, h, row_bytes))
}
