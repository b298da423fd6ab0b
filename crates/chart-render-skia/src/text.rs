// File: crates/chart-render-skia/src/text.rs
// Summary: Paragraph-based text shaper with left/center alignment on a baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use chart_core::surface::{TextAlign, TextStyle as LabelStyle};

use crate::to_skia;

const FAMILIES: [&str; 6] = ["Roboto", "Segoe UI", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &LabelStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(to_skia(style.color));
        ts.set_font_families(&FAMILIES);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`; `x` is the left edge or the center per `style.align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let p = self.layout(text, style);
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - p.max_intrinsic_width() * 0.5,
        };
        p.paint(canvas, (left, y - p.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
