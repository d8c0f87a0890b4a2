// File: crates/looplens-core/src/text.rs
// Summary: Text styles and a Skia textlayout shaper for measuring and drawing labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

impl TextAnchor {
    /// Left edge of a run of `width` anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            TextAnchor::Left => x,
            TextAnchor::Center => x - width * 0.5,
            TextAnchor::Right => x - width,
        }
    }
}

/// Label style. Every label is shaped with the monospace family stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
}

impl TextStyle {
    pub const fn mono(size: f32, color: skia::Color) -> Self {
        Self { size, color }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &TextStyle) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.layout(text, style).longest_line()
    }

    /// Paint `text` with its baseline at `origin.y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, origin: skia::Point, anchor: TextAnchor, style: &TextStyle) {
        let mut paragraph = self.layout(text, style);
        let left = anchor.left_edge(origin.x, paragraph.longest_line());
        // Paragraphs paint from their top-left corner.
        let top = origin.y - paragraph.alphabetic_baseline();
        paragraph.paint(canvas, (left, top));
    }
}
