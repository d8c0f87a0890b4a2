// File: crates/looplens-core/src/record.rs
// Summary: Headless surface that records draw calls instead of rasterizing.

use skia_safe as skia;

use crate::error::ChartResult;
use crate::surface::{LineStyle, Surface};
use crate::text::{TextAnchor, TextStyle};

/// Advance of one character as a fraction of the font size.
pub const RECORDED_CHAR_ADVANCE: f32 = 0.6;

/// One recorded call, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Reset { backing_width: u32, backing_height: u32, scale: f32 },
    Line { from: skia::Point, to: skia::Point, style: LineStyle },
    Polyline { points: Vec<skia::Point>, style: LineStyle },
    Rect { rect: skia::Rect, color: skia::Color },
    Circle { center: skia::Point, radius: f32, color: skia::Color },
    Text { text: String, origin: skia::Point, anchor: TextAnchor, style: TextStyle },
}

/// Surface that keeps a log of every call. Text is measured with a fixed
/// per-character advance so layouts are identical on every platform.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    logical: (f32, f32),
    device_pixel_ratio: Option<f32>,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { logical: (width, height), device_pixel_ratio: None, ops: Vec::new() }
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, skia::Point, TextAnchor)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, anchor, .. } => Some((text.as_str(), *origin, *anchor)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (skia::Point, skia::Point, LineStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, style } => Some((*from, *to, *style)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> (f32, f32) {
        self.logical
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        self.device_pixel_ratio
    }

    fn reset(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()> {
        self.ops.clear();
        self.ops.push(DrawOp::Reset { backing_width, backing_height, scale });
        Ok(())
    }

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, style: LineStyle) {
        self.ops.push(DrawOp::Line { from, to, style });
    }

    fn stroke_polyline(&mut self, points: &[skia::Point], style: LineStyle) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), style });
    }

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, origin: skia::Point, anchor: TextAnchor, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, anchor, style: *style });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * RECORDED_CHAR_ADVANCE
    }
}
