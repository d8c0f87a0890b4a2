// File: crates/looplens-core/src/surface.rs
// Summary: Drawing-surface contract the renderer paints through.

use skia_safe as skia;

use crate::error::ChartResult;
use crate::text::{TextAnchor, TextStyle};

/// Stroke parameters for lines and polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
}

impl LineStyle {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A 2D raster target with a logical size and a backing pixel buffer.
///
/// All drawing calls take logical coordinates; the scale set by [`Surface::reset`]
/// maps them onto the backing buffer. The renderer is the only writer while a
/// render is in progress.
pub trait Surface {
    /// Current on-screen size in logical pixels.
    fn logical_size(&self) -> (f32, f32);

    /// Display density, or `None` when the host cannot report one.
    fn device_pixel_ratio(&self) -> Option<f32> {
        None
    }

    /// Resize the backing buffer, install a uniform `scale` transform and clear it.
    fn reset(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()>;

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, style: LineStyle);

    /// Connected path through `points` with round joins.
    fn stroke_polyline(&mut self, points: &[skia::Point], style: LineStyle);

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color);

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color);

    /// Draw `text` with its baseline at `origin.y`, anchored horizontally at `origin.x`.
    fn fill_text(&mut self, text: &str, origin: skia::Point, anchor: TextAnchor, style: &TextStyle);

    /// Advance width of `text` in logical pixels.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;
}
