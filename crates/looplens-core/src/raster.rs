// File: crates/looplens-core/src/raster.rs
// Summary: Skia CPU raster surface with device-pixel-ratio sizing and PNG/RGBA export.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::chart::ChartRenderer;
use crate::error::{ChartError, ChartResult};
use crate::series::ChartSpec;
use crate::surface::{LineStyle, Surface};
use crate::text::{TextAnchor, TextShaper, TextStyle};

/// Offscreen raster target. The logical size stays fixed; the backing buffer
/// is reallocated by [`Surface::reset`] to `logical x device_pixel_ratio`.
pub struct RasterSurface {
    logical: (f32, f32),
    device_pixel_ratio: Option<f32>,
    surface: skia::Surface,
    shaper: TextShaper,
}

impl RasterSurface {
    /// Surface of `width` x `height` logical pixels with no reported pixel ratio.
    pub fn new(width: f32, height: f32) -> ChartResult<Self> {
        Ok(Self {
            logical: (width, height),
            device_pixel_ratio: None,
            surface: allocate(width.max(1.0) as i32, height.max(1.0) as i32)?,
            shaper: TextShaper::new(),
        })
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    /// Backing buffer size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (self.surface.width() as u32, self.surface.height() as u32)
    }

    /// Read the backing buffer as tightly packed, unpremultiplied RGBA8.
    /// Returns `(pixels, width, height)`.
    pub fn to_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encode("failed to read back raster pixels".to_string()));
        }
        Ok((pixels, w as u32, h as u32))
    }

    pub fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        let (pixels, w, h) = self.to_rgba8()?;
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels, w, h, ExtendedColorType::Rgba8)
            .map_err(|e| ChartError::Encode(e.to_string()))?;
        Ok(out)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn allocate(width: i32, height: i32) -> ChartResult<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::RasterAllocation { width, height })
}

impl Surface for RasterSurface {
    fn logical_size(&self) -> (f32, f32) {
        self.logical
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        self.device_pixel_ratio
    }

    fn reset(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()> {
        let (w, h) = (backing_width as i32, backing_height as i32);
        if (self.surface.width(), self.surface.height()) != (w, h) {
            self.surface = allocate(w, h)?;
        }
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((scale, scale));
        canvas.clear(skia::Color::TRANSPARENT);
        Ok(())
    }

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, style: LineStyle) {
        let paint = stroke_paint(style);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn stroke_polyline(&mut self, points: &[skia::Point], style: LineStyle) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        let mut paint = stroke_paint(style);
        paint.set_stroke_join(skia::paint::Join::Round);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color) {
        let paint = fill_paint(color);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color) {
        let paint = fill_paint(color);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn fill_text(&mut self, text: &str, origin: skia::Point, anchor: TextAnchor, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, origin, anchor, style);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        self.shaper.measure_width(text, style)
    }
}

fn stroke_paint(style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width);
    paint.set_color(style.color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Render `spec` with the default renderer onto a fresh `width` x `height`
/// logical surface at `device_pixel_ratio` and return PNG bytes.
pub fn render_to_png_bytes(spec: &ChartSpec, width: f32, height: f32, device_pixel_ratio: f32) -> ChartResult<Vec<u8>> {
    let mut surface = RasterSurface::new(width, height)?.with_device_pixel_ratio(device_pixel_ratio);
    ChartRenderer::new().render(&mut surface, spec)?;
    surface.encode_png()
}
