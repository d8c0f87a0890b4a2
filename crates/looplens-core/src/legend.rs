// File: crates/looplens-core/src/legend.rs
// Summary: Legend box sizing and row placement anchored to the plot's top-right corner.

use skia_safe as skia;

use crate::geometry::PlotArea;
use crate::series::Series;
use crate::types::{
    LEGEND_INSET, LEGEND_MARGIN, LEGEND_PADDING, LEGEND_ROW_HEIGHT, LEGEND_SWATCH_HEIGHT,
    LEGEND_SWATCH_LEFT, LEGEND_SWATCH_TOP, LEGEND_SWATCH_WIDTH, LEGEND_TEXT_BASELINE, LEGEND_TEXT_LEFT,
};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub color: skia::Color,
    pub swatch: skia::Rect,
    /// Baseline-left origin of the label text.
    pub text_origin: skia::Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// Background box; its width is the widest label plus padding.
    pub frame: skia::Rect,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    /// Lay out one row per series in input order. `measure` returns the
    /// rendered width of a label.
    pub fn compute(series: &[Series], plot: &PlotArea, measure: impl Fn(&str) -> f32) -> Self {
        let widest = series.iter().map(|s| measure(&s.label)).fold(0.0f32, f32::max);
        let width = widest + LEGEND_PADDING;
        let height = series.len() as f32 * LEGEND_ROW_HEIGHT + LEGEND_MARGIN;
        let left = plot.right() as f32 - width - LEGEND_INSET;
        let top = plot.top as f32 + LEGEND_INSET;

        let rows = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let row_top = top + i as f32 * LEGEND_ROW_HEIGHT;
                LegendRow {
                    label: s.label.clone(),
                    color: s.color.color(),
                    swatch: skia::Rect::from_xywh(
                        left + LEGEND_SWATCH_LEFT,
                        row_top + LEGEND_SWATCH_TOP,
                        LEGEND_SWATCH_WIDTH,
                        LEGEND_SWATCH_HEIGHT,
                    ),
                    text_origin: skia::Point::new(left + LEGEND_TEXT_LEFT, row_top + LEGEND_TEXT_BASELINE),
                }
            })
            .collect();

        Self { frame: skia::Rect::from_xywh(left, top, width, height), rows }
    }
}
