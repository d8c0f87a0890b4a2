// File: crates/looplens-core/src/chart.rs
// Summary: ChartRenderer and the layout it computes before painting onto a Surface.

use skia_safe as skia;
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotArea;
use crate::grid::{format_tick, x_label_indices, y_tick_values};
use crate::legend::LegendLayout;
use crate::scale::{PlotMapping, YRange};
use crate::series::ChartSpec;
use crate::surface::{LineStyle, Surface};
use crate::text::{TextAnchor, TextStyle};
use crate::theme::Theme;
use crate::types::{
    GRID_STROKE_WIDTH, MARKER_RADIUS, PLOT_PADDING, SERIES_STROKE_WIDTH, X_LABEL_BASELINE, Y_LABEL_BASELINE,
    Y_LABEL_GAP,
};

/// One horizontal gridline and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// One labelled sample index under the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

/// Everything the renderer decides before it touches the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub mapping: PlotMapping,
    pub y_ticks: Vec<YTick>,
    pub x_labels: Vec<XLabel>,
    pub legend: LegendLayout,
}

impl ChartLayout {
    /// Validate `spec` and lay it out on a `width` x `height` logical surface.
    /// `measure` returns the rendered width of a legend label. Samples whose
    /// padded range overflows `f64` fail here with `RangeOverflow`.
    pub fn compute(spec: &ChartSpec, (width, height): (f32, f32), measure: impl Fn(&str) -> f32) -> ChartResult<Self> {
        let samples = spec.validate()?;
        let (width, height) = (width as f64, height as f64);
        let plot = PlotArea::from_insets(width, height, &PLOT_PADDING);
        let range = YRange::from_samples(spec.samples())?;
        let mapping = PlotMapping::new(plot, samples, range);

        let y_ticks = y_tick_values(&range)
            .into_iter()
            .map(|value| YTick { value, y: mapping.y(value), label: format_tick(value) })
            .collect();
        let x_labels = x_label_indices(samples)
            .into_iter()
            .map(|index| XLabel { index, x: mapping.x(index), label: index.to_string() })
            .collect();
        let legend = LegendLayout::compute(&spec.series, &plot, measure);

        Ok(Self { width, height, mapping, y_ticks, x_labels, legend })
    }

    pub fn plot(&self) -> &PlotArea {
        &self.mapping.plot
    }

    pub fn range(&self) -> &YRange {
        &self.mapping.range
    }
}

/// Stateless line-chart renderer. Holds only its theme, so one instance can
/// serve any number of independent surfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartRenderer {
    pub theme: Theme,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn tick_style(&self) -> TextStyle {
        TextStyle::mono(self.theme.font_size, self.theme.tick_label)
    }

    fn legend_style(&self) -> TextStyle {
        TextStyle::mono(self.theme.font_size, self.theme.legend_text)
    }

    /// Paint `spec` onto `surface`.
    ///
    /// The surface must already have a non-zero logical size. Input is
    /// validated and the full layout computed before the surface is reset, so
    /// an error never leaves a partially drawn chart behind.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, spec: &ChartSpec) -> ChartResult<()> {
        let (width, height) = surface.logical_size();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::SurfaceUnavailable { width, height });
        }
        let ratio = effective_pixel_ratio(surface.device_pixel_ratio());
        let legend_style = self.legend_style();
        let layout = ChartLayout::compute(spec, (width, height), |label| surface.measure_text(label, &legend_style))?;

        let backing_width = (width * ratio).floor() as u32;
        let backing_height = (height * ratio).floor() as u32;
        debug!(
            samples = layout.mapping.samples,
            series = spec.series.len(),
            y_min = layout.range().min,
            y_max = layout.range().max,
            backing_width,
            backing_height,
            "rendering chart"
        );
        surface.reset(backing_width, backing_height, ratio)?;

        self.paint_grid(surface, &layout);
        self.paint_x_labels(surface, &layout);
        self.paint_series(surface, spec, &layout);
        self.paint_legend(surface, &layout);
        Ok(())
    }

    fn paint_grid<S: Surface + ?Sized>(&self, surface: &mut S, layout: &ChartLayout) {
        let plot = layout.plot();
        let grid = LineStyle::new(self.theme.grid, GRID_STROKE_WIDTH);
        let style = self.tick_style();
        for tick in &layout.y_ticks {
            let y = tick.y as f32;
            surface.stroke_line(
                skia::Point::new(plot.left as f32, y),
                skia::Point::new(plot.right() as f32, y),
                grid,
            );
            let origin = skia::Point::new(plot.left as f32 - Y_LABEL_GAP, y + Y_LABEL_BASELINE);
            surface.fill_text(&tick.label, origin, TextAnchor::Right, &style);
        }
    }

    fn paint_x_labels<S: Surface + ?Sized>(&self, surface: &mut S, layout: &ChartLayout) {
        let baseline = layout.plot().bottom() as f32 + X_LABEL_BASELINE;
        let style = self.tick_style();
        for label in &layout.x_labels {
            let origin = skia::Point::new(label.x as f32, baseline);
            surface.fill_text(&label.label, origin, TextAnchor::Center, &style);
        }
    }

    fn paint_series<S: Surface + ?Sized>(&self, surface: &mut S, spec: &ChartSpec, layout: &ChartLayout) {
        let mapping = &layout.mapping;
        for series in &spec.series {
            trace!(label = %series.label, color = %series.color, "painting series");
            let color = series.color.color();
            let points: Vec<skia::Point> = series
                .data
                .iter()
                .enumerate()
                .map(|(i, &v)| skia::Point::new(mapping.x(i) as f32, mapping.y(v) as f32))
                .collect();
            surface.stroke_polyline(&points, LineStyle::new(color, SERIES_STROKE_WIDTH));
            for p in &points {
                surface.fill_circle(*p, MARKER_RADIUS, color);
            }
        }
    }

    fn paint_legend<S: Surface + ?Sized>(&self, surface: &mut S, layout: &ChartLayout) {
        let style = self.legend_style();
        surface.fill_rect(layout.legend.frame, self.theme.legend_background);
        for row in &layout.legend.rows {
            surface.fill_rect(row.swatch, row.color);
            surface.fill_text(&row.label, row.text_origin, TextAnchor::Left, &style);
        }
    }
}

/// Pixel ratio actually applied: a missing, non-finite or non-positive report means 1.
pub fn effective_pixel_ratio(reported: Option<f32>) -> f32 {
    reported.filter(|r| r.is_finite() && *r > 0.0).unwrap_or(1.0)
}
