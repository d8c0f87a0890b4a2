// File: crates/looplens-core/src/types.rs
// Summary: Fixed layout constants (plot padding, stroke widths, legend metrics).

/// Screen margins around the plot area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

/// Plot padding. Left and bottom leave room for the Y and X tick labels.
/// These values fix the visual layout and are never derived from content.
pub const PLOT_PADDING: Insets = Insets::new(46, 14, 10, 26);

/// Number of intervals between horizontal gridlines (six lines in total).
pub const Y_TICK_INTERVALS: usize = 5;
/// Upper bound used to pick the X label stride: `max(1, n / X_LABEL_TARGET)`.
pub const X_LABEL_TARGET: usize = 8;

/// Value spans narrower than this are treated as constant data.
pub const DEGENERATE_SPAN: f64 = 0.001;
/// Half-height of the band forced around constant data.
pub const DEGENERATE_PAD: f64 = 0.05;
/// Fraction of the observed span added above and below the data.
pub const RANGE_MARGIN: f64 = 0.08;

pub const GRID_STROKE_WIDTH: f32 = 0.5;
pub const SERIES_STROKE_WIDTH: f32 = 1.8;
pub const MARKER_RADIUS: f32 = 2.2;

/// Gap between the plot's left edge and the right edge of Y labels.
pub const Y_LABEL_GAP: f32 = 4.0;
/// Y label baseline offset below its gridline.
pub const Y_LABEL_BASELINE: f32 = 3.0;
/// X label baseline offset below the plot bottom.
pub const X_LABEL_BASELINE: f32 = 16.0;

pub const LEGEND_PADDING: f32 = 16.0;
pub const LEGEND_ROW_HEIGHT: f32 = 13.0;
pub const LEGEND_MARGIN: f32 = 4.0;
/// Legend inset from the plot's top-right corner.
pub const LEGEND_INSET: f32 = 2.0;
pub const LEGEND_SWATCH_WIDTH: f32 = 8.0;
pub const LEGEND_SWATCH_HEIGHT: f32 = 3.0;
pub const LEGEND_SWATCH_LEFT: f32 = 3.0;
pub const LEGEND_SWATCH_TOP: f32 = 5.0;
pub const LEGEND_TEXT_LEFT: f32 = 14.0;
pub const LEGEND_TEXT_BASELINE: f32 = 10.0;
