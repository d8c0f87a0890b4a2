// File: crates/looplens-core/src/lib.rs
// Summary: Core library entry point; exports the chart renderer, surfaces and models.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod raster;
pub mod record;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{effective_pixel_ratio, ChartLayout, ChartRenderer, XLabel, YTick};
pub use error::{ChartError, ChartResult};
pub use geometry::PlotArea;
pub use legend::{LegendLayout, LegendRow};
pub use raster::{render_to_png_bytes, RasterSurface};
pub use record::{DrawOp, RecordingSurface};
pub use scale::{PlotMapping, YRange};
pub use series::{ChartSpec, Series};
pub use surface::{LineStyle, Surface};
pub use text::{TextAnchor, TextShaper, TextStyle};
pub use theme::{PaletteColor, Theme};
pub use types::PLOT_PADDING;
