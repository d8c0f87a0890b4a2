// File: crates/looplens-core/src/error.rs
// Summary: Error taxonomy for chart validation, surfaces and export.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has no series")]
    NoSeries,

    #[error("series `{label}` has no data")]
    EmptySeries { label: String },

    #[error("series `{label}` has {found} samples, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("series `{label}` has a non-finite sample at index {index}")]
    NonFiniteSample { label: String, index: usize },

    #[error("value range [{min}, {max}] overflows once padded")]
    RangeOverflow { min: f64, max: f64 },

    #[error("surface has no drawable area: {width}x{height} logical pixels")]
    SurfaceUnavailable { width: f32, height: f32 },

    #[error("failed to allocate raster surface {width}x{height}")]
    RasterAllocation { width: i32, height: i32 },

    #[error("unknown palette color `{0}`")]
    UnknownColor(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
