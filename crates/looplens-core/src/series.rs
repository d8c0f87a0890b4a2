// File: crates/looplens-core/src/series.rs
// Summary: Series and ChartSpec models plus input contract validation.

use crate::error::{ChartError, ChartResult};
use crate::theme::PaletteColor;

/// One labelled sequence of samples. Sample position is the X coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub data: Vec<f64>,
    pub color: PaletteColor,
    pub label: String,
}

impl Series {
    pub fn new(label: impl Into<String>, color: PaletteColor, data: Vec<f64>) -> Self {
        Self { data, color, label: label.into() }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

/// The unit of work handed to the renderer: every series shares one X domain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSpec {
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Check the input contract and return the shared sample count `n`.
    ///
    /// Fails on an empty series list, an empty series, unequal lengths or a
    /// non-finite sample. Nothing is padded or dropped.
    pub fn validate(&self) -> ChartResult<usize> {
        let first = self.series.first().ok_or(ChartError::NoSeries)?;
        let expected = first.len();
        for s in &self.series {
            if s.is_empty() {
                return Err(ChartError::EmptySeries { label: s.label.clone() });
            }
            if s.len() != expected {
                return Err(ChartError::LengthMismatch {
                    label: s.label.clone(),
                    expected,
                    found: s.len(),
                });
            }
            if let Some(index) = s.data.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteSample { label: s.label.clone(), index });
            }
        }
        Ok(expected)
    }

    /// Every sample of every series, in series order.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.data.iter().copied())
    }
}
