// File: crates/looplens-core/src/scale.rs
// Summary: Joint Y range with degeneracy/margin rules, and index/value to pixel mapping.

use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotArea;
use crate::types::{DEGENERATE_PAD, DEGENERATE_SPAN, RANGE_MARGIN};

/// Value range shared by every series of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YRange {
    pub min: f64,
    pub max: f64,
    /// `max - min` after the 8% margin. For near-constant data it is the
    /// nominal 0.1 band, which can exceed `max - min` once the +/-0.05 pad is
    /// lost to rounding at large magnitudes.
    pub span: f64,
}

impl YRange {
    /// Range over every value in `samples`.
    ///
    /// Near-constant pools (span below 0.001) get a fixed band of +/-0.05 so
    /// the line does not collapse onto an edge; anything else is widened by 8%
    /// of its span on both sides. Fails with `NoSeries` on an empty pool and
    /// with `RangeOverflow` when the padded range is not representable.
    pub fn from_samples(samples: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for v in samples {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        if !any {
            return Err(ChartError::NoSeries);
        }
        let range = Self::padded(min, max);
        if !range.is_finite() {
            return Err(ChartError::RangeOverflow { min, max });
        }
        Ok(range)
    }

    /// Every bound, and the span, is a finite number.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.span.is_finite()
    }

    /// Apply the degeneracy guard or the margin to an observed `[min, max]`.
    pub fn padded(mut min: f64, mut max: f64) -> Self {
        if max - min < DEGENERATE_SPAN {
            min -= DEGENERATE_PAD;
            max += DEGENERATE_PAD;
            return Self { min, max, span: 2.0 * DEGENERATE_PAD };
        }
        let observed = max - min;
        min -= observed * RANGE_MARGIN;
        max += observed * RANGE_MARGIN;
        Self { min, max, span: max - min }
    }

    /// Value of tick `k` out of `intervals` equal steps from `min` to `max`.
    pub fn tick(&self, k: usize, intervals: usize) -> f64 {
        self.min + self.span * (k as f64 / intervals.max(1) as f64)
    }
}

/// Linear mapping from (sample index, value) to logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotMapping {
    pub plot: PlotArea,
    pub samples: usize,
    pub range: YRange,
}

impl PlotMapping {
    pub fn new(plot: PlotArea, samples: usize, range: YRange) -> Self {
        Self { plot, samples, range }
    }

    /// X pixel of sample `index`. A single sample sits on the left edge.
    #[inline]
    pub fn x(&self, index: usize) -> f64 {
        let denom = self.samples.saturating_sub(1).max(1) as f64;
        self.plot.left + (index as f64 / denom) * self.plot.width
    }

    /// Y pixel of `value`; larger values map higher on screen.
    #[inline]
    pub fn y(&self, value: f64) -> f64 {
        self.plot.top + self.plot.height - ((value - self.range.min) / self.range.span) * self.plot.height
    }
}
