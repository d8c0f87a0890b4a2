// File: crates/looplens-core/src/grid.rs
// Summary: Tick selection for gridlines and axis labels.

use crate::scale::YRange;
use crate::types::{X_LABEL_TARGET, Y_TICK_INTERVALS};

/// `Y_TICK_INTERVALS + 1` evenly spaced values from `range.min` to `range.max` inclusive.
pub fn y_tick_values(range: &YRange) -> Vec<f64> {
    (0..=Y_TICK_INTERVALS).map(|k| range.tick(k, Y_TICK_INTERVALS)).collect()
}

/// Tick label text: fixed two decimals.
pub fn format_tick(value: f64) -> String {
    format!("{value:.2}")
}

/// Stride between labelled sample indices for `samples` points.
pub fn x_label_stride(samples: usize) -> usize {
    (samples / X_LABEL_TARGET).max(1)
}

/// Sample indices that get an X label.
///
/// Every `x_label_stride`-th index from 0, plus the last index when the
/// stride skips it, so the final sample is always labelled exactly once.
pub fn x_label_indices(samples: usize) -> Vec<usize> {
    if samples == 0 {
        return Vec::new();
    }
    let step = x_label_stride(samples);
    let mut out: Vec<usize> = (0..samples).step_by(step).collect();
    let last = samples - 1;
    if last % step != 0 {
        out.push(last);
    }
    out
}
