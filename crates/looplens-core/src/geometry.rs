// File: crates/looplens-core/src/geometry.rs
// Summary: Plot-area geometry in logical pixels.

use crate::types::Insets;

/// Rectangle left for data once padding is removed from the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area of a `width` x `height` logical surface with the given padding.
    /// Width and height go negative when the padding does not fit.
    pub fn from_insets(width: f64, height: f64, insets: &Insets) -> Self {
        Self {
            left: insets.left as f64,
            top: insets.top as f64,
            width: width - insets.hsum() as f64,
            height: height - insets.vsum() as f64,
        }
    }

    pub fn right(&self) -> f64 { self.left + self.width }

    pub fn bottom(&self) -> f64 { self.top + self.height }
}
