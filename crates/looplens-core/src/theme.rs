// File: crates/looplens-core/src/theme.rs
// Summary: Series palette and chart chrome colors.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ChartError;

/// Semantic series color. Each token resolves to one fixed concrete color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Blue,
    Red,
    Green,
    Orange,
    Gray,
    Purple,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Orange,
        PaletteColor::Gray,
        PaletteColor::Purple,
    ];

    pub fn color(self) -> skia::Color {
        match self {
            PaletteColor::Blue => skia::Color::from_argb(255, 0x58, 0xa6, 0xff),
            PaletteColor::Red => skia::Color::from_argb(255, 0xf8, 0x51, 0x49),
            PaletteColor::Green => skia::Color::from_argb(255, 0x3f, 0xb9, 0x50),
            PaletteColor::Orange => skia::Color::from_argb(255, 0xd2, 0x99, 0x22),
            PaletteColor::Gray => skia::Color::from_argb(255, 0x8b, 0x94, 0x9e),
            PaletteColor::Purple => skia::Color::from_argb(255, 0xbc, 0x8c, 0xff),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Orange => "orange",
            PaletteColor::Gray => "gray",
            PaletteColor::Purple => "purple",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("grey") {
            return Ok(PaletteColor::Gray);
        }
        PaletteColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartError::UnknownColor(s.to_string()))
    }
}

/// Colors and text size for everything that is not a series.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_text: skia::Color,
    pub font_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            grid: skia::Color::from_argb(255, 0x21, 0x26, 0x2d),
            tick_label: skia::Color::from_argb(255, 0x8b, 0x94, 0x9e),
            // Translucent so gridlines stay faintly visible underneath.
            legend_background: skia::Color::from_argb(204, 0x0d, 0x11, 0x17),
            legend_text: skia::Color::from_argb(255, 0xc9, 0xd1, 0xd9),
            font_size: 10.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
