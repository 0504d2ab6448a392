//! Colours assigned to chart series.

use std::fmt;

use serde::Serialize;

/// An RGBA colour as understood by CSS and ECharts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Opacity between 0.0 and 1.0.
    pub alpha: f32,
}

impl Color {
    /// Create a colour.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The same colour with full opacity, used for borders.
    pub const fn opaque(self) -> Self {
        Self { alpha: 1.0, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Category colours, in the order they are handed out.
pub const PALETTE: [Color; 8] = [
    Color::rgba(0, 136, 254, 0.8),
    Color::rgba(0, 196, 159, 0.8),
    Color::rgba(255, 187, 40, 0.8),
    Color::rgba(255, 128, 66, 0.8),
    Color::rgba(136, 132, 216, 0.8),
    Color::rgba(130, 202, 157, 0.8),
    Color::rgba(255, 198, 88, 0.8),
    Color::rgba(255, 124, 124, 0.8),
];

/// Colour of the daily expense scatter points.
pub const SCATTER_COLOR: Color = Color::rgba(136, 132, 216, 0.6);

/// Colour of the monthly expense bars.
pub const BAR_COLOR: Color = Color::rgba(0, 196, 159, 0.8);

/// The colour for the `index`-th category, cycling through [PALETTE].
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
