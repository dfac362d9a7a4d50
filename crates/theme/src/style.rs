use crate::colors::Color;

/// Colours of the pixel rate chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub background: Color,
    pub grid:       Color,
    /// Base colour of the line; the glow and crisp passes set their own alpha.
    pub line:       Color,
    pub label:      Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(6, 9, 14, 1.0),
            grid:       Color::from_rgba8(80, 255, 120, 0.05),
            line:       Color::from_rgba8(120, 255, 120, 1.0),
            label:      Color::from_rgba8(166, 255, 176, 1.0),
        }
    }
}
