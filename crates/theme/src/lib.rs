pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::ChartPalette;

use sccs_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub foreground:    Color,
    pub accent:        Color,
    pub panel:         Color,
    pub input:         Color,
    pub error:         Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
    /// `strftime` format string for the clock time display.
    pub clock_format:  String,
    /// `strftime` format string for the clock date display.
    pub date_format:   String,
    pub chart:         ChartPalette,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let chart_default = ChartPalette::default();

        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::BLACK),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::LIME),
            panel:         Color::from_hex(&cfg.panel).unwrap_or(Color::BLACK),
            input:         Color::from_hex(&cfg.input).unwrap_or(Color::BLACK),
            error:         Color::from_hex(&cfg.error).unwrap_or(Color::WHITE),
            font_size:     cfg.font_size,
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
            clock_format:  cfg.clock_format.clone(),
            date_format:   cfg.date_format.clone(),
            chart: ChartPalette {
                background: Color::from_hex(&cfg.chart_background).unwrap_or(chart_default.background),
                grid:       Color::from_hex(&cfg.chart_grid).unwrap_or(chart_default.grid),
                line:       Color::from_hex(&cfg.chart_line).unwrap_or(chart_default.line),
                label:      Color::from_hex(&cfg.chart_label).unwrap_or(chart_default.label),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chart_palette_matches_config_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.chart.background.to_rgba8(), [6, 9, 14, 255]);
        assert_eq!(theme.chart.line.to_rgba8(), [120, 255, 120, 255]);
    }

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            accent: "nope".into(),
            chart_line: "#12".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.accent, Color::LIME);
        assert_eq!(theme.chart.line, ChartPalette::default().line);
    }
}
