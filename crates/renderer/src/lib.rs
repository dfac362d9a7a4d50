//! Pixel-style rate chart.
//!
//! [`render_into`] draws a [`Series`] onto any [`Surface`]: dark background,
//! faint pixel grid, a glowing polyline through grid-snapped points and the
//! latest value in the top-left corner.  [`Raster`] is the plotters bitmap
//! surface the dashboard displays.

pub mod geometry;
pub mod raster;
pub mod surface;

pub use geometry::ChartGeometry;
pub use raster::Raster;
pub use surface::{Point, Stroke, Surface};

use sccs_config::ChartConfig;
use sccs_core::Series;
use sccs_theme::ChartPalette;

/// Everything about the chart's look that doesn't come from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Grid-snap granularity and grid line spacing, in pixels.
    pub grid:         u32,
    /// Inset of the plotted line from every edge.
    pub padding:      u32,
    pub palette:      ChartPalette,
    /// Wide, faint pass drawn under the line.
    pub glow:         Stroke,
    /// Narrow pass drawn on top.
    pub line:         Stroke,
    pub pair_label:   String,
    pub decimals:     usize,
    /// Top-left corner of the value label.
    pub label_origin: Point,
    /// Label font size in pixels.
    pub label_size:   f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default(), ChartPalette::default())
    }
}

impl ChartStyle {
    pub fn from_config(cfg: &ChartConfig, palette: ChartPalette) -> Self {
        Self {
            grid:         cfg.grid,
            padding:      cfg.padding,
            palette,
            glow:         Stroke { color: palette.line.with_alpha(0.18), width: 10.0 },
            line:         Stroke { color: palette.line.with_alpha(0.9), width: 2.0 },
            pair_label:   cfg.pair_label.clone(),
            decimals:     cfg.decimals,
            label_origin: Point::new(12.0, 8.0),
            label_size:   14.0,
        }
    }

    /// Label text for the most recent value, e.g. `Rate SGD/HKD: 1.110000`.
    pub fn label(&self, value: f64) -> String {
        format!("{}: {:.*}", self.pair_label, self.decimals, value)
    }
}

/// Render `series` onto a fresh `width` × `height` raster.
pub fn render(series: &Series, width: u32, height: u32, style: &ChartStyle) -> Raster {
    let mut raster = Raster::new(width, height);
    render_into(series, &mut raster, style);
    raster
}

/// Draw `series` onto `surface`, replacing its previous content.
///
/// An empty series leaves only the background; a zero-sized surface is left
/// untouched.
pub fn render_into<S: Surface + ?Sized>(series: &Series, surface: &mut S, style: &ChartStyle) {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return;
    }

    surface.clear(style.palette.background);

    let Some(geometry) = ChartGeometry::fit(series, width, height, style.grid, style.padding) else {
        return;
    };

    draw_grid(surface, style.grid, style.palette);

    let points: Vec<Point> = series.iter().map(|s| geometry.project(s)).collect();
    surface.stroke_polyline(&points, style.glow);
    surface.stroke_polyline(&points, style.line);

    if let Some(last) = series.last() {
        surface.fill_text(
            &style.label(last.value),
            style.label_origin,
            style.label_size,
            style.palette.label,
        );
    }

    tracing::trace!(samples = points.len(), width, height, "rate chart rendered");
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, grid: u32, palette: ChartPalette) {
    if grid == 0 {
        return;
    }

    let (w, h) = (surface.width() as f32, surface.height() as f32);
    let stroke = Stroke { color: palette.grid, width: 1.0 };

    for x in (0..surface.width()).step_by(grid as usize) {
        let x = x as f32 + 0.5;
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, h), stroke);
    }
    for y in (0..surface.height()).step_by(grid as usize) {
        let y = y as f32 + 0.5;
        surface.stroke_line(Point::new(0.0, y), Point::new(w, y), stroke);
    }
}
