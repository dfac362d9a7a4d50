use plotters::{
    backend::BitMapBackend,
    coord::Shift,
    drawing::{DrawingArea, IntoDrawingArea},
    element::{Circle, PathElement, Text},
    style::{
        text_anchor::{HPos, Pos, VPos},
        RGBAColor, RGBColor, ShapeStyle, TextStyle,
    },
};
use sccs_theme::Color;
use std::fmt::Display;
use tracing::debug;

use crate::surface::{Point, Stroke, Surface};

/// RGB8 bitmap, row-major, drawn through plotters' [`BitMapBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width:  u32,
    height: u32,
    rgb:    Vec<u8>,
}

impl Raster {
    /// Black raster of the given size.  Either dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgb: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rgb
    }

    /// Opaque RGBA8 copy, the layout image widgets take.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgb
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.rgb, (self.width, self.height)).into_drawing_area()
    }
}

impl Surface for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        if self.is_empty() {
            return;
        }
        let [r, g, b, _] = color.to_rgba8();
        logged("clear", self.area().fill(&RGBColor(r, g, b)));
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        if self.is_empty() || points.is_empty() || stroke.width <= 0.0 {
            return;
        }

        let style = ShapeStyle {
            color:        rgba(stroke.color),
            filled:       false,
            stroke_width: stroke.width.round().max(1.0) as u32,
        };
        let coords: Vec<(i32, i32)> = points.iter().map(|&p| coord(p)).collect();

        let area = self.area();
        let result = if coords.len() == 1 {
            // A lone point is drawn as a dot of the stroke width.
            let radius = (style.stroke_width / 2).max(1);
            area.draw(&Circle::new(coords[0], radius, style.filled()))
        } else {
            area.draw(&PathElement::new(coords, style))
        };
        logged("stroke", result);
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: Color) {
        if self.is_empty() || text.is_empty() {
            return;
        }

        let fill = rgba(color);
        let style = TextStyle::from(("monospace", size as f64))
            .color(&fill)
            .pos(Pos::new(HPos::Left, VPos::Top));

        let at = coord(origin);
        logged("text", self.area().draw(&Text::new(text, at, style)));
    }
}

fn rgba(color: Color) -> RGBAColor {
    let [r, g, b, _] = color.to_rgba8();
    RGBAColor(r, g, b, color.a as f64)
}

fn coord(p: Point) -> (i32, i32) {
    (p.x.floor() as i32, p.y.floor() as i32)
}

/// Drawing never fails the render; a backend error (e.g. no system font for
/// the label) only costs that one element.
fn logged<E: Display>(what: &str, result: Result<(), E>) {
    if let Err(e) = result {
        debug!("raster {what} skipped: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    #[test]
    fn clear_fills_every_pixel() {
        let mut raster = Raster::new(4, 3);
        raster.clear(RED);
        assert!(raster.as_bytes().chunks_exact(3).all(|px| px == [255, 0, 0]));
    }

    #[test]
    fn one_pixel_line_covers_one_column() {
        let mut raster = Raster::new(5, 5);
        raster.clear(BLACK);
        raster.stroke_line(
            Point::new(2.5, 0.0),
            Point::new(2.5, 4.0),
            Stroke { color: RED, width: 1.0 },
        );

        for y in 0..5 {
            assert_eq!(raster.pixel(2, y), Some([255, 0, 0]));
            assert_eq!(raster.pixel(1, y), Some([0, 0, 0]));
            assert_eq!(raster.pixel(3, y), Some([0, 0, 0]));
        }
    }

    #[test]
    fn translucent_stroke_blends_with_background() {
        let mut raster = Raster::new(20, 20);
        raster.clear(BLACK);
        raster.stroke_polyline(
            &[Point::new(2.0, 10.0), Point::new(18.0, 10.0)],
            Stroke { color: RED.with_alpha(0.5), width: 4.0 },
        );

        let [r, g, b] = raster.pixel(6, 10).unwrap();
        assert!((100..=160).contains(&r), "got {r}");
        assert_eq!((g, b), (0, 0));
        assert_eq!(raster.pixel(6, 2), Some([0, 0, 0]));
    }

    #[test]
    fn single_point_draws_a_dot() {
        let mut raster = Raster::new(10, 10);
        raster.clear(BLACK);
        raster.stroke_polyline(&[Point::new(5.0, 5.0)], Stroke { color: RED, width: 4.0 });
        assert_eq!(raster.pixel(5, 5), Some([255, 0, 0]));
        assert_eq!(raster.pixel(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn offscreen_geometry_is_clipped() {
        let mut raster = Raster::new(4, 4);
        raster.stroke_line(
            Point::new(-50.0, -50.0),
            Point::new(-10.0, -10.0),
            Stroke { color: RED, width: 2.0 },
        );
        assert!(raster.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn text_never_fails_the_raster() {
        // Renders with a system monospace font, or is skipped without one.
        let mut raster = Raster::new(120, 24);
        raster.clear(BLACK);
        raster.fill_text("Rate SGD/HKD: 1.110000", Point::new(2.0, 2.0), 14.0, RED);
        assert_eq!(raster.as_bytes().len(), 120 * 24 * 3);
    }

    #[test]
    fn rgba_export_is_opaque() {
        let mut raster = Raster::new(2, 1);
        raster.clear(RED);
        assert_eq!(raster.into_rgba(), vec![255, 0, 0, 255, 255, 0, 0, 255]);
    }

    #[test]
    fn zero_sized_raster_ignores_drawing() {
        let mut raster = Raster::new(0, 7);
        raster.clear(RED);
        raster.stroke_line(Point::new(0.0, 0.0), Point::new(3.0, 3.0), Stroke { color: RED, width: 2.0 });
        raster.fill_text("ok", Point::new(0.0, 0.0), 14.0, RED);
        assert!(raster.as_bytes().is_empty());
        assert_eq!(raster.pixel(0, 0), None);
    }
}
