use sccs_theme::Color;

/// A position on a surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Line colour and thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Drawing target for the chart renderer.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.stroke_polyline(&[from, to], stroke);
    }

    /// Stroke the connected path through `points`; a single point is a dot.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Draw `text` at `size` pixels with its top-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: Color);
}
