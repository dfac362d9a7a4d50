use sccs_core::{Sample, Series};

use crate::surface::Point;

/// Smallest value span used for vertical scaling, so a flat series still maps.
pub const MIN_VALUE_SPAN: f64 = 1e-12;

/// Round `v` to the nearest multiple of `grid`.  A zero grid disables snapping.
pub fn snap(v: f64, grid: u32) -> f64 {
    if grid == 0 {
        return v;
    }
    let grid = grid as f64;
    (v / grid).round() * grid
}

/// Maps samples of one series onto pixel coordinates of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    min_t:   i64,
    t_span:  f64,
    min_v:   f64,
    v_span:  f64,
    width:   f64,
    height:  f64,
    padding: f64,
    grid:    u32,
}

impl ChartGeometry {
    /// Fit the chart to `series`; `None` for an empty series.
    ///
    /// Time runs from the first to the last sample (the series is kept sorted);
    /// values span the observed minimum to maximum.
    pub fn fit(series: &Series, width: u32, height: u32, grid: u32, padding: u32) -> Option<Self> {
        let min_t = series.first()?.timestamp;
        let max_t = series.last()?.timestamp;
        let (min_v, max_v) = series.value_range()?;

        Some(Self {
            min_t,
            t_span:  (max_t.saturating_sub(min_t) as f64).max(1.0),
            min_v,
            v_span:  (max_v - min_v).max(MIN_VALUE_SPAN),
            width:   width as f64,
            height:  height as f64,
            padding: padding as f64,
            grid,
        })
    }

    /// Snapped horizontal position of `timestamp`.
    pub fn x(&self, timestamp: i64) -> f32 {
        let frac = timestamp.saturating_sub(self.min_t) as f64 / self.t_span;
        let x = self.padding + frac * (self.width - 2.0 * self.padding);
        snap(x, self.grid) as f32
    }

    /// Snapped vertical position of `value`; larger values sit higher.
    pub fn y(&self, value: f64) -> f32 {
        let frac = (value - self.min_v) / self.v_span;
        let y = self.padding + (1.0 - frac) * (self.height - 2.0 * self.padding);
        snap(y, self.grid) as f32
    }

    pub fn project(&self, sample: &Sample) -> Point {
        Point::new(self.x(sample.timestamp), self.y(sample.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(samples: &[(i64, f64)]) -> Series {
        let mut series = Series::default();
        for &(t, v) in samples {
            series.push(Sample::new(t, v));
        }
        series
    }

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        assert_eq!(snap(10.0, 6), 12.0);
        assert_eq!(snap(8.9, 6), 6.0);
        assert_eq!(snap(290.0, 6), 288.0);
        assert_eq!(snap(7.3, 0), 7.3);
    }

    #[test]
    fn empty_series_has_no_geometry() {
        assert!(ChartGeometry::fit(&Series::default(), 300, 260, 6, 10).is_none());
    }

    #[test]
    fn endpoints_land_on_padding() {
        let s = series(&[(1000, 1.10), (2000, 1.12), (3000, 1.11)]);
        let geo = ChartGeometry::fit(&s, 300, 260, 6, 10).unwrap();

        assert!((geo.x(1000) - 10.0).abs() <= 6.0);
        assert!((geo.x(3000) - 290.0).abs() <= 6.0);
        // Highest value at the top, lowest at the bottom.
        assert!((geo.y(1.12) - 10.0).abs() <= 6.0);
        assert!((geo.y(1.10) - 250.0).abs() <= 6.0);
    }

    #[test]
    fn coordinates_are_grid_multiples() {
        let s = series(&[(0, 0.5), (7, 0.9), (13, 0.1)]);
        let geo = ChartGeometry::fit(&s, 301, 199, 6, 10).unwrap();
        for sample in s.iter() {
            let p = geo.project(sample);
            assert_eq!(p.x % 6.0, 0.0);
            assert_eq!(p.y % 6.0, 0.0);
        }
    }

    #[test]
    fn degenerate_series_stays_finite() {
        let s = series(&[(5, 2.0)]);
        let geo = ChartGeometry::fit(&s, 300, 260, 6, 10).unwrap();
        let p = geo.project(s.last().unwrap());
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.x, 12.0);
    }
}
