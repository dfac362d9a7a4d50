use sccs_core::{event::Message, Series};
use sccs_renderer::{render, ChartStyle};
use sccs_theme::Theme;
use iced::{
    widget::{center, container, image, text},
    Element, Length,
};

use crate::panel;

/// The pixel rate chart.
///
/// Holds the last rendered raster as an image handle; [`ChartWidget::refresh`]
/// re-renders it and is called only when the series changes, so drawing the
/// view never touches the renderer.
#[derive(Debug)]
pub struct ChartWidget {
    width:  u32,
    height: u32,
    image:  Option<image::Handle>,
}

impl ChartWidget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, image: None }
    }

    /// Re-render `series` at `width` × `height`.  An empty series clears the
    /// image so the loading placeholder shows.
    pub fn refresh(&mut self, series: &Series, style: &ChartStyle, width: u32, height: u32) {
        self.width  = width;
        self.height = height;

        if series.is_empty() || width == 0 || height == 0 {
            self.image = None;
            return;
        }

        let raster = render(series, width, height, style);
        self.image = Some(image::Handle::from_rgba(width, height, raster.into_rgba()));
    }

    pub fn is_loading(&self) -> bool {
        self.image.is_none()
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let (w, h) = (self.width as f32, self.height as f32);

        let body: Element<'a, Message> = match &self.image {
            Some(handle) => image(handle.clone())
                .filter_method(image::FilterMethod::Nearest)
                .width(Length::Fixed(w))
                .height(Length::Fixed(h))
                .into(),
            None => container(center(
                text("Loading rate data…")
                    .size(theme.font_size)
                    .color(theme.chart.label.with_alpha(0.7).to_iced()),
            ))
            .width(Length::Fixed(w))
            .height(Length::Fixed(h))
            .into(),
        };

        panel::panel(None, center(body), theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sccs_core::Sample;

    #[test]
    fn placeholder_until_first_sample() {
        let style = ChartStyle::default();
        let mut chart = ChartWidget::new(300, 260);
        assert!(chart.is_loading());

        chart.refresh(&Series::default(), &style, 300, 260);
        assert!(chart.is_loading());

        let mut series = Series::default();
        series.push(Sample::new(1000, 1.1));
        chart.refresh(&series, &style, 300, 260);
        assert!(!chart.is_loading());
    }
}
