use chrono::{DateTime, Local};
use iced::{
    widget::{row, text, Space},
    Alignment, Element, Length,
};
use sccs_core::{event::Message, state::AppState};
use sccs_theme::Theme;
use std::fmt::Write;

const FALLBACK_TIME: &str = "%H:%M:%S";
const FALLBACK_DATE: &str = "%Y-%m-%d";

/// Local wall-clock time, refreshed by `Message::Tick`.
#[derive(Debug, Default)]
pub struct ClockWidget;

impl ClockWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let time = stamp(&state.time, &theme.clock_format, FALLBACK_TIME);
        let date = stamp(&state.time, &theme.date_format, FALLBACK_DATE);

        row![
            text(time)
                .size(theme.font_size * 1.6)
                .color(theme.accent.to_iced()),
            Space::new().width(Length::Fill),
            text(date)
                .size(theme.font_size - 1.0)
                .color(theme.foreground.with_alpha(0.6).to_iced()),
        ]
        .align_y(Alignment::Center)
        .into()
    }
}

/// Format `time` with a user-supplied `strftime` pattern.
///
/// chrono reports a bad pattern as a `fmt::Error` at display time, which
/// `to_string` would turn into a panic; fall back to `fallback` instead.
fn stamp(time: &DateTime<Local>, pattern: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_ok() {
        return out;
    }
    time.format(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 12, 5, 7).unwrap()
    }

    #[test]
    fn formats_with_configured_pattern() {
        assert_eq!(stamp(&noon(), "%H:%M", FALLBACK_TIME), "12:05");
        assert_eq!(stamp(&noon(), "%d/%m/%Y", FALLBACK_DATE), "09/03/2024");
    }

    #[test]
    fn invalid_pattern_falls_back() {
        assert_eq!(stamp(&noon(), "%Q", FALLBACK_TIME), "12:05:07");
    }
}
