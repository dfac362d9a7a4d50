use sccs_core::{
    event::Message,
    state::{AppState, NoticeLevel},
};
use sccs_theme::Theme;
use iced::{widget::text, Element};

/// One line of feedback: in-flight transaction, last result or last error.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl StatusWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let (label, color) = if state.busy {
            ("Waiting for transaction…", theme.foreground.with_alpha(0.7))
        } else {
            match &state.notice {
                Some(n) if n.level == NoticeLevel::Error => (n.text.as_str(), theme.error),
                Some(n) => (n.text.as_str(), theme.accent),
                None => ("", theme.foreground),
            }
        };

        text(label)
            .size(theme.font_size - 1.0)
            .color(color.to_iced())
            .into()
    }
}
