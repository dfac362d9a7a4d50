use sccs_core::Message;
use sccs_theme::Theme;
use iced::{
    widget::{column, container, text},
    Background, Border, Element, Length,
};

/// Rounded, faintly outlined card holding one section of the dashboard.
pub fn panel<'a>(
    title: Option<&'a str>,
    content: impl Into<Element<'a, Message>>,
    theme: &Theme,
) -> Element<'a, Message> {
    let background = theme.panel.with_alpha(0.6).to_iced();
    let border     = theme.accent.with_alpha(0.2).to_iced();
    let radius     = theme.border_radius;

    let body: Element<'a, Message> = match title {
        Some(title) => column![caption(title, theme), content.into()]
            .spacing(12)
            .into(),
        None => content.into(),
    };

    container(body)
        .padding(theme.padding)
        .width(Length::Fill)
        .style(move |_: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color:  border,
                width:  1.0,
                radius: radius.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Small dimmed heading, e.g. "Pay" or "Balances".
pub fn caption<'a>(label: &'a str, theme: &Theme) -> Element<'a, Message> {
    text(label)
        .size(theme.font_size - 1.0)
        .color(theme.foreground.with_alpha(0.7).to_iced())
        .into()
}

/// Fine print under a form.
pub fn footnote<'a>(label: &'a str, theme: &Theme) -> Element<'a, Message> {
    text(label)
        .size(theme.font_size - 3.0)
        .color(theme.foreground.with_alpha(0.5).to_iced())
        .into()
}
