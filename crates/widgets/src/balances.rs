use sccs_core::{amount::{format_units, TOKEN_DECIMALS}, event::Message, state::AppState, Token};
use sccs_theme::Theme;
use iced::{
    widget::{column, container, row, text, Space},
    Background, Element, Length,
};

use crate::{clock::ClockWidget, panel};

/// Clock plus the connected account's token balances.
#[derive(Debug, Default)]
pub struct BalancesWidget {
    clock: ClockWidget,
}

impl BalancesWidget {
    pub fn new() -> Self {
        Self { clock: ClockWidget::new() }
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let rows = Token::ALL.into_iter().map(|token| balance_row(state, token, theme));

        let content = column![
            panel::caption("Current Time", theme),
            self.clock.view(state, theme),
            Space::new().height(Length::Fixed(16.0)),
            panel::caption("Balances", theme),
            iced::widget::Column::with_children(rows).spacing(8),
        ]
        .spacing(8);

        panel::panel(None, content, theme)
    }
}

fn balance_row<'a>(state: &AppState, token: Token, theme: &Theme) -> Element<'a, Message> {
    let amount = format_units(state.balances.get(token), TOKEN_DECIMALS);
    let bg     = theme.input.to_iced();
    let radius = theme.border_radius * 0.75;

    container(
        row![
            text(token.symbol()).size(theme.font_size),
            Space::new().width(Length::Fill),
            text(amount)
                .size(theme.font_size)
                .color(theme.accent.to_iced()),
        ],
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |_: &iced::Theme| container::Style {
        background: Some(Background::Color(bg)),
        border: iced::Border { radius: radius.into(), ..Default::default() },
        ..Default::default()
    })
    .into()
}
