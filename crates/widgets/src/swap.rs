use sccs_core::{event::Message, state::AppState, SwapSide};
use sccs_theme::Theme;
use iced::{
    widget::{button, column, pick_list, row, text, text_input},
    Alignment, Element, Length,
};

use crate::panel;

const NOTICE: &str = "Fees are deducted from the output token; the transaction will be \
rejected if you haven't completed identity verification (KYC) or if your account is \
frozen due to illicit activity.";

/// Swap form plus the balance refresh button.
#[derive(Debug, Default)]
pub struct SwapWidget;

impl SwapWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let side = pick_list(SwapSide::ALL, Some(state.swap.side), Message::SwapSideSelected)
            .padding(8);

        let amount = text_input("Amount (6 decimals)", &state.swap.amount)
            .on_input(Message::SwapAmountChanged)
            .padding(8)
            .width(Length::Fill);

        let swap = button(text("Swap").size(theme.font_size))
            .on_press_maybe(state.can_swap().then_some(Message::SwapRequested))
            .padding([8, 16])
            .style(button::primary);

        let refresh = button(text("Refresh").size(theme.font_size))
            .on_press_maybe(state.account.is_some().then_some(Message::RefreshRequested))
            .padding([8, 12])
            .style(button::secondary);

        let form = column![
            row![side, amount, swap, refresh]
                .spacing(12)
                .align_y(Alignment::Center),
            panel::footnote(NOTICE, theme),
        ]
        .spacing(8);

        panel::panel(Some("Swap"), form, theme)
    }
}
