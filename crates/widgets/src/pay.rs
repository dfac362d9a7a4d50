use sccs_core::{event::Message, state::AppState, Token};
use sccs_theme::Theme;
use iced::{
    widget::{button, column, pick_list, row, text, text_input},
    Alignment, Element, Length,
};

use crate::panel;

const NOTICE: &str = "The transaction will be rejected if either party has not completed \
identity verification (KYC), or is restricted due to suspicious or illicit activity.";

/// Token transfer form.
#[derive(Debug, Default)]
pub struct PayWidget;

impl PayWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let token = pick_list(Token::ALL, Some(state.pay.token), Message::PayTokenSelected)
            .padding(8);

        let recipient = text_input("Recipient address (0x...)", &state.pay.recipient)
            .on_input(Message::PayRecipientChanged)
            .padding(8)
            .width(Length::FillPortion(3));

        let amount = text_input("Amount (6 decimals)", &state.pay.amount)
            .on_input(Message::PayAmountChanged)
            .padding(8)
            .width(Length::FillPortion(2));

        let send = button(text("Send").size(theme.font_size))
            .on_press_maybe(state.can_pay().then_some(Message::PayRequested))
            .padding([8, 16])
            .style(button::primary);

        let form = column![
            row![token, recipient, amount, send]
                .spacing(12)
                .align_y(Alignment::Center),
            panel::footnote(NOTICE, theme),
        ]
        .spacing(8);

        panel::panel(Some("Pay"), form, theme)
    }
}
