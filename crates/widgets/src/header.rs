use sccs_core::{event::Message, state::AppState};
use sccs_theme::Theme;
use iced::{
    widget::{button, container, row, text, Space},
    Alignment, Background, Border, Element, Length,
};

/// Title, wallet connection and the KYC toggle.
#[derive(Debug, Default)]
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let title = row![
            text("SCCS").size(theme.font_size * 1.7).color(theme.accent.to_iced()),
            text(" - StableCoin CyberSpace").size(theme.font_size * 1.7),
        ];

        let wallet: Element<'a, Message> = match state.short_account() {
            Some(short) => {
                let border = theme.accent.with_alpha(0.3).to_iced();
                let bg     = theme.panel.with_alpha(0.4).to_iced();
                let radius = theme.border_radius * 0.75;

                container(row![
                    text("Connected: ").size(theme.font_size),
                    text(short).size(theme.font_size).color(theme.accent.to_iced()),
                ])
                .padding([8, 16])
                .style(move |_: &iced::Theme| container::Style {
                    background: Some(Background::Color(bg)),
                    border: Border { color: border, width: 1.0, radius: radius.into() },
                    ..Default::default()
                })
                .into()
            }
            None => button(text("Connect Wallet").size(theme.font_size))
                .on_press_maybe((!state.busy).then_some(Message::ConnectRequested))
                .padding([8, 16])
                .style(button::primary)
                .into(),
        };

        let kyc_label = if state.kyc_verified { "KYC Verified" } else { "Verify Identity (KYC)" };
        let kyc = button(text(kyc_label).size(theme.font_size))
            .on_press(Message::KycRequested)
            .padding([8, 16])
            .style(button::secondary);

        row![
            title,
            Space::new().width(Length::Fill),
            row![wallet, kyc].spacing(12).align_y(Alignment::Center),
        ]
        .align_y(Alignment::Center)
        .into()
    }
}
