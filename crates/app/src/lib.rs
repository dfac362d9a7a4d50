//! Dashboard window for `sccs`.
//!
//! Owns the Iced application loop and wires together all background tasks:
//! - Oracle rate feed (chart samples)
//! - Chain tasks for connect, balances, payments and swaps
//! - Config file watcher (live reload on change)
//! - 1-second timer (clock)

use chrono::Local;
use futures::{channel::mpsc::Sender, SinkExt};
use iced::{
    widget::{column, container, row, scrollable},
    Element, Length, Subscription, Task,
};
use sccs_chain::{actions, ChainClient, SwapParams};
use sccs_config::{default_path, load as load_config, ConfigWatcher, SccsConfig};
use sccs_core::{Message, SccsError};
use sccs_core::state::AppState;
use sccs_feed::{spawn_rate_feed, RetryPolicy};
use sccs_renderer::ChartStyle;
use sccs_theme::Theme;
use sccs_widgets::{
    BalancesWidget, ChartWidget, HeaderWidget, PayWidget, StatusWidget, SwapWidget,
};
use std::time::Duration;
use tracing::{error, info, warn};

const WINDOW_SIZE: (f32, f32) = (1100.0, 860.0);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title(Dashboard::title)
        .subscription(Dashboard::subscription)
        .style(Dashboard::style)
        .window_size(WINDOW_SIZE)
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    state:       AppState,
    config:      SccsConfig,
    theme:       Theme,
    chart_style: ChartStyle,
    swap_params: Result<SwapParams, String>,
    /// `Err` carries why no client could be built (shown on connect).
    client:      Result<ChainClient, String>,
    header:      HeaderWidget,
    pay:         PayWidget,
    chart:       ChartWidget,
    balances:    BalancesWidget,
    swap:        SwapWidget,
    status:      StatusWidget,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_else(|e| {
            warn!("Config load failed, using defaults: {e}");
            SccsConfig::default()
        });
        let theme = Theme::from_config(&config.theme);

        let mut dashboard = Self {
            state:       AppState::new(config.rate.history),
            chart_style: ChartStyle::from_config(&config.chart, theme.chart),
            swap_params: SwapParams::from_config(&config.swap).map_err(|e| e.to_string()),
            client:      build_client(&config),
            chart:       ChartWidget::new(config.chart.width, config.chart.height),
            header:      HeaderWidget::new(),
            pay:         PayWidget::new(),
            balances:    BalancesWidget::new(),
            swap:        SwapWidget::new(),
            status:      StatusWidget::new(),
            config,
            theme,
        };

        if let Err(e) = &dashboard.client {
            dashboard.state.notify_error(e.clone());
        }

        (dashboard, Task::none())
    }

    fn title(&self) -> String {
        String::from("SCCS - StableCoin CyberSpace")
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.state.time = Local::now();
            }

            // ── Wallet ────────────────────────────────────────────────────────
            Message::ConnectRequested => {
                let client = match self.client() {
                    Ok(c) => c,
                    Err(e) => return self.fail(e),
                };
                let preferred = self.config.network.account;
                self.state.notify_info("Connecting…");

                return Task::perform(
                    async move { client.connect(preferred).await.map_err(|e| e.to_string()) },
                    Message::Connected,
                );
            }
            Message::Connected(Ok(account)) => {
                self.state.account = Some(account);
                self.state.notify_info(format!("Connected to {account}"));
                return self.refresh_balances();
            }
            Message::Connected(Err(e)) => {
                return self.fail(format!("Connection failed: {e}"));
            }
            Message::KycRequested => {
                self.state.kyc_verified = true;
                self.state.notify_info("KYC completed (demo).");
            }

            // ── Balances ──────────────────────────────────────────────────────
            Message::RefreshRequested => return self.refresh_balances(),
            Message::BalancesUpdated(Ok(balances)) => {
                self.state.balances = balances;
            }
            Message::BalancesUpdated(Err(e)) => {
                return self.fail(format!("Balance refresh failed: {e}"));
            }

            // ── Rate feed ─────────────────────────────────────────────────────
            Message::RateObserved(obs) => {
                self.state.record_rate(obs);
                self.redraw_chart();
            }

            // ── Pay ───────────────────────────────────────────────────────────
            Message::PayTokenSelected(token) => self.state.pay.token = token,
            Message::PayRecipientChanged(to) => self.state.pay.recipient = to,
            Message::PayAmountChanged(amount) => self.state.pay.amount = amount,
            Message::PayRequested => {
                let (account, order) = match self.state.payment_order() {
                    Ok(o) => o,
                    Err(e) => return self.fail(e.to_string()),
                };
                let client = match self.client() {
                    Ok(c) => c,
                    Err(e) => return self.fail(e),
                };
                self.state.busy = true;

                return Task::perform(
                    async move {
                        actions::pay(&client, account, order)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::PaymentFinished,
                );
            }
            Message::PaymentFinished(result) => {
                self.state.busy = false;
                match result {
                    Ok(out) => {
                        self.state.pay.amount.clear();
                        self.state.notify_info(format!("{} sent. Tx: {}", out.token, out.tx_hash));
                        return self.refresh_balances();
                    }
                    Err(e) => return self.fail(format!("Payment failed: {e}")),
                }
            }

            // ── Swap ──────────────────────────────────────────────────────────
            Message::SwapSideSelected(side) => self.state.swap.side = side,
            Message::SwapAmountChanged(amount) => self.state.swap.amount = amount,
            Message::SwapRequested => {
                let (account, order) = match self.state.swap_order() {
                    Ok(o) => o,
                    Err(e) => return self.fail(e.to_string()),
                };
                let params = match &self.swap_params {
                    Ok(p) => *p,
                    Err(e) => return self.fail(e.clone()),
                };
                let client = match self.client() {
                    Ok(c) => c,
                    Err(e) => return self.fail(e),
                };
                self.state.busy = true;

                return Task::perform(
                    async move {
                        actions::swap(&client, account, order, params)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::SwapFinished,
                );
            }
            Message::SwapFinished(result) => {
                self.state.busy = false;
                match result {
                    Ok(out) => {
                        use sccs_core::amount::{format_units, TOKEN_DECIMALS};
                        self.state.notify_info(format!(
                            "Swap completed: received {} {} (fee {}). Tx: {}",
                            format_units(out.amount_out, TOKEN_DECIMALS),
                            out.side.token_out(),
                            format_units(out.fee, TOKEN_DECIMALS),
                            out.tx_hash,
                        ));
                        return self.refresh_balances();
                    }
                    Err(e) => return self.fail(format!("Swap failed: {e}")),
                }
            }

            // ── Config ────────────────────────────────────────────────────────
            Message::ConfigReloaded => self.reload_config(),
        }

        Task::none()
    }

    fn client(&self) -> Result<ChainClient, String> {
        self.client.clone()
    }

    fn refresh_balances(&self) -> Task<Message> {
        let (Some(account), Ok(client)) = (self.state.account, self.client()) else {
            return Task::none();
        };

        Task::perform(
            async move {
                actions::refresh_balances(&client, account)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::BalancesUpdated,
        )
    }

    /// Log `message` and show it in the status line.
    fn fail(&mut self, message: impl Into<String>) -> Task<Message> {
        let message = message.into();
        warn!("{message}");
        self.state.notify_error(message);
        Task::none()
    }

    fn redraw_chart(&mut self) {
        let (w, h) = (self.config.chart.width, self.config.chart.height);
        self.chart.refresh(&self.state.series, &self.chart_style, w, h);
    }

    fn reload_config(&mut self) {
        let cfg = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return;
            }
        };

        info!("Config reloaded");
        self.theme       = Theme::from_config(&cfg.theme);
        self.chart_style = ChartStyle::from_config(&cfg.chart, self.theme.chart);
        self.swap_params = SwapParams::from_config(&cfg.swap).map_err(|e| e.to_string());
        self.client      = build_client(&cfg);
        self.state.series.set_capacity(cfg.rate.history);
        self.config = cfg;
        self.redraw_chart();
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = self.theme.gap as f32;

        let middle = row![
            container(self.chart.view(&self.theme)).width(Length::FillPortion(2)),
            container(self.balances.view(&self.state, &self.theme)).width(Length::FillPortion(1)),
        ]
        .spacing(gap);

        let content = column![
            self.header.view(&self.state, &self.theme),
            self.pay.view(&self.state, &self.theme),
            middle,
            self.swap.view(&self.state, &self.theme),
            self.status.view(&self.state, &self.theme),
        ]
        .spacing(gap)
        .padding(24)
        .width(Length::Fill);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick);

        Subscription::batch([
            tick,
            Subscription::run(rate_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  Dropping the subscription drops the
// stream, which drops the feed receiver and stops its polling task.

/// Polls the oracle and forwards every reading as `RateObserved`.
fn rate_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let config = load_config(default_path()).unwrap_or_default();

        match build_client(&config) {
            Ok(client) => {
                let interval = Duration::from_millis(config.rate.poll_interval_ms);
                let retry    = RetryPolicy::from_config(&config.rate);
                let mut rx   = spawn_rate_feed(client, interval, retry);

                info!(?interval, "Rate feed started");
                while let Some(obs) = rx.recv().await {
                    if sender.send(Message::RateObserved(obs)).await.is_err() {
                        break;
                    }
                }
            }
            Err(e) => error!("Rate feed unavailable: {e}"),
        }

        // Nothing more to report; stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!(path = %watcher.path().display(), "Watching config");

        while rx.recv().await.is_some() {
            if sender.send(Message::ConfigReloaded).await.is_err() {
                break;
            }
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_client(config: &SccsConfig) -> Result<ChainClient, String> {
    ChainClient::new(&config.network, &config.contracts).map_err(|e: SccsError| {
        warn!("Chain client unavailable: {e}");
        e.to_string()
    })
}
