use alloy_primitives::Address;
use chrono::{DateTime, Local};

use crate::{
    error::{Result, SccsError},
    market::{Balances, RateObservation, SwapSide, Token},
    order::{parse_address, PaymentOrder, SwapOrder},
    series::{Sample, Series},
};

/// Central application state.  Every panel renders from this snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Account transactions are sent from, once connected.
    pub account: Option<Address>,
    /// Demo identity verification flag; gates swaps and payments.
    pub kyc_verified: bool,
    /// Latest balances of `account`.
    pub balances: Balances,
    /// Rate history feeding the chart.
    pub series: Series,
    /// Current local time (updated every second).
    pub time: DateTime<Local>,
    pub pay: PayForm,
    pub swap: SwapForm,
    /// A transaction is in flight; action buttons are disabled.
    pub busy: bool,
    /// Latest user-visible notice.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::series::DEFAULT_CAPACITY)
    }
}

/// Inputs of the "Pay" panel.
#[derive(Debug, Clone, Default)]
pub struct PayForm {
    pub token:     Token,
    pub recipient: String,
    pub amount:    String,
}

/// Inputs of the "Swap" panel.
#[derive(Debug, Clone, Default)]
pub struct SwapForm {
    pub side:   SwapSide,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One line of feedback shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text:  String,
}

impl AppState {
    /// Empty state whose rate history keeps at most `history` samples.
    pub fn new(history: usize) -> Self {
        Self {
            account:      None,
            kyc_verified: false,
            balances:     Balances::default(),
            series:       Series::new(history),
            time:         Local::now(),
            pay:          PayForm::default(),
            swap:         SwapForm::default(),
            busy:         false,
            notice:       None,
        }
    }

    /// Fold an oracle reading into the rate history.
    pub fn record_rate(&mut self, obs: RateObservation) {
        self.series.push(Sample::from(obs));
    }

    /// Validate the swap panel against the current session.
    pub fn swap_order(&self) -> Result<(Address, SwapOrder)> {
        let account = self.session()?;
        let order = SwapOrder::new(self.swap.side, &self.swap.amount)?;
        Ok((account, order))
    }

    /// Validate the pay panel against the current session.
    pub fn payment_order(&self) -> Result<(Address, PaymentOrder)> {
        let account = self.session()?;
        let order = PaymentOrder::new(self.pay.token, &self.pay.recipient, &self.pay.amount)?;
        Ok((account, order))
    }

    /// Whether the "Send" button should be enabled.
    pub fn can_pay(&self) -> bool {
        self.account.is_some()
            && self.kyc_verified
            && !self.busy
            && !self.pay.amount.trim().is_empty()
            && parse_address(&self.pay.recipient).is_some()
    }

    /// Whether the "Swap" button should be enabled.
    pub fn can_swap(&self) -> bool {
        self.account.is_some()
            && self.kyc_verified
            && !self.busy
            && !self.swap.amount.trim().is_empty()
    }

    /// `0x1234…abcd` form of the connected account.
    pub fn short_account(&self) -> Option<String> {
        let full = self.account?.to_string();
        Some(format!("{}…{}", &full[..6], &full[full.len() - 4..]))
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { level: NoticeLevel::Info, text: text.into() });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { level: NoticeLevel::Error, text: text.into() });
    }

    fn session(&self) -> Result<Address> {
        let account = self.account.ok_or(SccsError::NotConnected)?;
        if !self.kyc_verified {
            return Err(SccsError::KycRequired);
        }
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};

    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn connected() -> AppState {
        let mut state = AppState::new(50);
        state.account = Some(ACCOUNT);
        state.kyc_verified = true;
        state
    }

    #[test]
    fn swap_needs_connection_then_kyc() {
        let mut state = AppState::new(50);
        state.swap.amount = "1".into();
        assert!(matches!(state.swap_order(), Err(SccsError::NotConnected)));

        state.account = Some(ACCOUNT);
        assert!(matches!(state.swap_order(), Err(SccsError::KycRequired)));

        state.kyc_verified = true;
        let (account, order) = state.swap_order().unwrap();
        assert_eq!(account, ACCOUNT);
        assert_eq!(order.amount_in, U256::from(1_000_000u64));
    }

    #[test]
    fn pay_button_tracks_form_validity() {
        let mut state = connected();
        assert!(!state.can_pay());

        state.pay.amount = "5".into();
        state.pay.recipient = "not an address".into();
        assert!(!state.can_pay());

        state.pay.recipient = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".into();
        assert!(state.can_pay());

        state.busy = true;
        assert!(!state.can_pay());
    }

    #[test]
    fn swap_button_requires_kyc() {
        let mut state = connected();
        state.swap.amount = "3".into();
        assert!(state.can_swap());

        state.kyc_verified = false;
        assert!(!state.can_swap());
    }

    #[test]
    fn short_account_keeps_prefix_and_suffix() {
        assert_eq!(AppState::new(1).short_account(), None);
        assert_eq!(connected().short_account().unwrap(), "0xf39F…2266");
    }

    #[test]
    fn record_rate_coalesces_same_update() {
        let mut state = AppState::new(50);
        let rate = U256::from(1_100_000_000_000_000_000u128);
        state.record_rate(RateObservation::new(rate, 1));
        state.record_rate(RateObservation::new(rate + U256::from(1u8), 1));
        assert_eq!(state.series.len(), 1);
    }
}
