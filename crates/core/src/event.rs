use alloy_primitives::Address;

use crate::market::{Balances, PaymentOutcome, RateObservation, SwapOutcome, SwapSide, Token};

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Rate feed subscription → `RateObserved`
/// - Chain tasks            → `Connected`, `BalancesUpdated`, `*Finished`
/// - Config watcher task    → `ConfigReloaded`
/// - Timer subscription     → `Tick`
/// - User input             → everything else
///
/// Results from async tasks carry their error as a display string so the
/// message stays `Clone`.
#[derive(Debug, Clone)]
pub enum Message {
    // ── Wallet ────────────────────────────────────────────────────────────────
    /// User clicked "Connect Wallet".
    ConnectRequested,
    /// Connection attempt finished; carries the selected account.
    Connected(Result<Address, String>),
    /// User ran the (demo) identity verification.
    KycRequested,

    // ── Balances ──────────────────────────────────────────────────────────────
    /// User clicked "Refresh".
    RefreshRequested,
    /// Fresh balances for the connected account.
    BalancesUpdated(Result<Balances, String>),

    // ── Rate feed ─────────────────────────────────────────────────────────────
    /// New oracle reading from the background feed.
    RateObserved(RateObservation),

    // ── Pay panel ─────────────────────────────────────────────────────────────
    PayTokenSelected(Token),
    PayRecipientChanged(String),
    PayAmountChanged(String),
    /// User clicked "Send".
    PayRequested,
    PaymentFinished(Result<PaymentOutcome, String>),

    // ── Swap panel ────────────────────────────────────────────────────────────
    SwapSideSelected(SwapSide),
    SwapAmountChanged(String),
    /// User clicked "Swap".
    SwapRequested,
    SwapFinished(Result<SwapOutcome, String>),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// One-second timer tick for the clock.
    Tick,
}
