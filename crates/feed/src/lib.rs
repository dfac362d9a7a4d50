//! Periodic polling of the exchange-rate oracle.

use sccs_config::RateConfig;
use sccs_core::{RateObservation, RateSource, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// Shortest accepted poll interval.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// How hard a single poll tries before giving up until the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per poll, including the first.  Zero behaves as one.
    pub max_attempts: u32,
    /// Delay before the first retry; doubled for every further retry.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(cfg: &RateConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts,
            backoff:      Duration::from_millis(cfg.retry_backoff_ms),
        }
    }
}

/// Spawn a background Tokio task that fetches a reading immediately and then
/// every `interval`, forwarding each [`RateObservation`] through the returned
/// channel.
///
/// A poll that still fails after its retries is logged and skipped.  The task
/// stops when the receiver is dropped.
pub fn spawn_rate_feed<S: RateSource>(
    source: S,
    interval: Duration,
    retry: RetryPolicy,
) -> mpsc::Receiver<RateObservation> {
    let (tx, rx) = mpsc::channel(4);
    let interval = interval.max(MIN_INTERVAL);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            match fetch_with_retry(&source, retry).await {
                Ok(obs) => {
                    debug!(rate = %obs.rate, updated_at = obs.updated_at, "rate observed");
                    if tx.send(obs).await.is_err() {
                        break; // all receivers dropped
                    }
                }
                Err(e) => warn!("Rate poll failed, keeping previous data: {e}"),
            }
        }

        debug!("rate feed stopped");
    });

    rx
}

/// One poll: up to `retry.max_attempts` calls with exponential backoff.
pub async fn fetch_with_retry<S: RateSource>(source: &S, retry: RetryPolicy) -> Result<RateObservation> {
    let attempts = retry.max_attempts.max(1);
    let mut delay = retry.backoff;
    let mut attempt = 1;

    loop {
        match source.get_rate().await {
            Ok(obs) => return Ok(obs),
            Err(e) if attempt < attempts => {
                debug!("rate fetch attempt {attempt}/{attempts} failed: {e}; retrying in {delay:?}");
                time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
