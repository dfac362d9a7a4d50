use std::future::Future;

use crate::{error::Result, market::RateObservation};

/// Anything that can report the current exchange rate.
///
/// Implemented by the chain client against the on-chain oracle; tests plug in
/// scripted sources.
pub trait RateSource: Send + Sync + 'static {
    fn get_rate(&self) -> impl Future<Output = Result<RateObservation>> + Send;
}
