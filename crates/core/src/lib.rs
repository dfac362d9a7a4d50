pub mod amount;
pub mod error;
pub mod event;
pub mod market;
pub mod order;
pub mod series;
pub mod source;
pub mod state;

pub use error::{Result, SccsError};
pub use event::Message;
pub use market::{Balances, PaymentOutcome, RateObservation, SwapOutcome, SwapSide, Token};
pub use series::{Sample, Series};
pub use source::RateSource;
pub use state::AppState;
