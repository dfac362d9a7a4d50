//! EVM JSON-RPC access to the demo stablecoin contracts.

pub mod actions;
pub mod bindings;
pub mod client;
pub mod ledger;

pub use client::{ChainClient, SwapParams};
pub use ledger::Ledger;
