use alloy::primitives::{Address, TxHash, U256};
use sccs_core::{order::SwapOrder, Result, Token};
use std::future::Future;

use crate::client::{ChainClient, SwapParams};

/// Contract calls the dashboard workflows are built from.
///
/// [`ChainClient`] is the JSON-RPC implementation; the workflows in
/// [`crate::actions`] only see this trait.
pub trait Ledger: Send + Sync {
    /// Spender that swaps must approve.
    fn fx_address(&self) -> Address;

    fn balance_of(&self, token: Token, owner: Address) -> impl Future<Output = Result<U256>> + Send;

    fn allowance(
        &self,
        token: Token,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    fn approve(
        &self,
        token: Token,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    fn transfer(
        &self,
        token: Token,
        from: Address,
        to: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Dry-run a swap; `(amount_out, fee)`.
    fn quote_swap(
        &self,
        from: Address,
        order: SwapOrder,
        params: SwapParams,
    ) -> impl Future<Output = Result<(U256, U256)>> + Send;

    fn swap_exact_in(
        &self,
        from: Address,
        order: SwapOrder,
        params: SwapParams,
    ) -> impl Future<Output = Result<TxHash>> + Send;
}

impl Ledger for ChainClient {
    fn fx_address(&self) -> Address {
        ChainClient::fx_address(self)
    }

    async fn balance_of(&self, token: Token, owner: Address) -> Result<U256> {
        ChainClient::balance_of(self, token, owner).await
    }

    async fn allowance(&self, token: Token, owner: Address, spender: Address) -> Result<U256> {
        ChainClient::allowance(self, token, owner, spender).await
    }

    async fn approve(&self, token: Token, from: Address, spender: Address, amount: U256) -> Result<TxHash> {
        ChainClient::approve(self, token, from, spender, amount).await
    }

    async fn transfer(&self, token: Token, from: Address, to: Address, amount: U256) -> Result<TxHash> {
        ChainClient::transfer(self, token, from, to, amount).await
    }

    async fn quote_swap(&self, from: Address, order: SwapOrder, params: SwapParams) -> Result<(U256, U256)> {
        ChainClient::quote_swap(self, from, order, params).await
    }

    async fn swap_exact_in(&self, from: Address, order: SwapOrder, params: SwapParams) -> Result<TxHash> {
        ChainClient::swap_exact_in(self, from, order, params).await
    }
}
