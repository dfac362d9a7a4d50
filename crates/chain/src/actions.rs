//! Multi-step workflows behind the dashboard's buttons.

use alloy::primitives::{Address, U256};
use sccs_core::{
    order::{PaymentOrder, SwapOrder},
    Balances, PaymentOutcome, Result, SwapOutcome, Token,
};
use tracing::{info, warn};

use crate::{client::SwapParams, ledger::Ledger};

/// Both token balances of `account`, fetched concurrently.
pub async fn refresh_balances<L: Ledger>(ledger: &L, account: Address) -> Result<Balances> {
    let (hkdc, sgdc) = tokio::try_join!(
        ledger.balance_of(Token::Hkdc, account),
        ledger.balance_of(Token::Sgdc, account),
    )?;
    Ok(Balances { hkdc, sgdc })
}

/// Approve the FX contract if needed, simulate, then swap.
///
/// A failed allowance read is treated as zero allowance, so the worst case is
/// one redundant approval.  A failed simulation sends nothing.
pub async fn swap<L: Ledger>(
    ledger: &L,
    account: Address,
    order: SwapOrder,
    params: SwapParams,
) -> Result<SwapOutcome> {
    let token_in = order.side.token_in();
    let spender = ledger.fx_address();

    let allowance = match ledger.allowance(token_in, account, spender).await {
        Ok(allowance) => allowance,
        Err(e) => {
            warn!("allowance lookup failed, assuming zero: {e}");
            U256::ZERO
        }
    };

    if needs_approval(allowance, order.amount_in) {
        info!(token = %token_in, amount = %order.amount_in, "approving FX contract");
        ledger.approve(token_in, account, spender, order.amount_in).await?;
    }

    let (amount_out, fee) = ledger.quote_swap(account, order, params).await?;
    let tx_hash = ledger.swap_exact_in(account, order, params).await?;
    info!(%tx_hash, side = %order.side, %amount_out, %fee, "swap mined");

    Ok(SwapOutcome {
        tx_hash,
        side: order.side,
        amount_in: order.amount_in,
        amount_out,
        fee,
    })
}

/// Send `order.amount` of `order.token` to `order.to`.
pub async fn pay<L: Ledger>(ledger: &L, account: Address, order: PaymentOrder) -> Result<PaymentOutcome> {
    let tx_hash = ledger.transfer(order.token, account, order.to, order.amount).await?;
    info!(%tx_hash, token = %order.token, to = %order.to, "payment mined");

    Ok(PaymentOutcome {
        tx_hash,
        token: order.token,
        to: order.to,
        amount: order.amount,
    })
}

fn needs_approval(allowance: U256, amount: U256) -> bool {
    allowance < amount
}
