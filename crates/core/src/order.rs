//! Validation of user-entered swap and payment requests.
//!
//! Nothing here touches the chain; a validated order is what the chain
//! workflows accept.

use alloy_primitives::{Address, U256};

use crate::{
    amount::{parse_units, TOKEN_DECIMALS},
    error::{Result, SccsError},
    market::{SwapSide, Token},
};

/// A validated `swapExactIn` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOrder {
    pub side:      SwapSide,
    pub amount_in: U256,
}

impl SwapOrder {
    pub fn new(side: SwapSide, amount: &str) -> Result<Self> {
        Ok(Self {
            side,
            amount_in: positive_amount(amount)?,
        })
    }
}

/// A validated token transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentOrder {
    pub token:  Token,
    pub to:     Address,
    pub amount: U256,
}

impl PaymentOrder {
    pub fn new(token: Token, recipient: &str, amount: &str) -> Result<Self> {
        let to = parse_address(recipient)
            .ok_or_else(|| SccsError::Invalid("Invalid recipient address.".into()))?;

        Ok(Self {
            token,
            to,
            amount: positive_amount(amount)?,
        })
    }
}

/// Parse a 20-byte hex address, `None` if malformed.
///
/// Mixed-case input is treated as EIP-55 and must carry a valid checksum;
/// all-lowercase and all-uppercase hex is accepted as is.
pub fn parse_address(input: &str) -> Option<Address> {
    let input = input.trim();
    let hex = input.strip_prefix("0x").unwrap_or(input);

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(input, None).ok();
    }
    input.parse::<Address>().ok()
}

fn positive_amount(input: &str) -> Result<U256> {
    let amount = parse_units(input, TOKEN_DECIMALS)?;
    if amount.is_zero() {
        return Err(SccsError::Invalid("Amount must be greater than 0.".into()));
    }
    Ok(amount)
}
