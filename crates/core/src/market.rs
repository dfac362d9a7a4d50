use std::fmt;

use alloy_primitives::{Address, B256, U256};

use crate::amount::{self, RATE_DECIMALS};

/// The two demo stablecoins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Hkdc,
    Sgdc,
}

impl Token {
    pub const ALL: [Token; 2] = [Token::Hkdc, Token::Sgdc];

    pub fn symbol(self) -> &'static str {
        match self {
            Token::Hkdc => "HKDC",
            Token::Sgdc => "SGDC",
        }
    }

    /// The other token of the pair.
    pub fn counterpart(self) -> Token {
        match self {
            Token::Hkdc => Token::Sgdc,
            Token::Sgdc => Token::Hkdc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Direction of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwapSide {
    #[default]
    HkdcToSgdc,
    SgdcToHkdc,
}

impl SwapSide {
    pub const ALL: [SwapSide; 2] = [SwapSide::HkdcToSgdc, SwapSide::SgdcToHkdc];

    pub fn token_in(self) -> Token {
        match self {
            SwapSide::HkdcToSgdc => Token::Hkdc,
            SwapSide::SgdcToHkdc => Token::Sgdc,
        }
    }

    pub fn token_out(self) -> Token {
        self.token_in().counterpart()
    }
}

impl fmt::Display for SwapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.token_in(), self.token_out())
    }
}

/// Raw `getRate()` result from the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateObservation {
    /// SGD per HKD, scaled by `10^18`.
    pub rate:       U256,
    /// Unix seconds of the last oracle update.
    pub updated_at: u64,
}

impl RateObservation {
    pub fn new(rate: U256, updated_at: u64) -> Self {
        Self { rate, updated_at }
    }

    pub fn rate_f64(&self) -> f64 {
        amount::to_f64(self.rate, RATE_DECIMALS)
    }

    pub fn updated_at_ms(&self) -> i64 {
        i64::try_from(self.updated_at)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000)
    }
}

/// Raw token balances of the connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balances {
    pub hkdc: U256,
    pub sgdc: U256,
}

impl Balances {
    pub fn get(&self, token: Token) -> U256 {
        match token {
            Token::Hkdc => self.hkdc,
            Token::Sgdc => self.sgdc,
        }
    }
}

/// A mined `swapExactIn` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub tx_hash:    B256,
    pub side:       SwapSide,
    pub amount_in:  U256,
    /// Output amount quoted by the FX contract, net of `fee`.
    pub amount_out: U256,
    pub fee:        U256,
}

/// A mined token transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub tx_hash: B256,
    pub token:   Token,
    pub to:      Address,
    pub amount:  U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_sides_pick_opposite_tokens() {
        assert_eq!(SwapSide::HkdcToSgdc.token_in(), Token::Hkdc);
        assert_eq!(SwapSide::HkdcToSgdc.token_out(), Token::Sgdc);
        assert_eq!(SwapSide::SgdcToHkdc.token_in(), Token::Sgdc);
        assert_eq!(SwapSide::SgdcToHkdc.token_out(), Token::Hkdc);
    }

    #[test]
    fn swap_side_label() {
        assert_eq!(SwapSide::SgdcToHkdc.to_string(), "SGDC → HKDC");
    }

    #[test]
    fn updated_at_saturates_instead_of_overflowing() {
        let obs = RateObservation::new(U256::ZERO, u64::MAX);
        assert_eq!(obs.updated_at_ms(), i64::MAX);
    }
}
