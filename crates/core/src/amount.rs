//! Fixed-point amounts.
//!
//! Token balances use 6 decimal places, the oracle rate uses 18. Both arrive
//! from the chain as `uint256` and are kept as [`U256`] until display.
//!
//! `alloy_primitives::utils::format_units` pads the fraction to full width
//! (`"1.500000"`); balances here display trimmed (`"1.5"`, `"0.0"`), so the
//! formatting and the matching strict parser live in this module.

use alloy_primitives::U256;

use crate::error::{Result, SccsError};

/// Decimals used by both demo stablecoins.
pub const TOKEN_DECIMALS: u8 = 6;

/// Decimals of the oracle's rate.
pub const RATE_DECIMALS: u8 = 18;

/// `10^decimals` as a [`U256`].
pub fn scale(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Render a raw fixed-point amount as a decimal string.
///
/// Trailing fractional zeros are trimmed but one fractional digit is always
/// kept, so `1_500_000` with 6 decimals becomes `"1.5"` and zero is `"0.0"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let unit  = scale(decimals);
    let whole = amount / unit;
    let frac  = amount % unit;

    let mut frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    while frac.len() > 1 && frac.ends_with('0') {
        frac.pop();
    }

    format!("{whole}.{frac}")
}

/// Parse a user-entered decimal string into a raw fixed-point amount.
///
/// Surrounding whitespace is ignored and an empty string parses as zero.
/// Signs, exponents and more than `decimals` fractional digits are rejected.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(U256::ZERO);
    }

    let (whole, frac) = input.split_once('.').unwrap_or((input, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid(input));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input));
    }
    if frac.len() > decimals as usize {
        return Err(SccsError::Invalid(format!(
            "amount '{input}' has more than {decimals} decimal places"
        )));
    }

    let whole = digits_to_u256(whole, input)?;
    let frac_scaled = digits_to_u256(frac, input)?
        .checked_mul(scale(decimals - frac.len() as u8))
        .ok_or_else(|| overflow(input))?;

    whole
        .checked_mul(scale(decimals))
        .and_then(|w| w.checked_add(frac_scaled))
        .ok_or_else(|| overflow(input))
}

/// Lossy conversion of a raw fixed-point amount to `f64`.
///
/// Whole and fractional parts convert separately so an 18-decimal rate keeps
/// its fractional digits.
pub fn to_f64(amount: U256, decimals: u8) -> f64 {
    let unit = scale(decimals);
    f64::from(amount / unit) + f64::from(amount % unit) / f64::from(unit)
}

/// `value` as a `u64`, `None` if it doesn't fit.
pub fn to_u64(value: U256) -> Option<u64> {
    u64::try_from(value).ok()
}

fn digits_to_u256(digits: &str, input: &str) -> Result<U256> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    digits.parse::<U256>().map_err(|_| overflow(input))
}

fn invalid(input: &str) -> SccsError {
    SccsError::Invalid(format!("'{input}' is not a valid amount"))
}

fn overflow(input: &str) -> SccsError {
    SccsError::Invalid(format!("amount '{input}' is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", 1_000_000 ; "whole number")]
    #[test_case("1.5", 1_500_000 ; "one fractional digit")]
    #[test_case("0.000001", 1 ; "smallest unit")]
    #[test_case(" 12.345678 ", 12_345_678 ; "surrounding whitespace")]
    #[test_case(".25", 250_000 ; "leading dot")]
    #[test_case("3.", 3_000_000 ; "trailing dot")]
    #[test_case("", 0 ; "empty is zero")]
    fn parses_token_amounts(input: &str, raw: u64) {
        assert_eq!(parse_units(input, TOKEN_DECIMALS).unwrap(), U256::from(raw));
    }

    #[test_case("1.0000001" ; "too many decimals")]
    #[test_case("-1" ; "negative")]
    #[test_case("1e6" ; "exponent")]
    #[test_case("." ; "lone dot")]
    #[test_case("1.2.3" ; "two dots")]
    #[test_case("abc" ; "letters")]
    fn rejects_malformed_amounts(input: &str) {
        assert!(matches!(
            parse_units(input, TOKEN_DECIMALS),
            Err(SccsError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_overflow() {
        let huge = "9".repeat(80);
        assert!(parse_units(&huge, TOKEN_DECIMALS).is_err());
    }

    #[test_case(0, "0.0")]
    #[test_case(1, "0.000001")]
    #[test_case(1_500_000, "1.5")]
    #[test_case(42_000_000, "42.0")]
    #[test_case(123_456_789, "123.456789")]
    fn formats_token_amounts(raw: u64, expected: &str) {
        assert_eq!(format_units(U256::from(raw), TOKEN_DECIMALS), expected);
    }

    #[test]
    fn display_is_trimmed_unlike_alloy_units() {
        let raw = U256::from(1_500_000u64);
        assert_eq!(
            alloy_primitives::utils::format_units(raw, TOKEN_DECIMALS).unwrap(),
            "1.500000"
        );
        assert_eq!(format_units(raw, TOKEN_DECIMALS), "1.5");
    }

    #[test]
    fn rate_converts_to_float() {
        let rate = U256::from(1_110_000_000_000_000_000u128);
        assert!((to_f64(rate, RATE_DECIMALS) - 1.11).abs() < 1e-12);
    }

    #[test]
    fn to_u64_rejects_wide_values() {
        assert_eq!(to_u64(U256::from(1_700_000_000u64)), Some(1_700_000_000));
        assert_eq!(to_u64(U256::from(u64::MAX) + U256::from(1u8)), None);
    }

    #[test]
    fn large_values_convert_to_float() {
        let value = U256::from(u128::MAX);
        let expected = u128::MAX as f64 / 1e18;
        let got = to_f64(value, RATE_DECIMALS);
        assert!((got - expected).abs() / expected < 1e-12);
    }
}
