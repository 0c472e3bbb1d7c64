//! Exchange-rate arithmetic between underlying tokens and Sett shares
//! All conversions truncate toward zero, matching the vault's own rounding.
use odra::casper_types::U256;
use crate::errors::YieldSourceError;

/// Scale of `price_per_full_share` (1e18)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Checked math operations for U256
pub struct SafeMath;

impl SafeMath {
    /// Checked addition
    pub fn add(a: U256, b: U256) -> Result<U256, YieldSourceError> {
        a.checked_add(b).ok_or(YieldSourceError::Overflow)
    }

    /// Checked subtraction
    pub fn sub(a: U256, b: U256) -> Result<U256, YieldSourceError> {
        a.checked_sub(b).ok_or(YieldSourceError::Underflow)
    }

    /// Checked multiplication
    pub fn mul(a: U256, b: U256) -> Result<U256, YieldSourceError> {
        a.checked_mul(b).ok_or(YieldSourceError::Overflow)
    }

    /// `a * b / denominator`, truncating
    pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, YieldSourceError> {
        if denominator.is_zero() {
            return Err(YieldSourceError::InsufficientShares);
        }
        Ok(Self::mul(a, b)? / denominator)
    }
}

/// Conversions at the vault's exchange rate (`total_underlying / total_shares`)
pub struct ShareMath;

impl ShareMath {
    /// Shares whose current redemption value is `amount`
    ///
    /// Formula: shares = amount * total_shares / total_underlying
    /// An empty vault has no exchange rate, so nothing can be redeemed from it.
    pub fn shares_for_amount(
        amount: U256,
        total_shares: U256,
        total_underlying: U256,
    ) -> Result<U256, YieldSourceError> {
        if total_shares.is_zero() || total_underlying.is_zero() {
            return Err(YieldSourceError::InsufficientShares);
        }
        SafeMath::mul_div(amount, total_shares, total_underlying)
    }

    /// Underlying value of `shares`
    ///
    /// Formula: amount = shares * total_underlying / total_shares
    /// If total_shares == 0, returns 0
    pub fn amount_for_shares(
        shares: U256,
        total_underlying: U256,
        total_shares: U256,
    ) -> Result<U256, YieldSourceError> {
        if total_shares.is_zero() {
            return Ok(U256::zero());
        }
        SafeMath::mul_div(shares, total_underlying, total_shares)
    }

    /// Underlying value of one full share, scaled by 1e18
    pub fn price_per_full_share(
        total_underlying: U256,
        total_shares: U256,
    ) -> Result<U256, YieldSourceError> {
        let scale = U256::from(PRICE_SCALE);
        if total_shares.is_zero() {
            return Ok(scale);
        }
        SafeMath::mul_div(total_underlying, scale, total_shares)
    }

    /// Shares minted for a deposit of `amount` into a pool of `pool` underlying
    ///
    /// First deposit is 1:1. Outstanding shares over an empty pool have no
    /// rate and error with `InsufficientShares`.
    pub fn shares_for_deposit(
        amount: U256,
        pool: U256,
        total_shares: U256,
    ) -> Result<U256, YieldSourceError> {
        if total_shares.is_zero() {
            return Ok(amount);
        }
        SafeMath::mul_div(amount, total_shares, pool)
    }

    /// Balance difference observed around an external call
    pub fn checked_delta(after: U256, before: U256) -> Result<U256, YieldSourceError> {
        SafeMath::sub(after, before)
    }
}
