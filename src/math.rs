//! Checked arithmetic and pricing math shared by the token and pool contracts
//!
//! All amounts are unsigned 256-bit integers. Any result that does not fit
//! the width is an error, never a wrap. Divisions floor toward zero.
use odra::casper_types::U256;

use crate::errors::DexError;

/// Checked U256 arithmetic
pub struct SafeMath;

impl SafeMath {
    /// Addition, failing on overflow
    pub fn add(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_add(b).ok_or(DexError::ArithmeticOverflow)
    }

    /// Subtraction, failing when the result would be negative
    pub fn sub(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_sub(b).ok_or(DexError::ArithmeticOverflow)
    }

    /// Multiplication, failing on overflow
    pub fn mul(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_mul(b).ok_or(DexError::ArithmeticOverflow)
    }

    /// Flooring division, failing on a zero divisor
    pub fn div(a: U256, b: U256) -> Result<U256, DexError> {
        a.checked_div(b).ok_or(DexError::ArithmeticOverflow)
    }
}

/// Constant-product pricing for the pool
pub struct AmmMath;

impl AmmMath {
    /// Output amount for a swap with no fee:
    /// `floor(reserve_out * amount_in / (reserve_in + amount_in))`
    ///
    /// The flooring keeps `reserve_in * reserve_out` from ever decreasing
    /// across a swap. Callers must exclude zero reserves beforehand.
    pub fn get_amount_out(
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
    ) -> Result<U256, DexError> {
        let numerator = SafeMath::mul(reserve_out, amount_in)?;
        let denominator = SafeMath::add(reserve_in, amount_in)?;
        SafeMath::div(numerator, denominator)
    }

    /// Spot price of the base asset quoted in the other asset,
    /// with 18 decimal precision
    pub fn price(reserve_quote: U256, reserve_base: U256) -> Result<U256, DexError> {
        SafeMath::div(
            SafeMath::mul(reserve_quote, U256::from(10u128.pow(18)))?,
            reserve_base,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_mul_report_overflow() {
        assert_eq!(
            SafeMath::add(U256::MAX, U256::one()),
            Err(DexError::ArithmeticOverflow)
        );
        assert_eq!(
            SafeMath::mul(U256::MAX, U256::from(2)),
            Err(DexError::ArithmeticOverflow)
        );
        assert_eq!(SafeMath::add(U256::from(2), U256::from(3)), Ok(U256::from(5)));
    }

    #[test]
    fn sub_below_zero_fails() {
        assert_eq!(
            SafeMath::sub(U256::from(1), U256::from(2)),
            Err(DexError::ArithmeticOverflow)
        );
        assert_eq!(SafeMath::sub(U256::from(5), U256::from(5)), Ok(U256::zero()));
    }

    #[test]
    fn div_floors_toward_zero() {
        assert_eq!(SafeMath::div(U256::from(7), U256::from(2)), Ok(U256::from(3)));
        assert_eq!(
            SafeMath::div(U256::from(1), U256::zero()),
            Err(DexError::ArithmeticOverflow)
        );
    }

    #[test]
    fn amount_out_matches_constant_product() {
        // floor(100 * 10 / 110) = 9
        assert_eq!(
            AmmMath::get_amount_out(U256::from(10), U256::from(100), U256::from(100)),
            Ok(U256::from(9))
        );
        // dust input against a deep opposite reserve floors to zero
        assert_eq!(
            AmmMath::get_amount_out(U256::from(1), U256::from(1_000_000), U256::one()),
            Ok(U256::zero())
        );
    }

    #[test]
    fn amount_out_overflow_is_reported() {
        let half = U256::MAX / U256::from(2);
        assert_eq!(
            AmmMath::get_amount_out(U256::from(4), U256::from(100), half),
            Err(DexError::ArithmeticOverflow)
        );
    }

    #[test]
    fn price_is_quoted_with_18_decimals() {
        let one = U256::from(10u128.pow(18));
        assert_eq!(
            AmmMath::price(U256::from(200), U256::from(100)),
            Ok(one * U256::from(2))
        );
        assert_eq!(
            AmmMath::price(U256::from(100), U256::from(200)),
            Ok(one / U256::from(2))
        );
    }
}
