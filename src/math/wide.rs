//! 256-bit intermediates for ratio and square-root math.
//!
//! Token quantities are `u128` base units at 18 decimals, so a product of
//! two reserves routinely exceeds `u128::MAX` (1e24 × 1e24 = 1e48). Every
//! multiply-then-divide in the crate therefore widens to [`U256`] first and
//! narrows back only after the division.

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

use super::div_round;

#[allow(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]
mod inner {
    uint::construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }
}

pub use inner::U256;

/// Narrows a `U256` back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `value` needs more than 128 bits.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Computes `floor(a × numerator / denominator)` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use mini_amm::math::mul_div;
///
/// // 2^127 * 4 / 8 would overflow u128 in the product, not in the result.
/// let half = 1u128 << 127;
/// assert_eq!(mul_div(half, 4, 8), Ok(1u128 << 126));
/// ```
pub fn mul_div(a: u128, numerator: u128, denominator: u128) -> Result<u128> {
    mul_div_rounded(a, numerator, denominator, Rounding::Down)
}

/// Computes `a × numerator / denominator` with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div_rounded(
    a: u128,
    numerator: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128> {
    // u128 × u128 < 2^256, never overflows.
    let product = U256::from(a) * U256::from(numerator);
    let quotient =
        div_round(product, U256::from(denominator), rounding).ok_or(AmmError::DivisionByZero)?;
    narrow(quotient, "mul_div result exceeds u128")
}

/// Floor integer square root via Newton's method.
///
/// The result of `isqrt(x × y)` for any two `u128` values always fits in
/// `u128`.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let mut x = n;
    let mut y = (x >> 1) + (x & U256::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}
