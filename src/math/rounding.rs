//! Rounding helpers for integer division.
//!
//! [`div_round`] performs 256-bit division with an explicit [`Rounding`]
//! direction. It is the low-level building block behind
//! [`mul_div_rounded`](super::mul_div_rounded).
//!
//! # Convention
//!
//! **Always round against the trader** (pool-favorable):
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Output amount | [`Rounding::Down`] | Trader receives less |
//! | Required input amount | [`Rounding::Up`] | Trader pays more |
//! | Reported fee | [`Rounding::Up`] | Pool keeps more |

use crate::domain::Rounding;

use super::U256;

/// Division of `U256` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::Rounding;
/// use mini_amm::math::{div_round, U256};
///
/// let ten = U256::from(10u8);
/// let three = U256::from(3u8);
/// assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
/// assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
/// assert_eq!(div_round(ten, U256::zero(), Rounding::Down), None);
/// ```
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: r != 0 implies q < U256::MAX.
        Rounding::Up if !r.is_zero() => Some(q + U256::one()),
        Rounding::Up => Some(q),
    }
}
