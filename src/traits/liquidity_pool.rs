//! Liquidity management trait extending [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_liquidity`] **only**
//! changes through [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`]. Swaps never alter it.

use super::SwapPool;
use crate::domain::{Deposit, FixedPointAmount, Withdrawal};
use crate::error::AmmError;

/// Trait for pools that issue and redeem LP shares.
///
/// # Errors
///
/// Common error variants include:
///
/// - [`AmmError::InsufficientInitialLiquidity`]: bootstrap mints nothing
/// - [`AmmError::ZeroLiquidityMinted`]: deposit too small for one share
/// - [`AmmError::InsufficientLPBalance`]: redeeming more than exists
pub trait LiquidityPool: SwapPool {
    /// Deposits at most `x_desired` of token X and `y_desired` of token Y.
    ///
    /// Returns the amounts actually taken and the shares minted.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] on a bootstrap deposit
    ///   whose geometric mean rounds to zero.
    /// - [`AmmError::ZeroLiquidityMinted`] if no share would be minted.
    /// - [`AmmError::Overflow`] if any intermediate arithmetic overflows.
    fn add_liquidity(
        &mut self,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<Deposit, AmmError>;

    /// Burns `lp_amount` shares and returns the proportional reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLPBalance`] if `lp_amount` exceeds the
    ///   total supply.
    fn remove_liquidity(&mut self, lp_amount: FixedPointAmount) -> Result<Withdrawal, AmmError>;

    /// Returns the total LP shares outstanding.
    #[must_use]
    fn total_liquidity(&self) -> FixedPointAmount;
}
