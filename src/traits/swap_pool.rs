//! Core swap trait for executing swaps and inspecting pool state.
//!
//! [`SwapPool`] is the foundational abstraction for a two-token pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs the token exchange.
//! 2. **Inspect reserves**: [`SwapPool::reserves`] returns the balances
//!    the next swap will be priced against.
//! 3. **Inspect fees**: [`SwapPool::fee_tier`] returns the pool's fee.
//!
//! # Fee Deduction Invariant
//!
//! Implementations withhold the fee from the input amount before applying
//! the pricing curve, and the fee stays in the pool:
//!
//! ```text
//! effective_in = amount_in × (10_000 − fee_bps) / 10_000
//! amount_out   = price_curve(effective_in)
//! ```

use crate::domain::{FeeTier, ReservePair, SwapOutcome, SwapRequest};
use crate::error::AmmError;

/// Core trait for two-token swap pools.
///
/// # Errors
///
/// Common error variants include:
///
/// - [`AmmError::EmptyPool`]: a reserve is zero
/// - [`AmmError::InvariantViolation`]: the product of reserves would shrink
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait SwapPool {
    /// Executes a swap.
    ///
    /// Reserve updates are atomic: the swap either completes fully or
    /// returns an error and leaves the pool unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool has not been bootstrapped.
    /// - [`AmmError::Overflow`] if any intermediate arithmetic overflows.
    fn swap(&mut self, request: &SwapRequest) -> Result<SwapOutcome, AmmError>;

    /// Returns the current reserves.
    #[must_use]
    fn reserves(&self) -> ReservePair;

    /// Returns the fee tier applied to swaps.
    ///
    /// Constant for the lifetime of the pool.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
