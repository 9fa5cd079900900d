//! Constant-product pricing.
//!
//! The swap invariant is `x × y = k`. The fee is withheld from the input
//! amount **before** the pricing formula is applied and stays in the pool:
//!
//! ```text
//! c          = 10 000 − fee_bps             (9 970 for 0.30%)
//! amount_out = ⌊ r_out × a × c / (r_in × 10 000 + a × c) ⌋
//! ```
//!
//! For the standard 30 bp tier this is the familiar
//! `r_out × a × 997 / (r_in × 1000 + a × 997)` with numerator and
//! denominator both scaled by 10, so results are bit-identical.
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases the input reserve without a corresponding output.

use crate::domain::{
    FeeTier, FixedPointAmount, ReservePair, Rounding, Side, SwapOutcome, SwapRequest,
    BPS_DENOMINATOR,
};
use crate::error::{AmmError, Result};
use crate::math::{div_round, narrow, U256};

/// Pure pricing functions over an explicit reserve snapshot.
///
/// Nothing here mutates state; [`execute_swap`](Self::execute_swap)
/// returns the next [`ReservePair`] for the caller to commit.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::FixedPointAmount;
/// use mini_amm::pool::SwapQuoter;
///
/// let out = SwapQuoter::quote(
///     FixedPointAmount::new(1_000),
///     FixedPointAmount::new(1_000),
///     FixedPointAmount::new(100),
/// );
/// assert_eq!(out, Ok(FixedPointAmount::new(90)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapQuoter;

impl SwapQuoter {
    /// Output for `amount_in` at the standard 0.30% fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if the intermediate product exceeds 256 bits.
    pub fn quote(
        reserve_in: FixedPointAmount,
        reserve_out: FixedPointAmount,
        amount_in: FixedPointAmount,
    ) -> Result<FixedPointAmount> {
        Self::quote_with_fee(reserve_in, reserve_out, amount_in, FeeTier::STANDARD)
    }

    /// Output for `amount_in` at an arbitrary fee tier.
    ///
    /// A zero `amount_in` quotes zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    /// - [`AmmError::Overflow`] if the intermediate product exceeds 256 bits.
    pub fn quote_with_fee(
        reserve_in: FixedPointAmount,
        reserve_out: FixedPointAmount,
        amount_in: FixedPointAmount,
        fee: FeeTier,
    ) -> Result<FixedPointAmount> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        let multiplier = fee.multiplier()?;
        if amount_in.is_zero() {
            return Ok(FixedPointAmount::ZERO);
        }

        // a × c < 2^142, fits comfortably.
        let effective_in = U256::from(amount_in.get()) * U256::from(multiplier);
        let numerator = U256::from(reserve_out.get())
            .checked_mul(effective_in)
            .ok_or(AmmError::Overflow("swap numerator exceeds 256 bits"))?;
        let denominator =
            U256::from(reserve_in.get()) * U256::from(BPS_DENOMINATOR) + effective_in;

        let out = div_round(numerator, denominator, Rounding::Down)
            .ok_or(AmmError::DivisionByZero)?;
        narrow(out, "swap output exceeds u128").map(FixedPointAmount::new)
    }

    /// Smallest input that yields at least `amount_out`.
    ///
    /// ```text
    /// amount_in = ⌈ r_in × amount_out × 10 000 / ((r_out − amount_out) × c) ⌉
    /// ```
    ///
    /// A zero `amount_out` needs zero input.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out ≥ reserve_out`.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    /// - [`AmmError::Overflow`] if the required input exceeds `u128`.
    pub fn quote_exact_out(
        reserve_in: FixedPointAmount,
        reserve_out: FixedPointAmount,
        amount_out: FixedPointAmount,
        fee: FeeTier,
    ) -> Result<FixedPointAmount> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        let multiplier = fee.multiplier()?;
        if amount_out.is_zero() {
            return Ok(FixedPointAmount::ZERO);
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        let remaining = reserve_out.get() - amount_out.get();
        let numerator = (U256::from(reserve_in.get()) * U256::from(amount_out.get()))
            .checked_mul(U256::from(BPS_DENOMINATOR))
            .ok_or(AmmError::Overflow("exact-out numerator exceeds 256 bits"))?;
        let denominator = U256::from(remaining) * U256::from(multiplier);

        let amount_in =
            div_round(numerator, denominator, Rounding::Up).ok_or(AmmError::DivisionByZero)?;
        narrow(amount_in, "exact-out input exceeds u128").map(FixedPointAmount::new)
    }

    /// Prices `request` against `pair` and returns the reserves after the
    /// swap together with its outcome.
    ///
    /// `pair` is not modified.
    ///
    /// # Errors
    ///
    /// - Anything [`quote_with_fee`](Self::quote_with_fee) returns.
    /// - [`AmmError::Overflow`] if the input reserve would exceed `u128`.
    /// - [`AmmError::InvariantViolation`] if the product of reserves would
    ///   decrease.
    pub fn execute_swap(
        pair: &ReservePair,
        request: &SwapRequest,
        fee: FeeTier,
    ) -> Result<(ReservePair, SwapOutcome)> {
        let side = request.side();
        let amount_in = request.amount_in();
        let (reserve_in, reserve_out) = pair.reserves_for(side);
        let amount_out = Self::quote_with_fee(reserve_in, reserve_out, amount_in, fee)?;

        let zero = FixedPointAmount::ZERO;
        let next = match side {
            Side::X => pair.apply(amount_in, zero, zero, amount_out)?,
            Side::Y => pair.apply(zero, amount_out, amount_in, zero)?,
        };
        if next.current_product() < pair.current_product() {
            return Err(AmmError::InvariantViolation);
        }

        let fee_amount = fee.fee_on(amount_in)?;
        Ok((
            next,
            SwapOutcome::new(side, amount_in, amount_out, fee_amount, next),
        ))
    }
}
