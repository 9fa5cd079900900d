//! LP-share accounting for deposits and withdrawals.
//!
//! # Deposit
//!
//! The first deposit into an empty pool mints `⌊√(x × y)⌋` shares and
//! takes both amounts in full. Later deposits must match the current
//! reserve ratio: the side that would overshoot is trimmed to the optimal
//! amount, and shares are minted against the X reserve:
//!
//! ```text
//! y_opt  = ⌊ x_desired × r_y / r_x ⌋
//! minted = ⌊ x_used × L / r_x ⌋
//! ```
//!
//! # Withdrawal
//!
//! Redemption is strictly proportional and fee-free:
//! `out_x = ⌊ r_x × lp / L ⌋`, `out_y = ⌊ r_y × lp / L ⌋`.

use crate::domain::{Deposit, FixedPointAmount, ReservePair, Rounding, Withdrawal};
use crate::error::{AmmError, Result};
use crate::math::{div_round, isqrt, narrow, CheckedArithmetic, U256};

/// Pure LP-share computations over an explicit `(reserves, lp_supply)`
/// snapshot. Each call returns the next snapshot instead of mutating.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityAccountant;

impl LiquidityAccountant {
    /// Computes a deposit of at most `x_desired` / `y_desired`.
    ///
    /// Returns the new reserves, the new LP supply and the [`Deposit`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if a bootstrap deposit
    ///   would mint zero shares.
    /// - [`AmmError::EmptyPool`] if shares exist but a reserve is zero.
    /// - [`AmmError::ZeroLiquidityMinted`] if a later deposit is too small
    ///   to mint a share.
    /// - [`AmmError::Overflow`] if a reserve or the supply would exceed
    ///   `u128`.
    pub fn add_liquidity(
        pair: &ReservePair,
        lp_supply: FixedPointAmount,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<(ReservePair, FixedPointAmount, Deposit)> {
        let deposit = if lp_supply.is_zero() {
            Self::bootstrap(x_desired, y_desired)?
        } else {
            Self::proportional(pair, lp_supply, x_desired, y_desired)?
        };

        let zero = FixedPointAmount::ZERO;
        let next = pair.apply(deposit.amount_x, zero, deposit.amount_y, zero)?;
        let supply = lp_supply.safe_add(&deposit.lp_minted)?;
        Ok((next, supply, deposit))
    }

    fn bootstrap(x_desired: FixedPointAmount, y_desired: FixedPointAmount) -> Result<Deposit> {
        let product = U256::from(x_desired.get()) * U256::from(y_desired.get());
        let minted = narrow(isqrt(product), "bootstrap shares exceed u128")?;
        if minted == 0 {
            return Err(AmmError::InsufficientInitialLiquidity);
        }
        Ok(Deposit {
            amount_x: x_desired,
            amount_y: y_desired,
            lp_minted: FixedPointAmount::new(minted),
        })
    }

    fn proportional(
        pair: &ReservePair,
        lp_supply: FixedPointAmount,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<Deposit> {
        let (reserve_x, reserve_y) = (pair.reserve_x(), pair.reserve_y());
        if pair.has_empty_side() {
            return Err(AmmError::EmptyPool);
        }

        // Compared before narrowing: a y_optimal past u128 exceeds y_desired.
        let y_optimal = div_round(
            U256::from(x_desired.get()) * U256::from(reserve_y.get()),
            U256::from(reserve_x.get()),
            Rounding::Down,
        )
        .ok_or(AmmError::DivisionByZero)?;
        let (amount_x, amount_y) = if y_optimal <= U256::from(y_desired.get()) {
            let y_used = narrow(y_optimal, "optimal Y exceeds u128")?;
            (x_desired, FixedPointAmount::new(y_used))
        } else {
            let x_used = y_desired.safe_mul_div(&reserve_x, &reserve_y, Rounding::Down)?;
            (x_used, y_desired)
        };

        let lp_minted = amount_x.mul_div(lp_supply, reserve_x)?;
        if lp_minted.is_zero() {
            return Err(AmmError::ZeroLiquidityMinted);
        }
        Ok(Deposit {
            amount_x,
            amount_y,
            lp_minted,
        })
    }

    /// Computes the redemption of `lp_amount` shares.
    ///
    /// Returns the new reserves, the new LP supply and the [`Withdrawal`].
    /// Burning zero shares is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLPBalance`] if `lp_amount` exceeds
    /// `lp_supply`.
    pub fn remove_liquidity(
        pair: &ReservePair,
        lp_supply: FixedPointAmount,
        lp_amount: FixedPointAmount,
    ) -> Result<(ReservePair, FixedPointAmount, Withdrawal)> {
        if lp_amount > lp_supply {
            return Err(AmmError::InsufficientLPBalance);
        }
        if lp_amount.is_zero() {
            return Ok((*pair, lp_supply, Withdrawal::NONE));
        }

        let amount_x = pair
            .reserve_x()
            .safe_mul_div(&lp_amount, &lp_supply, Rounding::Down)?;
        let amount_y = pair
            .reserve_y()
            .safe_mul_div(&lp_amount, &lp_supply, Rounding::Down)?;
        let zero = FixedPointAmount::ZERO;
        let next = pair.apply(zero, amount_x, zero, amount_y)?;
        let supply = lp_supply.safe_sub(&lp_amount)?;
        Ok((
            next,
            supply,
            Withdrawal {
                amount_x,
                amount_y,
                lp_burned: lp_amount,
            },
        ))
    }
}
