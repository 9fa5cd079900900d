//! The pool state machine.

use core::fmt;

use crate::config::AmmConfig;
use crate::domain::{
    Deposit, FeeTier, FixedPointAmount, ReservePair, Side, SwapOutcome, SwapRequest, Withdrawal,
};
use crate::error::{AmmError, Result};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

use super::{LiquidityAccountant, SwapQuoter};

/// Lifecycle state of a [`PoolLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// No LP shares outstanding; only a bootstrap deposit is accepted.
    Uninitialized,
    /// Shares outstanding; swaps and proportional deposits are accepted.
    Active,
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Active => write!(f, "Active"),
        }
    }
}

/// Reserves, LP supply and fee of a single two-token pool.
///
/// Every operation computes the complete next state with the pure
/// [`SwapQuoter`] / [`LiquidityAccountant`] functions first and assigns it
/// only after every check has passed, so a failed call leaves the ledger
/// exactly as it was.
///
/// `PoolLedger` is `Copy`: a snapshot for lock-free quoting is just a copy.
///
/// # Example
///
/// ```rust
/// use mini_amm::domain::{FixedPointAmount, Side, SwapRequest};
/// use mini_amm::pool::{PoolLedger, PoolState};
///
/// let mut pool = PoolLedger::new();
/// assert_eq!(pool.state(), PoolState::Uninitialized);
///
/// let dep = pool
///     .add_liquidity(FixedPointAmount::new(1_000), FixedPointAmount::new(4_000))
///     .expect("bootstrap");
/// assert_eq!(dep.lp_minted, FixedPointAmount::new(2_000));
///
/// let req = SwapRequest::new(Side::X, FixedPointAmount::new(100)).expect("non-zero");
/// let out = pool.swap(&req).expect("swap ok");
/// assert!(!out.amount_out().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolLedger {
    reserves: ReservePair,
    lp_supply: FixedPointAmount,
    fee: FeeTier,
}

impl PoolLedger {
    /// An empty pool charging the standard 0.30% fee.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserves: ReservePair::EMPTY,
            lp_supply: FixedPointAmount::ZERO,
            fee: FeeTier::STANDARD,
        }
    }

    /// An empty pool charging `fee`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn with_fee(fee: FeeTier) -> Result<Self> {
        fee.validate()?;
        Ok(Self {
            fee,
            ..Self::new()
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.lp_supply.is_zero() {
            PoolState::Uninitialized
        } else {
            PoolState::Active
        }
    }

    /// Current reserves.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.reserves
    }

    /// Total LP shares outstanding.
    pub const fn lp_supply(&self) -> FixedPointAmount {
        self.lp_supply
    }

    /// Output `amount_in` of `side` would receive right now.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::EmptyPool`] before the pool is bootstrapped.
    pub fn quote(&self, side: Side, amount_in: FixedPointAmount) -> Result<FixedPointAmount> {
        let (reserve_in, reserve_out) = self.reserves.reserves_for(side);
        SwapQuoter::quote_with_fee(reserve_in, reserve_out, amount_in, self.fee)
    }

    /// Input of `side` needed to receive at least `amount_out` of the
    /// other token right now.
    ///
    /// # Errors
    ///
    /// See [`SwapQuoter::quote_exact_out`].
    pub fn quote_exact_out(
        &self,
        side: Side,
        amount_out: FixedPointAmount,
    ) -> Result<FixedPointAmount> {
        let (reserve_in, reserve_out) = self.reserves.reserves_for(side);
        SwapQuoter::quote_exact_out(reserve_in, reserve_out, amount_out, self.fee)
    }

    /// Executes a swap against the current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool is not active.
    /// - Anything [`SwapQuoter::execute_swap`] returns.
    pub fn swap(&mut self, request: &SwapRequest) -> Result<SwapOutcome> {
        self.swap_checked(request, None)
    }

    /// Executes a swap only if it pays out at least `min_amount_out`.
    ///
    /// The output is recomputed against the reserves at commit time, so a
    /// quote taken from an earlier snapshot is only an estimate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SlippageExceeded`] if the output falls short.
    /// - Anything [`swap`](Self::swap) returns.
    pub fn swap_with_limit(
        &mut self,
        request: &SwapRequest,
        min_amount_out: FixedPointAmount,
    ) -> Result<SwapOutcome> {
        self.swap_checked(request, Some(min_amount_out))
    }

    fn swap_checked(
        &mut self,
        request: &SwapRequest,
        min_amount_out: Option<FixedPointAmount>,
    ) -> Result<SwapOutcome> {
        if self.state() == PoolState::Uninitialized {
            return Err(AmmError::EmptyPool);
        }
        let (next, outcome) = SwapQuoter::execute_swap(&self.reserves, request, self.fee)?;
        if let Some(expected_min) = min_amount_out {
            if outcome.amount_out() < expected_min {
                return Err(AmmError::SlippageExceeded {
                    expected_min,
                    actual: outcome.amount_out(),
                });
            }
        }

        self.reserves = next;
        tracing::debug!(
            side = %outcome.side(),
            amount_in = %outcome.amount_in(),
            amount_out = %outcome.amount_out(),
            fee = %outcome.fee(),
            reserves = %next,
            "swap committed"
        );
        Ok(outcome)
    }

    /// Deposits at most `x_desired` / `y_desired` and mints LP shares.
    ///
    /// # Errors
    ///
    /// See [`LiquidityAccountant::add_liquidity`].
    pub fn add_liquidity(
        &mut self,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<Deposit> {
        let bootstrap = self.state() == PoolState::Uninitialized;
        let (next, supply, deposit) =
            LiquidityAccountant::add_liquidity(&self.reserves, self.lp_supply, x_desired, y_desired)?;

        self.reserves = next;
        self.lp_supply = supply;
        tracing::debug!(
            bootstrap,
            amount_x = %deposit.amount_x,
            amount_y = %deposit.amount_y,
            lp_minted = %deposit.lp_minted,
            lp_supply = %supply,
            "liquidity added"
        );
        Ok(deposit)
    }

    /// Burns `lp_amount` shares and pays out the proportional reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLPBalance`] if `lp_amount` exceeds
    /// the total supply.
    pub fn remove_liquidity(&mut self, lp_amount: FixedPointAmount) -> Result<Withdrawal> {
        let (next, supply, withdrawal) =
            LiquidityAccountant::remove_liquidity(&self.reserves, self.lp_supply, lp_amount)?;

        self.reserves = next;
        self.lp_supply = supply;
        tracing::debug!(
            amount_x = %withdrawal.amount_x,
            amount_y = %withdrawal.amount_y,
            lp_burned = %withdrawal.lp_burned,
            lp_supply = %supply,
            state = %self.state(),
            "liquidity removed"
        );
        Ok(withdrawal)
    }
}

impl Default for PoolLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PoolLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolLedger(reserves={}, lp_supply={}, {})",
            self.reserves, self.lp_supply, self.fee
        )
    }
}

impl SwapPool for PoolLedger {
    fn swap(&mut self, request: &SwapRequest) -> Result<SwapOutcome> {
        Self::swap(self, request)
    }

    fn reserves(&self) -> ReservePair {
        self.reserves
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee
    }
}

impl LiquidityPool for PoolLedger {
    fn add_liquidity(
        &mut self,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<Deposit> {
        Self::add_liquidity(self, x_desired, y_desired)
    }

    fn remove_liquidity(&mut self, lp_amount: FixedPointAmount) -> Result<Withdrawal> {
        Self::remove_liquidity(self, lp_amount)
    }

    fn total_liquidity(&self) -> FixedPointAmount {
        self.lp_supply
    }
}

impl FromConfig<AmmConfig> for PoolLedger {
    /// Creates a pool from the given configuration.
    ///
    /// If the configuration has a genesis deposit the pool is bootstrapped
    /// with it and starts [`Active`](PoolState::Active).
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`AmmConfig::validate`].
    /// - Propagates bootstrap errors from [`add_liquidity`](Self::add_liquidity).
    fn from_config(config: &AmmConfig) -> Result<Self> {
        config.validate()?;
        let mut pool = Self::with_fee(config.fee_tier())?;
        if let Some(genesis) = config.genesis() {
            pool.add_liquidity(genesis.amount_x(), genesis.amount_y())?;
        }
        Ok(pool)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    fn amt(v: u128) -> FixedPointAmount {
        FixedPointAmount::new(v)
    }

    fn req(side: Side, v: u128) -> SwapRequest {
        let Ok(r) = SwapRequest::new(side, amt(v)) else {
            panic!("valid request");
        };
        r
    }

    fn seeded(x: u128, y: u128) -> PoolLedger {
        let mut pool = PoolLedger::new();
        let Ok(_) = pool.add_liquidity(amt(x), amt(y)) else {
            panic!("bootstrap");
        };
        pool
    }

    // -- lifecycle ----------------------------------------------------------

    #[test]
    fn starts_uninitialized() {
        let pool = PoolLedger::default();
        assert_eq!(pool.state(), PoolState::Uninitialized);
        assert!(pool.reserves().is_empty());
        assert!(pool.lp_supply().is_zero());
    }

    #[test]
    fn bootstrap_activates() {
        let pool = seeded(1_000, 4_000);
        assert_eq!(pool.state(), PoolState::Active);
        assert_eq!(pool.lp_supply(), amt(2_000));
        assert_eq!(pool.reserves(), ReservePair::new(amt(1_000), amt(4_000)));
    }

    #[test]
    fn draining_returns_to_uninitialized() {
        let mut pool = seeded(1_000, 4_000);
        let Ok(wd) = pool.remove_liquidity(amt(2_000)) else {
            panic!("expected Ok");
        };
        assert_eq!((wd.amount_x, wd.amount_y), (amt(1_000), amt(4_000)));
        assert_eq!(pool.state(), PoolState::Uninitialized);
        assert!(pool.reserves().is_empty());
    }

    #[test]
    fn with_fee_rejects_full_fee() {
        let Err(AmmError::InvalidFee(_)) = PoolLedger::with_fee(FeeTier::new(BasisPoints::new(10_000)))
        else {
            panic!("expected InvalidFee");
        };
    }

    // -- swap ---------------------------------------------------------------

    #[test]
    fn swap_on_empty_pool_rejected() {
        let mut pool = PoolLedger::new();
        assert_eq!(pool.swap(&req(Side::X, 50)), Err(AmmError::EmptyPool));
        assert_eq!(pool, PoolLedger::new());
    }

    #[test]
    fn swap_updates_reserves() {
        let mut pool = seeded(1_000, 1_000);
        let Ok(out) = pool.swap(&req(Side::X, 100)) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), amt(90));
        assert_eq!(pool.reserves(), ReservePair::new(amt(1_100), amt(910)));
        assert_eq!(pool.lp_supply(), amt(1_000));
    }

    #[test]
    fn quote_matches_swap() {
        let mut pool = seeded(3_000, 7_000);
        let Ok(quoted) = pool.quote(Side::Y, amt(250)) else {
            panic!("expected Ok");
        };
        let Ok(out) = pool.swap(&req(Side::Y, 250)) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), quoted);
    }

    #[test]
    fn slippage_guard_is_atomic() {
        let mut pool = seeded(1_000, 1_000);
        let before = pool;
        assert_eq!(
            pool.swap_with_limit(&req(Side::X, 100), amt(91)),
            Err(AmmError::SlippageExceeded {
                expected_min: amt(91),
                actual: amt(90),
            })
        );
        assert_eq!(pool, before);

        let Ok(out) = pool.swap_with_limit(&req(Side::X, 100), amt(90)) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), amt(90));
    }

    #[test]
    fn exact_out_quote_is_sufficient() {
        let pool = seeded(10_000, 20_000);
        let Ok(need) = pool.quote_exact_out(Side::X, amt(500)) else {
            panic!("expected Ok");
        };
        let Ok(got) = pool.quote(Side::X, need) else {
            panic!("expected Ok");
        };
        assert!(got >= amt(500));
    }

    // -- liquidity ----------------------------------------------------------

    #[test]
    fn remove_over_supply_is_atomic() {
        let mut pool = seeded(2_000, 8_000);
        let before = pool;
        assert_eq!(
            pool.remove_liquidity(amt(4_001)),
            Err(AmmError::InsufficientLPBalance)
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn failed_deposit_is_atomic() {
        let mut pool = seeded(1_000, 4_000);
        let before = pool;
        assert_eq!(
            pool.add_liquidity(amt(10), amt(1)),
            Err(AmmError::ZeroLiquidityMinted)
        );
        assert_eq!(pool, before);
    }

    // -- traits -------------------------------------------------------------

    #[test]
    fn trait_dispatch() {
        fn drive<P: LiquidityPool>(pool: &mut P) -> Result<SwapOutcome> {
            pool.add_liquidity(amt(1_000), amt(1_000))?;
            pool.swap(&req(Side::Y, 100))
        }
        let mut pool = PoolLedger::new();
        let Ok(out) = drive(&mut pool) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), amt(90));
        assert_eq!(SwapPool::fee_tier(&pool), FeeTier::STANDARD);
        assert_eq!(LiquidityPool::total_liquidity(&pool), amt(1_000));
    }

    #[test]
    fn display() {
        let pool = seeded(1, 1);
        assert_eq!(
            pool.to_string(),
            "PoolLedger(reserves=(0.000000000000000001, 0.000000000000000001), lp_supply=0.000000000000000001, FeeTier(30bp))"
        );
    }
}
