//! The two reserve balances of a pool.

use core::fmt;

use super::{FixedPointAmount, Side};
use crate::error::{AmmError, Result};
use crate::math::U256;

/// Reserves of token X and token Y held by a single pool.
///
/// `ReservePair` is an immutable value: [`apply`](Self::apply) returns a new
/// pair and leaves `self` untouched, so a failed operation can never leave
/// half-updated reserves behind.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::{FixedPointAmount, ReservePair};
///
/// let pair = ReservePair::new(FixedPointAmount::new(1_000), FixedPointAmount::new(1_000));
/// let next = pair
///     .apply(
///         FixedPointAmount::new(100),
///         FixedPointAmount::ZERO,
///         FixedPointAmount::ZERO,
///         FixedPointAmount::new(90),
///     )
///     .expect("in range");
/// assert_eq!(next.reserve_x().get(), 1_100);
/// assert_eq!(next.reserve_y().get(), 910);
/// assert!(next.current_product() >= pair.current_product());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReservePair {
    reserve_x: FixedPointAmount,
    reserve_y: FixedPointAmount,
}

impl ReservePair {
    /// Both reserves at zero, the state of a freshly deployed pool.
    pub const EMPTY: Self = Self {
        reserve_x: FixedPointAmount::ZERO,
        reserve_y: FixedPointAmount::ZERO,
    };

    /// Creates a pair from explicit reserves.
    #[must_use]
    pub const fn new(reserve_x: FixedPointAmount, reserve_y: FixedPointAmount) -> Self {
        Self {
            reserve_x,
            reserve_y,
        }
    }

    /// Reserve of token X.
    pub const fn reserve_x(&self) -> FixedPointAmount {
        self.reserve_x
    }

    /// Reserve of token Y.
    pub const fn reserve_y(&self) -> FixedPointAmount {
        self.reserve_y
    }

    /// Reserve of the given token.
    pub const fn reserve(&self, side: Side) -> FixedPointAmount {
        match side {
            Side::X => self.reserve_x,
            Side::Y => self.reserve_y,
        }
    }

    /// `(reserve_in, reserve_out)` for a swap selling `side`.
    #[must_use]
    pub const fn reserves_for(&self, side: Side) -> (FixedPointAmount, FixedPointAmount) {
        match side {
            Side::X => (self.reserve_x, self.reserve_y),
            Side::Y => (self.reserve_y, self.reserve_x),
        }
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_x.is_zero() && self.reserve_y.is_zero()
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn has_empty_side(&self) -> bool {
        self.reserve_x.is_zero() || self.reserve_y.is_zero()
    }

    /// `reserve_x × reserve_y` in 256 bits. Only used for invariant checks.
    #[must_use]
    pub fn current_product(&self) -> U256 {
        U256::from(self.reserve_x.get()) * U256::from(self.reserve_y.get())
    }

    /// Applies the net flow of one operation and returns the new pair.
    ///
    /// Inflows are added before outflows are subtracted, so an operation
    /// may pay out of what it just deposited.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ReserveUnderflow`] if a reserve would go negative.
    /// - [`AmmError::Overflow`] if a reserve would exceed `u128`.
    pub fn apply(
        &self,
        dx_in: FixedPointAmount,
        dx_out: FixedPointAmount,
        dy_in: FixedPointAmount,
        dy_out: FixedPointAmount,
    ) -> Result<Self> {
        let reserve_x = Self::shift(self.reserve_x, dx_in, dx_out)?;
        let reserve_y = Self::shift(self.reserve_y, dy_in, dy_out)?;
        Ok(Self {
            reserve_x,
            reserve_y,
        })
    }

    fn shift(
        reserve: FixedPointAmount,
        inflow: FixedPointAmount,
        outflow: FixedPointAmount,
    ) -> Result<FixedPointAmount> {
        reserve
            .checked_add(&inflow)
            .ok_or(AmmError::Overflow("reserve overflow"))?
            .checked_sub(&outflow)
            .ok_or(AmmError::ReserveUnderflow)
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve_x, self.reserve_y)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amt(v: u128) -> FixedPointAmount {
        FixedPointAmount::new(v)
    }

    fn pair(x: u128, y: u128) -> ReservePair {
        ReservePair::new(amt(x), amt(y))
    }

    #[test]
    fn empty_pair() {
        assert!(ReservePair::EMPTY.is_empty());
        assert!(ReservePair::EMPTY.has_empty_side());
        assert_eq!(ReservePair::default(), ReservePair::EMPTY);
        assert!(!pair(1, 0).is_empty());
        assert!(pair(1, 0).has_empty_side());
    }

    #[test]
    fn reserves_for_orders_by_side() {
        let p = pair(10, 20);
        assert_eq!(p.reserves_for(Side::X), (amt(10), amt(20)));
        assert_eq!(p.reserves_for(Side::Y), (amt(20), amt(10)));
        assert_eq!(p.reserve(Side::Y), amt(20));
    }

    #[test]
    fn product_is_wide() {
        let p = ReservePair::new(FixedPointAmount::MAX, FixedPointAmount::MAX);
        let expected = U256::from(u128::MAX) * U256::from(u128::MAX);
        assert_eq!(p.current_product(), expected);
    }

    #[test]
    fn apply_net_flow() {
        let Ok(next) = pair(100, 100).apply(amt(10), amt(0), amt(0), amt(9)) else {
            panic!("expected Ok");
        };
        assert_eq!(next, pair(110, 91));
    }

    #[test]
    fn apply_underflow_rejected() {
        assert_eq!(
            pair(100, 100).apply(amt(0), amt(0), amt(0), amt(101)),
            Err(AmmError::ReserveUnderflow)
        );
        assert_eq!(
            pair(100, 100).apply(amt(0), amt(101), amt(0), amt(0)),
            Err(AmmError::ReserveUnderflow)
        );
    }

    #[test]
    fn apply_overflow_rejected() {
        let p = ReservePair::new(FixedPointAmount::MAX, amt(1));
        let Err(AmmError::Overflow(_)) = p.apply(amt(1), amt(0), amt(0), amt(0)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn apply_can_spend_inflow() {
        let Ok(next) = pair(0, 0).apply(amt(5), amt(5), amt(0), amt(0)) else {
            panic!("expected Ok");
        };
        assert!(next.is_empty());
    }
}
