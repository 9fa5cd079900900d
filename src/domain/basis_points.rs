//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{FixedPointAmount, Rounding};
use crate::math::mul_div_rounded;

/// Value that represents 100%.
pub(crate) const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// ```
/// use mini_amm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.complement(), Some(9_970));
/// assert_eq!(BasisPoints::new(10_001).complement(), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `10_000 − self`, or `None` above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<u32> {
        BPS_DENOMINATOR.checked_sub(self.0)
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the result exceeds `u128`.
    pub fn apply(
        &self,
        amount: FixedPointAmount,
        rounding: Rounding,
    ) -> crate::error::Result<FixedPointAmount> {
        mul_div_rounded(
            amount.get(),
            u128::from(self.0),
            u128::from(BPS_DENOMINATOR),
            rounding,
        )
        .map(FixedPointAmount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
