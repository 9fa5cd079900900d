//! Swap fee taken from the input side.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{BasisPoints, FixedPointAmount, Rounding};
use crate::error::{AmmError, Result};

/// The swap fee of a pool, in [`BasisPoints`].
///
/// The fee is withheld from the input amount and stays in the pool, so the
/// effective input multiplier is `(10 000 − bps) / 10 000`. The standard
/// 0.30% tier gives the familiar `997 / 1000`.
///
/// ```
/// use mini_amm::domain::FeeTier;
///
/// assert_eq!(FeeTier::STANDARD.multiplier(), Ok(9_970));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30%, the fee the deployed pool contract charges.
    pub const STANDARD: Self = Self(BasisPoints::new(30));

    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Creates a fee tier from arbitrary basis points.
    ///
    /// Range is checked by [`validate`](Self::validate), not here.
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Checks that the fee leaves a non-zero share of the input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<()> {
        self.multiplier().map(|_| ())
    }

    /// Input multiplier numerator over a 10 000 denominator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn multiplier(&self) -> Result<u32> {
        match self.0.complement() {
            Some(c) if c > 0 => Ok(c),
            _ => Err(AmmError::InvalidFee("fee must be below 10000 bps")),
        }
    }

    /// Fee portion of `amount_in`, rounded up in the pool's favour.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate result overflows.
    pub fn fee_on(&self, amount_in: FixedPointAmount) -> Result<FixedPointAmount> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
