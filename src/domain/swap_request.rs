//! Validated single-sided swap input.

use core::fmt;

use super::{FixedPointAmount, Side};
use crate::error::{AmmError, Result};

/// An ephemeral swap instruction: which token goes in, and how much.
///
/// The pool contract takes `swap(xAmountIn, yAmountIn)` with exactly one
/// side funded. [`from_amounts`](Self::from_amounts) enforces that shape,
/// so a constructed `SwapRequest` always has a non-zero input on one side.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::{FixedPointAmount, Side, SwapRequest};
///
/// let req = SwapRequest::from_amounts(FixedPointAmount::ZERO, FixedPointAmount::new(50))
///     .expect("one side funded");
/// assert_eq!(req.side(), Side::Y);
///
/// assert!(SwapRequest::from_amounts(FixedPointAmount::new(1), FixedPointAmount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    side: Side,
    amount_in: FixedPointAmount,
}

impl SwapRequest {
    /// Creates a request selling `amount_in` of `side`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSwapDirection`] if `amount_in` is zero
    /// (neither side funded).
    pub fn new(side: Side, amount_in: FixedPointAmount) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidSwapDirection);
        }
        Ok(Self { side, amount_in })
    }

    /// Builds a request from the contract's `(xAmountIn, yAmountIn)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSwapDirection`] if both or neither
    /// amounts are non-zero.
    pub fn from_amounts(x_in: FixedPointAmount, y_in: FixedPointAmount) -> Result<Self> {
        match (x_in.is_zero(), y_in.is_zero()) {
            (false, true) => Ok(Self {
                side: Side::X,
                amount_in: x_in,
            }),
            (true, false) => Ok(Self {
                side: Side::Y,
                amount_in: y_in,
            }),
            _ => Err(AmmError::InvalidSwapDirection),
        }
    }

    /// Token being sold.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Amount being sold.
    pub const fn amount_in(&self) -> FixedPointAmount {
        self.amount_in
    }

    /// The request in contract form `(xAmountIn, yAmountIn)`.
    #[must_use]
    pub const fn amounts(&self) -> (FixedPointAmount, FixedPointAmount) {
        match self.side {
            Side::X => (self.amount_in, FixedPointAmount::ZERO),
            Side::Y => (FixedPointAmount::ZERO, self.amount_in),
        }
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sell {} {} for {}",
            self.amount_in,
            self.side,
            self.side.opposite()
        )
    }
}
