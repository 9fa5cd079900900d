//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of panicking or saturating.
//!
//! # Examples
//!
//! ```
//! use mini_amm::domain::FixedPointAmount;
//! use mini_amm::math::CheckedArithmetic;
//!
//! let a = FixedPointAmount::new(100);
//! let b = FixedPointAmount::new(200);
//! assert_eq!(a.safe_add(&b), Ok(FixedPointAmount::new(300)));
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::{FixedPointAmount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div_rounded;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self × numerator / denominator` with a full-width intermediate and
    /// explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero, or
    /// [`AmmError::Overflow`] if the result does not fit.
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for FixedPointAmount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div_rounded(self.get(), numerator.get(), denominator.get(), rounding)
            .map(FixedPointAmount::new)
    }
}
