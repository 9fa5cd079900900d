//! Client-side approval sequencing.
//!
//! Before the pool can pull tokens from a holder, the holder must approve
//! the pool as a spender. Adding liquidity needs both tokens approved, one
//! at a time: token A (X) first, then token B (Y). A swap needs only the
//! input token approved.
//!
//! The state is never stored. It is recomputed from live allowances every
//! time, so it cannot drift from the token books.

use core::fmt;

use crate::domain::{FixedPointAmount, Side};
use crate::exchange::ContractCall;

/// Where a two-token deposit stands in the approval sequence.
///
/// ```
/// use mini_amm::approval::ApprovalStep;
/// use mini_amm::domain::FixedPointAmount;
///
/// let zero = FixedPointAmount::ZERO;
/// let ten = FixedPointAmount::new(10);
/// assert_eq!(ApprovalStep::next(zero, zero, ten, ten), ApprovalStep::NeedsApproveA);
/// assert_eq!(ApprovalStep::next(ten, zero, ten, ten), ApprovalStep::NeedsApproveB);
/// assert_eq!(ApprovalStep::next(ten, ten, ten, ten), ApprovalStep::Ready);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStep {
    /// Token A allowance is below the desired deposit.
    NeedsApproveA,
    /// Token A is covered; token B allowance is below the desired deposit.
    NeedsApproveB,
    /// Both allowances cover the deposit.
    Ready,
}

impl ApprovalStep {
    /// Derives the current step from live allowances.
    #[must_use]
    pub fn next(
        allowance_a: FixedPointAmount,
        allowance_b: FixedPointAmount,
        desired_a: FixedPointAmount,
        desired_b: FixedPointAmount,
    ) -> Self {
        if desired_a > allowance_a {
            Self::NeedsApproveA
        } else if desired_b > allowance_b {
            Self::NeedsApproveB
        } else {
            Self::Ready
        }
    }

    /// Returns `true` once both tokens are approved.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// The approval the holder should submit next, if any.
    ///
    /// The call approves exactly the desired amount.
    #[must_use]
    pub const fn pending_call(
        &self,
        desired_a: FixedPointAmount,
        desired_b: FixedPointAmount,
    ) -> Option<ContractCall> {
        match self {
            Self::NeedsApproveA => Some(ContractCall::Approve {
                token: Side::X,
                amount: desired_a,
            }),
            Self::NeedsApproveB => Some(ContractCall::Approve {
                token: Side::Y,
                amount: desired_b,
            }),
            Self::Ready => None,
        }
    }
}

impl fmt::Display for ApprovalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedsApproveA => write!(f, "NeedsApproveA"),
            Self::NeedsApproveB => write!(f, "NeedsApproveB"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// Whether a swap of `amount_in` needs a fresh approval first.
#[must_use]
pub fn swap_needs_approval(allowance: FixedPointAmount, amount_in: FixedPointAmount) -> bool {
    amount_in > allowance
}
