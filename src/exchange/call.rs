//! Write-path calls and their receipts.

use core::fmt;

use crate::domain::{Address, Deposit, FixedPointAmount, Side, SwapOutcome, Withdrawal};

/// A state-changing call against the exchange, one per pool contract
/// method.
///
/// Amounts are base units at 18 decimals; decimal-string handling belongs
/// to whoever builds the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractCall {
    /// Free test-token mint of `amount` of `token` to `to`.
    Mint {
        /// Token to mint.
        token: Side,
        /// Recipient.
        to: Address,
        /// Amount to mint.
        amount: FixedPointAmount,
    },
    /// Sets the pool's allowance over the caller's `token`.
    Approve {
        /// Token to approve.
        token: Side,
        /// New allowance.
        amount: FixedPointAmount,
    },
    /// `swap(xAmountIn, yAmountIn)`; exactly one side must be non-zero.
    Swap {
        /// Token X sold.
        x_amount_in: FixedPointAmount,
        /// Token Y sold.
        y_amount_in: FixedPointAmount,
        /// Reject the swap if it would pay out less than this.
        min_amount_out: Option<FixedPointAmount>,
    },
    /// `addLiquidity(xDesired, yDesired)`.
    AddLiquidity {
        /// Maximum token X to deposit.
        x_desired: FixedPointAmount,
        /// Maximum token Y to deposit.
        y_desired: FixedPointAmount,
    },
    /// `removeLiquidity(lpAmount)`.
    RemoveLiquidity {
        /// LP shares to burn.
        lp_amount: FixedPointAmount,
    },
}

impl ContractCall {
    /// Contract method name, for logs.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Approve { .. } => "approve",
            Self::Swap { .. } => "swap",
            Self::AddLiquidity { .. } => "addLiquidity",
            Self::RemoveLiquidity { .. } => "removeLiquidity",
        }
    }
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint { token, to, amount } => write!(f, "mint({amount} {token} -> {to})"),
            Self::Approve { token, amount } => write!(f, "approve({amount} {token})"),
            Self::Swap {
                x_amount_in,
                y_amount_in,
                ..
            } => write!(f, "swap({x_amount_in}, {y_amount_in})"),
            Self::AddLiquidity {
                x_desired,
                y_desired,
            } => write!(f, "addLiquidity({x_desired}, {y_desired})"),
            Self::RemoveLiquidity { lp_amount } => write!(f, "removeLiquidity({lp_amount})"),
        }
    }
}

/// What a confirmed [`ContractCall`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receipt {
    /// Tokens were minted.
    Minted {
        /// Token minted.
        token: Side,
        /// Recipient.
        to: Address,
        /// Amount minted.
        amount: FixedPointAmount,
    },
    /// An allowance was set.
    Approved {
        /// Token approved.
        token: Side,
        /// New allowance.
        amount: FixedPointAmount,
    },
    /// A swap was executed.
    Swapped(SwapOutcome),
    /// Liquidity was deposited.
    LiquidityAdded(Deposit),
    /// Liquidity was withdrawn.
    LiquidityRemoved(Withdrawal),
}
