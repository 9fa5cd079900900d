//! Notifications published after a call commits.

use core::fmt;

use crate::domain::{Address, Deposit, FixedPointAmount, Side, SwapOutcome, Withdrawal};

use super::Receipt;

/// A committed state change. Every variant doubles as the "balances
/// changed" signal: readers should refresh whatever they display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Tokens were minted to `to`.
    Minted {
        /// Account that submitted the mint.
        caller: Address,
        /// Token minted.
        token: Side,
        /// Recipient.
        to: Address,
        /// Amount minted.
        amount: FixedPointAmount,
    },
    /// `owner` set the pool's allowance.
    Approved {
        /// Token owner.
        owner: Address,
        /// Token approved.
        token: Side,
        /// New allowance.
        amount: FixedPointAmount,
    },
    /// `trader` swapped against the pool.
    Swapped {
        /// Account that swapped.
        trader: Address,
        /// What the swap did.
        outcome: SwapOutcome,
    },
    /// `provider` deposited liquidity.
    LiquidityAdded {
        /// Depositing account.
        provider: Address,
        /// What was deposited and minted.
        deposit: Deposit,
    },
    /// `provider` withdrew liquidity.
    LiquidityRemoved {
        /// Withdrawing account.
        provider: Address,
        /// What was burned and paid out.
        withdrawal: Withdrawal,
    },
}

impl PoolEvent {
    /// The event for `receipt` of a call submitted by `caller`.
    #[must_use]
    pub const fn from_receipt(caller: Address, receipt: Receipt) -> Self {
        match receipt {
            Receipt::Minted { token, to, amount } => Self::Minted {
                caller,
                token,
                to,
                amount,
            },
            Receipt::Approved { token, amount } => Self::Approved {
                owner: caller,
                token,
                amount,
            },
            Receipt::Swapped(outcome) => Self::Swapped {
                trader: caller,
                outcome,
            },
            Receipt::LiquidityAdded(deposit) => Self::LiquidityAdded {
                provider: caller,
                deposit,
            },
            Receipt::LiquidityRemoved(withdrawal) => Self::LiquidityRemoved {
                provider: caller,
                withdrawal,
            },
        }
    }

    /// Whether pool reserves moved.
    #[must_use]
    pub const fn touches_reserves(&self) -> bool {
        matches!(
            self,
            Self::Swapped { .. } | Self::LiquidityAdded { .. } | Self::LiquidityRemoved { .. }
        )
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minted {
                token, to, amount, ..
            } => write!(f, "{to} minted {amount} {token}"),
            Self::Approved {
                owner,
                token,
                amount,
            } => write!(f, "{owner} approved {amount} {token}"),
            Self::Swapped { trader, outcome } => write!(f, "{trader}: {outcome}"),
            Self::LiquidityAdded { provider, deposit } => write!(f, "{provider}: {deposit}"),
            Self::LiquidityRemoved {
                provider,
                withdrawal,
            } => write!(f, "{provider}: {withdrawal}"),
        }
    }
}
