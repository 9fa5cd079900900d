//! Results of liquidity deposits and withdrawals.

use core::fmt;

use super::FixedPointAmount;

/// Result of a liquidity deposit.
///
/// `amount_x` and `amount_y` are the amounts actually taken, which may be
/// less than the caller's desired maximums on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    /// Token X taken from the provider.
    pub amount_x: FixedPointAmount,
    /// Token Y taken from the provider.
    pub amount_y: FixedPointAmount,
    /// LP shares minted to the provider.
    pub lp_minted: FixedPointAmount,
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(x={}, y={}, lp={})",
            self.amount_x, self.amount_y, self.lp_minted
        )
    }
}

/// Result of a liquidity withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    /// Token X paid out.
    pub amount_x: FixedPointAmount,
    /// Token Y paid out.
    pub amount_y: FixedPointAmount,
    /// LP shares burned.
    pub lp_burned: FixedPointAmount,
}

impl Withdrawal {
    /// A withdrawal that burned nothing and paid nothing.
    pub const NONE: Self = Self {
        amount_x: FixedPointAmount::ZERO,
        amount_y: FixedPointAmount::ZERO,
        lp_burned: FixedPointAmount::ZERO,
    };
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(x={}, y={}, lp={})",
            self.amount_x, self.amount_y, self.lp_burned
        )
    }
}
