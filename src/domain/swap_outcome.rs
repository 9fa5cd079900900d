//! Outcome of an executed swap.

use core::fmt;

use super::{FixedPointAmount, ReservePair, Side};

/// What a committed swap did: amounts exchanged, the fee withheld, and the
/// reserves afterwards.
///
/// The fee is informational. It is `ceil(amount_in × bps / 10 000)` and
/// already stays in the pool as part of `amount_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    side: Side,
    amount_in: FixedPointAmount,
    amount_out: FixedPointAmount,
    fee: FixedPointAmount,
    reserves: ReservePair,
}

impl SwapOutcome {
    /// Bundles the results of a swap.
    #[must_use]
    pub const fn new(
        side: Side,
        amount_in: FixedPointAmount,
        amount_out: FixedPointAmount,
        fee: FixedPointAmount,
        reserves: ReservePair,
    ) -> Self {
        Self {
            side,
            amount_in,
            amount_out,
            fee,
            reserves,
        }
    }

    /// Token that was sold.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Amount of `side` paid in.
    pub const fn amount_in(&self) -> FixedPointAmount {
        self.amount_in
    }

    /// Amount of the opposite token paid out.
    pub const fn amount_out(&self) -> FixedPointAmount {
        self.amount_out
    }

    /// Fee withheld from `amount_in`.
    pub const fn fee(&self) -> FixedPointAmount {
        self.fee
    }

    /// Reserves after the swap.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.reserves
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={} {}, out={} {}, fee={})",
            self.amount_in,
            self.side,
            self.amount_out,
            self.side.opposite(),
            self.fee
        )
    }
}
