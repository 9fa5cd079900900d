//! The constant-product pool.
//!
//! The pool is split into two stateless calculators and one stateful ledger:
//!
//! | Type | Role |
//! |------|------|
//! | [`SwapQuoter`] | `x × y = k` pricing, exact-in and exact-out |
//! | [`LiquidityAccountant`] | LP-share minting and proportional redemption |
//! | [`PoolLedger`] | Reserves + LP supply, committed atomically |
//!
//! Calculators take a snapshot and return the next one. The ledger only
//! adopts a snapshot once every check on it has passed, so a failed call
//! never leaves a partial update behind.

mod accountant;
mod ledger;
mod quoter;

#[cfg(test)]
mod proptest_properties;

pub use accountant::LiquidityAccountant;
pub use ledger::{PoolLedger, PoolState};
pub use quoter::SwapQuoter;
