//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use mini_amm::prelude::*;
//! ```

pub use crate::approval::ApprovalStep;
pub use crate::config::{AmmConfig, Genesis};
pub use crate::domain::{
    Address, Asset, BasisPoints, Deposit, FeeTier, FixedPointAmount, ReservePair, Rounding, Side,
    SwapOutcome, SwapRequest, Withdrawal,
};
pub use crate::error::{AmmError, Result};
pub use crate::exchange::{ContractCall, Exchange, PoolEvent, Receipt, SharedExchange};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{PoolLedger, PoolState};
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};
