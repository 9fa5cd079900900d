//! Fundamental domain value types used throughout the AMM library.
//!
//! Amounts, fees, addresses, token sides, reserves, swap requests and the
//! outcomes of pool operations. All types are small `Copy` values with
//! validated constructors where an invariant exists.

mod address;
mod amount;
mod basis_points;
mod fee_tier;
mod liquidity_outcome;
mod reserve_pair;
mod rounding;
mod side;
mod swap_outcome;
mod swap_request;

pub use address::Address;
pub use amount::{FixedPointAmount, SCALE_DECIMALS};
pub use basis_points::BasisPoints;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use fee_tier::FeeTier;
pub use liquidity_outcome::{Deposit, Withdrawal};
pub use reserve_pair::ReservePair;
pub use rounding::Rounding;
pub use side::{Asset, Side};
pub use swap_outcome::SwapOutcome;
pub use swap_request::SwapRequest;
