//! Arithmetic utilities for AMM calculations.
//!
//! All pool math is integer-only so results are deterministic and match
//! the on-chain computation bit for bit:
//!
//! - [`U256`] carries full-width intermediates so that `a × b` of two
//!   `u128` values never overflows before the final division.
//! - [`mul_div`] / [`mul_div_rounded`] compute `a × n / d` through `U256`.
//! - [`isqrt`] is the floor integer square root used for bootstrap shares.
//! - [`div_round`] divides with an explicit [`Rounding`](crate::domain::Rounding).
//! - [`CheckedArithmetic`] lifts the checked `Option` arithmetic of
//!   [`FixedPointAmount`](crate::domain::FixedPointAmount) into `Result`s.

mod checked;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use wide::{U256, isqrt, mul_div, mul_div_rounded, narrow};
