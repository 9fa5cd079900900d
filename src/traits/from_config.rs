//! Generic construction trait for building components from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction. A successfully constructed value is guaranteed to be in
//! a valid initial state:
//!
//! - the fee tier leaves a non-zero share of every input,
//! - a genesis deposit, if any, mints at least one share.

use crate::error::AmmError;

/// Builds a value from a configuration struct.
///
/// # Implementors
///
/// - `impl FromConfig<AmmConfig> for PoolLedger`
/// - `impl FromConfig<AmmConfig> for Exchange`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference because it may be reused.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee tier is unsupported.
    /// - [`AmmError::InvalidConfiguration`] if any other parameter is out
    ///   of range.
    /// - Any error from bootstrapping the pool with the genesis deposit.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
