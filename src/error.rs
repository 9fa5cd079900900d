//! Unified error types for the mini AMM library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error is local and synchronous: it describes a request
//! that is invalid against the current pool state, and the state is left
//! untouched whenever one is returned.

use crate::domain::FixedPointAmount;

/// Errors produced by the AMM engine, the exchange simulator and the
/// configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// An amount subtraction would go below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Applying a flow to a reserve pair would make a reserve negative.
    #[error("reserve underflow")]
    ReserveUnderflow,

    /// An intermediate or final value does not fit its integer width.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A ratio was requested against a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// Malformed numeric input at the decimal-string boundary.
    #[error("invalid amount format: {0}")]
    InvalidFormat(&'static str),

    /// A quote or swap hit a zero reserve on the relevant side.
    #[error("pool has no liquidity on the requested side")]
    EmptyPool,

    /// A swap request funded both sides or neither side.
    #[error("exactly one of the two input amounts must be non-zero")]
    InvalidSwapDirection,

    /// The bootstrap deposit's geometric mean rounds to zero.
    #[error("initial liquidity too small to mint any shares")]
    InsufficientInitialLiquidity,

    /// A deposit into an active pool would mint zero shares.
    #[error("deposit too small to mint any shares")]
    ZeroLiquidityMinted,

    /// More LP shares were redeemed than exist or than the caller holds.
    #[error("insufficient LP share balance")]
    InsufficientLPBalance,

    /// An exact-out request asks for the whole reserve or more.
    #[error("requested output exceeds available reserve")]
    InsufficientLiquidity,

    /// The executed output fell below the caller's minimum.
    #[error("slippage exceeded: expected at least {expected_min}, got {actual}")]
    SlippageExceeded {
        /// Minimum output the caller accepted.
        expected_min: FixedPointAmount,
        /// Output the pool would actually pay.
        actual: FixedPointAmount,
    },

    /// A holder's token balance does not cover a transfer into the pool.
    #[error("insufficient token balance")]
    InsufficientBalance,

    /// A holder's allowance to the pool does not cover a transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The reserve product decreased across a swap.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// Fee parameter out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Configuration value out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
