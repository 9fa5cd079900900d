//! Engine configuration loaded from TOML.

use serde::Deserialize;

use crate::domain::{Address, BasisPoints, FeeTier, FixedPointAmount};
use crate::error::AmmError;

const fn default_fee_bps() -> u32 {
    30
}

const fn default_event_capacity() -> usize {
    64
}

/// Initial deposit that bootstraps the pool at construction time.
///
/// Amounts are written as decimal strings in whole-token units, e.g.
/// `amount_x = "1000.5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Genesis {
    provider: Address,
    amount_x: FixedPointAmount,
    amount_y: FixedPointAmount,
}

impl Genesis {
    /// Creates a genesis deposit.
    #[must_use]
    pub const fn new(
        provider: Address,
        amount_x: FixedPointAmount,
        amount_y: FixedPointAmount,
    ) -> Self {
        Self {
            provider,
            amount_x,
            amount_y,
        }
    }

    /// Account credited with the bootstrap LP shares.
    #[must_use]
    pub const fn provider(&self) -> Address {
        self.provider
    }

    /// Token X deposited.
    pub const fn amount_x(&self) -> FixedPointAmount {
        self.amount_x
    }

    /// Token Y deposited.
    pub const fn amount_y(&self) -> FixedPointAmount {
        self.amount_y
    }
}

/// Configuration for a pool and the exchange around it.
///
/// # Example
///
/// ```
/// use mini_amm::config::AmmConfig;
///
/// let cfg = AmmConfig::from_toml_str(r#"
///     fee_bps = 25
///
///     [genesis]
///     provider = "0x0000000000000000000000000000000000000001"
///     amount_x = "1000"
///     amount_y = "4000"
/// "#).expect("valid config");
/// assert_eq!(cfg.fee_tier().basis_points().get(), 25);
/// assert_eq!(cfg.event_capacity(), 64);
/// ```
///
/// # Validation
///
/// - `fee_bps` must be below 10 000.
/// - `event_capacity` must be non-zero.
/// - A genesis deposit must fund both tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmmConfig {
    #[serde(default = "default_fee_bps")]
    fee_bps: u32,
    #[serde(default = "default_event_capacity")]
    event_capacity: usize,
    #[serde(default)]
    genesis: Option<Genesis>,
}

impl AmmConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        fee_bps: u32,
        event_capacity: usize,
        genesis: Option<Genesis>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee_bps,
            event_capacity,
            genesis,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] if the document is malformed.
    /// - Anything [`validate`](Self::validate) returns.
    pub fn from_toml_str(input: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if `fee_bps ≥ 10 000`.
    /// - [`AmmError::InvalidConfiguration`] if `event_capacity` is zero or
    ///   the genesis deposit leaves a side empty.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee_tier().validate()?;
        if self.event_capacity == 0 {
            return Err(AmmError::InvalidConfiguration(
                "event_capacity must be positive",
            ));
        }
        if let Some(genesis) = &self.genesis {
            if genesis.amount_x.is_zero() || genesis.amount_y.is_zero() {
                return Err(AmmError::InvalidConfiguration(
                    "genesis must fund both tokens",
                ));
            }
        }
        Ok(())
    }

    /// Swap fee of the pool.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        FeeTier::new(BasisPoints::new(self.fee_bps))
    }

    /// Buffer size of the event channel.
    #[must_use]
    pub const fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Optional bootstrap deposit.
    #[must_use]
    pub const fn genesis(&self) -> Option<&Genesis> {
        self.genesis.as_ref()
    }
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            fee_bps: default_fee_bps(),
            event_capacity: default_event_capacity(),
            genesis: None,
        }
    }
}
