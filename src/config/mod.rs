//! Engine configuration.
//!
//! [`AmmConfig`] is the declarative blueprint for a pool and the exchange
//! around it: fee tier, event buffer size and an optional [`Genesis`]
//! deposit. It is read from TOML with `serde`.

mod amm_config;

pub use amm_config::{AmmConfig, Genesis};
