//! # Mini AMM
//!
//! A two-token constant-product automated market maker (Uniswap v2 style)
//! with LP-share accounting, plus the transaction layer a deployed pool
//! contract provides around it: token balances, allowances, atomic calls
//! and change notifications.
//!
//! All arithmetic is integer-only on 18-decimal fixed-point amounts, with
//! 256-bit intermediates, so every result is deterministic.
//!
//! # Quick Start
//!
//! ## Trade against a bare pool
//!
//! ```rust
//! use mini_amm::domain::{FixedPointAmount, Side, SwapRequest};
//! use mini_amm::pool::PoolLedger;
//!
//! let mut pool = PoolLedger::new(); // 0.30% fee
//!
//! // 1. Bootstrap: mints √(1000 × 4000) = 2000 LP shares
//! let deposit = pool
//!     .add_liquidity(FixedPointAmount::new(1_000), FixedPointAmount::new(4_000))
//!     .expect("bootstrap");
//! assert_eq!(deposit.lp_minted, FixedPointAmount::new(2_000));
//!
//! // 2. Quote, then execute the same swap
//! let amount_in = FixedPointAmount::new(100);
//! let quoted = pool.quote(Side::X, amount_in).expect("quote");
//! let request = SwapRequest::new(Side::X, amount_in).expect("non-zero");
//! let outcome = pool.swap(&request).expect("swap");
//! assert_eq!(outcome.amount_out(), quoted);
//! ```
//!
//! ## Drive the full exchange from configuration
//!
//! ```rust
//! use mini_amm::config::AmmConfig;
//! use mini_amm::domain::{Address, Asset, FixedPointAmount};
//! use mini_amm::exchange::{ContractCall, SharedExchange};
//! use mini_amm::traits::FromConfig;
//!
//! let config = AmmConfig::from_toml_str(r#"
//!     [genesis]
//!     provider = "0x00000000000000000000000000000000000000aa"
//!     amount_x = "1000"
//!     amount_y = "1000"
//! "#).expect("valid config");
//! let exchange = SharedExchange::from_config(&config).expect("exchange");
//!
//! let provider: Address = "0x00000000000000000000000000000000000000aa".parse().expect("address");
//! let shares = exchange.balance(&provider, Asset::LpShare);
//! assert_eq!(shares, FixedPointAmount::from_tokens(1_000));
//!
//! exchange
//!     .execute(provider, ContractCall::RemoveLiquidity { lp_amount: shares })
//!     .expect("withdraw");
//! assert!(exchange.snapshot().reserves().is_empty());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │    Consumer     │  AmmConfig + ApprovalStep
//! └───────┬────────┘
//!         │ execute(caller, ContractCall)
//!         ▼
//! ┌────────────────┐
//! │ SharedExchange  │  Arc<Mutex<Exchange>>, broadcast PoolEvents
//! └───────┬────────┘
//!         │ Exchange: token books, allowances, atomic commit
//!         ▼
//! ┌────────────────┐
//! │   PoolLedger    │  reserves + LP supply, SwapPool + LiquidityPool
//! └───────┬────────┘
//!         │ SwapQuoter / LiquidityAccountant
//!         ▼
//! ┌────────────────┐
//! │     Domain      │  FixedPointAmount, ReservePair, SwapOutcome, …
//! └────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`FixedPointAmount`](domain::FixedPointAmount), [`ReservePair`](domain::ReservePair), [`FeeTier`](domain::FeeTier), etc. |
//! | [`pool`] | Pricing, LP accounting and the [`PoolLedger`](pool::PoolLedger) |
//! | [`exchange`] | Token books, contract calls, [`Exchange`](exchange::Exchange) and [`SharedExchange`](exchange::SharedExchange) |
//! | [`approval`] | Client-side [`ApprovalStep`](approval::ApprovalStep) sequencing |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`AmmConfig`](config::AmmConfig) loaded from TOML |
//! | [`math`] | `U256` intermediates, integer square root, checked arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod approval;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
