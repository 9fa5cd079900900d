//! The transaction layer around the pool.
//!
//! The pool math in [`pool`](crate::pool) is pure. This module adds what
//! the deployed contract does around it: token balances and allowances
//! ([`TokenBook`]), the five write calls ([`ContractCall`]), atomic
//! execution ([`Exchange`]) and a shared, notifying handle
//! ([`SharedExchange`]) for concurrent use.
//!
//! | Call | Effect |
//! |------|--------|
//! | `mint` | credit free test tokens |
//! | `approve` | set the pool's allowance |
//! | `swap` | sell one token for the other |
//! | `addLiquidity` | deposit both tokens, receive LP shares |
//! | `removeLiquidity` | burn LP shares, receive both tokens |

mod book;
mod call;
mod engine;
mod events;
mod shared;

pub use book::TokenBook;
pub use call::{ContractCall, Receipt};
pub use engine::Exchange;
pub use events::PoolEvent;
pub use shared::SharedExchange;
