//! Thread-safe handle with change notifications.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::config::AmmConfig;
use crate::domain::{Address, Asset, FixedPointAmount, Side};
use crate::error::{AmmError, Result};
use crate::pool::PoolLedger;
use crate::traits::FromConfig;

use super::{ContractCall, Exchange, PoolEvent, Receipt};

/// Cloneable handle to one [`Exchange`] shared between threads.
///
/// Every write goes through a single mutex, so the read-compute-write of a
/// swap or liquidity call can never interleave with another. Quotes copy
/// the [`PoolLedger`] under the lock and compute after releasing it: they
/// are point-in-time estimates, and the executed call revalidates against
/// the reserves at commit.
///
/// Each committed call publishes a [`PoolEvent`] on a broadcast channel.
/// Events are sent while the lock is still held, so subscribers see them
/// in commit order. A subscriber that falls more than the channel
/// capacity behind receives `RecvError::Lagged` and should re-read state.
///
/// ```
/// use mini_amm::domain::{Address, FixedPointAmount, Side};
/// use mini_amm::exchange::{ContractCall, Exchange, PoolEvent, SharedExchange};
///
/// let shared = SharedExchange::new(Exchange::new(), 16).expect("capacity");
/// let mut events = shared.subscribe();
/// let alice = Address::from_bytes([1; 20]);
/// shared
///     .execute(alice, ContractCall::Approve { token: Side::X, amount: FixedPointAmount::ONE })
///     .expect("approve");
/// assert!(matches!(events.try_recv(), Ok(PoolEvent::Approved { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct SharedExchange {
    inner: Arc<Mutex<Exchange>>,
    events: broadcast::Sender<PoolEvent>,
}

impl SharedExchange {
    /// Wraps `exchange` with an event channel buffering `capacity` events
    /// per subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(exchange: Exchange, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AmmError::InvalidConfiguration(
                "event_capacity must be positive",
            ));
        }
        let (events, _) = broadcast::channel(capacity);
        Ok(Self {
            inner: Arc::new(Mutex::new(exchange)),
            events,
        })
    }

    /// New receiver for events committed from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PoolEvent> {
        self.events.subscribe()
    }

    /// Copy of the current pool state.
    #[must_use]
    pub fn snapshot(&self) -> PoolLedger {
        self.inner.lock().ledger()
    }

    /// Quotes `amount_in` of `side` against a fresh snapshot.
    ///
    /// # Errors
    ///
    /// See [`PoolLedger::quote`].
    pub fn quote(&self, side: Side, amount_in: FixedPointAmount) -> Result<FixedPointAmount> {
        self.snapshot().quote(side, amount_in)
    }

    /// `owner`'s balance of `asset`.
    #[must_use]
    pub fn balance(&self, owner: &Address, asset: Asset) -> FixedPointAmount {
        self.inner.lock().balance(owner, asset)
    }

    /// The pool's remaining allowance over `owner`'s `token`.
    #[must_use]
    pub fn allowance(&self, owner: &Address, token: Side) -> FixedPointAmount {
        self.inner.lock().allowance(owner, token)
    }

    /// Runs `f` against the exchange under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Exchange) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Executes `call` for `caller` and publishes the resulting event.
    ///
    /// Rejected calls publish nothing.
    ///
    /// # Errors
    ///
    /// See [`Exchange::execute`].
    pub fn execute(&self, caller: Address, call: ContractCall) -> Result<Receipt> {
        let mut exchange = self.inner.lock();
        let receipt = exchange.execute(caller, call)?;
        let event = PoolEvent::from_receipt(caller, receipt);
        match self.events.send(event) {
            Ok(subscribers) => tracing::trace!(subscribers, ?event, "event published"),
            Err(_) => tracing::trace!(?event, "event dropped, no subscribers"),
        }
        Ok(receipt)
    }
}

impl FromConfig<AmmConfig> for SharedExchange {
    /// Builds the exchange from `config` with an event channel of
    /// `config.event_capacity()`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Exchange::from_config`].
    fn from_config(config: &AmmConfig) -> Result<Self> {
        Self::new(Exchange::from_config(config)?, config.event_capacity())
    }
}
