//! Balances and pool allowances of one token.

use std::collections::HashMap;

use crate::domain::{Address, FixedPointAmount};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Balance sheet of a single token.
///
/// The pool is the only spender, so an allowance is keyed by owner alone.
/// Missing entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBook {
    balances: HashMap<Address, FixedPointAmount>,
    allowances: HashMap<Address, FixedPointAmount>,
}

impl TokenBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `owner`.
    pub fn balance(&self, owner: &Address) -> FixedPointAmount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    /// Amount the pool may still pull from `owner`.
    pub fn allowance(&self, owner: &Address) -> FixedPointAmount {
        self.allowances.get(owner).copied().unwrap_or_default()
    }

    /// Credits freshly minted tokens to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn mint(&mut self, to: Address, amount: FixedPointAmount) -> Result<()> {
        let next = self.balance(&to).safe_add(&amount)?;
        self.balances.insert(to, next);
        Ok(())
    }

    /// Sets the pool's allowance over `owner`'s tokens, replacing any
    /// previous value.
    pub fn approve(&mut self, owner: Address, amount: FixedPointAmount) {
        self.allowances.insert(owner, amount);
    }

    /// Checks that [`transfer_in`](Self::transfer_in) of `amount` from
    /// `owner` would succeed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if the balance is too low.
    /// - [`AmmError::InsufficientAllowance`] if the allowance is too low.
    pub fn ensure_can_pull(&self, owner: &Address, amount: FixedPointAmount) -> Result<()> {
        if amount > self.balance(owner) {
            return Err(AmmError::InsufficientBalance);
        }
        if amount > self.allowance(owner) {
            return Err(AmmError::InsufficientAllowance);
        }
        Ok(())
    }

    /// Checks that crediting `amount` to `to` would not overflow.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn ensure_can_credit(&self, to: &Address, amount: FixedPointAmount) -> Result<()> {
        self.balance(to).safe_add(&amount).map(|_| ())
    }

    /// Pulls `amount` from `owner` into the pool, consuming allowance.
    ///
    /// # Errors
    ///
    /// See [`ensure_can_pull`](Self::ensure_can_pull).
    pub fn transfer_in(&mut self, owner: Address, amount: FixedPointAmount) -> Result<()> {
        self.ensure_can_pull(&owner, amount)?;
        let balance = self.balance(&owner).safe_sub(&amount)?;
        let allowance = self.allowance(&owner).safe_sub(&amount)?;
        self.balances.insert(owner, balance);
        self.allowances.insert(owner, allowance);
        Ok(())
    }

    /// Pays `amount` from the pool out to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn transfer_out(&mut self, to: Address, amount: FixedPointAmount) -> Result<()> {
        self.mint(to, amount)
    }

    /// Destroys `amount` of `from`'s balance. No allowance is involved.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if the balance is too low.
    pub fn burn(&mut self, from: Address, amount: FixedPointAmount) -> Result<()> {
        let next = self
            .balance(&from)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.balances.insert(from, next);
        Ok(())
    }
}
