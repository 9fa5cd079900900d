//! In-process simulator of the pool contract and its two tokens.

use crate::config::AmmConfig;
use crate::domain::{
    Address, Asset, Deposit, FixedPointAmount, ReservePair, Side, SwapOutcome, SwapRequest,
    Withdrawal,
};
use crate::error::{AmmError, Result};
use crate::pool::PoolLedger;
use crate::traits::FromConfig;

use super::{ContractCall, Receipt, TokenBook};

/// The pool contract together with the balances it moves.
///
/// `Exchange` owns the [`PoolLedger`], a [`TokenBook`] for each pool token
/// and one for LP shares. Every call is atomic across all of them: the
/// ledger result is computed on a copy and every book transfer is
/// pre-checked before anything is written.
///
/// ```
/// use mini_amm::domain::{Address, Asset, FixedPointAmount, Side};
/// use mini_amm::exchange::{ContractCall, Exchange};
///
/// let alice = Address::from_bytes([1; 20]);
/// let amount = FixedPointAmount::from_tokens(100);
/// let mut ex = Exchange::new();
/// for token in [Side::X, Side::Y] {
///     ex.execute(alice, ContractCall::Mint { token, to: alice, amount }).expect("mint");
///     ex.execute(alice, ContractCall::Approve { token, amount }).expect("approve");
/// }
/// ex.execute(alice, ContractCall::AddLiquidity { x_desired: amount, y_desired: amount })
///     .expect("bootstrap");
/// assert_eq!(ex.balance(&alice, Asset::LpShare), amount);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    ledger: PoolLedger,
    token_x: TokenBook,
    token_y: TokenBook,
    lp_shares: TokenBook,
}

impl Exchange {
    /// An exchange around an empty standard-fee pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An exchange around `ledger` with empty token books.
    #[must_use]
    pub fn with_ledger(ledger: PoolLedger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    // -- read path ----------------------------------------------------------

    /// `getReserves()`.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.ledger.reserves()
    }

    /// `getLPSupply()`.
    pub const fn lp_supply(&self) -> FixedPointAmount {
        self.ledger.lp_supply()
    }

    /// The pool's remaining allowance over `owner`'s `token`.
    pub fn allowance(&self, owner: &Address, token: Side) -> FixedPointAmount {
        self.book(token).allowance(owner)
    }

    /// `owner`'s balance of `asset`.
    pub fn balance(&self, owner: &Address, asset: Asset) -> FixedPointAmount {
        match asset {
            Asset::Token(side) => self.book(side).balance(owner),
            Asset::LpShare => self.lp_shares.balance(owner),
        }
    }

    /// A copy of the pool state, for quoting off the write path.
    #[must_use]
    pub const fn ledger(&self) -> PoolLedger {
        self.ledger
    }

    const fn book(&self, token: Side) -> &TokenBook {
        match token {
            Side::X => &self.token_x,
            Side::Y => &self.token_y,
        }
    }

    fn book_mut(&mut self, token: Side) -> &mut TokenBook {
        match token {
            Side::X => &mut self.token_x,
            Side::Y => &mut self.token_y,
        }
    }

    // -- write path ---------------------------------------------------------

    /// Executes `call` on behalf of `caller`.
    ///
    /// On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidSwapDirection`] for a swap funding both or
    ///   neither side.
    /// - [`AmmError::InsufficientBalance`] / [`AmmError::InsufficientAllowance`]
    ///   if the caller cannot fund the call.
    /// - [`AmmError::InsufficientLPBalance`] if the caller redeems more
    ///   shares than it holds.
    /// - Any pool error from [`PoolLedger`].
    pub fn execute(&mut self, caller: Address, call: ContractCall) -> Result<Receipt> {
        let result = self.dispatch(caller, call);
        match &result {
            Ok(_) => tracing::info!(%caller, method = call.method(), %call, "call confirmed"),
            Err(error) => {
                tracing::warn!(%caller, method = call.method(), %call, %error, "call rejected");
            }
        }
        result
    }

    fn dispatch(&mut self, caller: Address, call: ContractCall) -> Result<Receipt> {
        match call {
            ContractCall::Mint { token, to, amount } => {
                self.book_mut(token).mint(to, amount)?;
                Ok(Receipt::Minted { token, to, amount })
            }
            ContractCall::Approve { token, amount } => {
                self.book_mut(token).approve(caller, amount);
                Ok(Receipt::Approved { token, amount })
            }
            ContractCall::Swap {
                x_amount_in,
                y_amount_in,
                min_amount_out,
            } => {
                let request = SwapRequest::from_amounts(x_amount_in, y_amount_in)?;
                self.swap(caller, &request, min_amount_out)
                    .map(Receipt::Swapped)
            }
            ContractCall::AddLiquidity {
                x_desired,
                y_desired,
            } => self
                .add_liquidity(caller, x_desired, y_desired)
                .map(Receipt::LiquidityAdded),
            ContractCall::RemoveLiquidity { lp_amount } => self
                .remove_liquidity(caller, lp_amount)
                .map(Receipt::LiquidityRemoved),
        }
    }

    fn swap(
        &mut self,
        trader: Address,
        request: &SwapRequest,
        min_amount_out: Option<FixedPointAmount>,
    ) -> Result<SwapOutcome> {
        let side_in = request.side();
        let side_out = side_in.opposite();
        let mut ledger = self.ledger;
        let outcome = match min_amount_out {
            Some(min) => ledger.swap_with_limit(request, min)?,
            None => ledger.swap(request)?,
        };

        self.book(side_in)
            .ensure_can_pull(&trader, outcome.amount_in())?;
        self.book(side_out)
            .ensure_can_credit(&trader, outcome.amount_out())?;

        self.book_mut(side_in)
            .transfer_in(trader, outcome.amount_in())?;
        self.book_mut(side_out)
            .transfer_out(trader, outcome.amount_out())?;
        self.ledger = ledger;
        Ok(outcome)
    }

    fn add_liquidity(
        &mut self,
        provider: Address,
        x_desired: FixedPointAmount,
        y_desired: FixedPointAmount,
    ) -> Result<Deposit> {
        let mut ledger = self.ledger;
        let deposit = ledger.add_liquidity(x_desired, y_desired)?;

        self.token_x.ensure_can_pull(&provider, deposit.amount_x)?;
        self.token_y.ensure_can_pull(&provider, deposit.amount_y)?;
        self.lp_shares
            .ensure_can_credit(&provider, deposit.lp_minted)?;

        self.token_x.transfer_in(provider, deposit.amount_x)?;
        self.token_y.transfer_in(provider, deposit.amount_y)?;
        self.lp_shares.mint(provider, deposit.lp_minted)?;
        self.ledger = ledger;
        Ok(deposit)
    }

    fn remove_liquidity(
        &mut self,
        provider: Address,
        lp_amount: FixedPointAmount,
    ) -> Result<Withdrawal> {
        if lp_amount > self.lp_shares.balance(&provider) {
            return Err(AmmError::InsufficientLPBalance);
        }
        let mut ledger = self.ledger;
        let withdrawal = ledger.remove_liquidity(lp_amount)?;

        self.token_x
            .ensure_can_credit(&provider, withdrawal.amount_x)?;
        self.token_y
            .ensure_can_credit(&provider, withdrawal.amount_y)?;

        self.lp_shares.burn(provider, lp_amount)?;
        self.token_x.transfer_out(provider, withdrawal.amount_x)?;
        self.token_y.transfer_out(provider, withdrawal.amount_y)?;
        self.ledger = ledger;
        Ok(withdrawal)
    }
}

impl FromConfig<AmmConfig> for Exchange {
    /// Builds the pool from `config` and credits the genesis provider with
    /// the bootstrap LP shares.
    ///
    /// Genesis tokens are placed straight into the reserves; they are not
    /// drawn from any token balance.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PoolLedger::from_config`].
    fn from_config(config: &AmmConfig) -> Result<Self> {
        let ledger = PoolLedger::from_config(config)?;
        let mut exchange = Self::with_ledger(ledger);
        if let Some(genesis) = config.genesis() {
            exchange
                .lp_shares
                .mint(genesis.provider(), ledger.lp_supply())?;
        }
        Ok(exchange)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::from_bytes([0xa1; 20])
    }

    fn bob() -> Address {
        Address::from_bytes([0xb0; 20])
    }

    fn amt(v: u128) -> FixedPointAmount {
        FixedPointAmount::new(v)
    }

    fn run(ex: &mut Exchange, caller: Address, call: ContractCall) -> Receipt {
        let Ok(receipt) = ex.execute(caller, call) else {
            panic!("expected {call} to succeed");
        };
        receipt
    }

    fn fund(ex: &mut Exchange, who: Address, x: u128, y: u128) {
        for (token, amount) in [(Side::X, amt(x)), (Side::Y, amt(y))] {
            run(ex, who, ContractCall::Mint { token, to: who, amount });
            run(ex, who, ContractCall::Approve { token, amount });
        }
    }

    fn seeded() -> Exchange {
        let mut ex = Exchange::new();
        fund(&mut ex, alice(), 1_000, 4_000);
        run(
            &mut ex,
            alice(),
            ContractCall::AddLiquidity {
                x_desired: amt(1_000),
                y_desired: amt(4_000),
            },
        );
        ex
    }

    #[test]
    fn bootstrap_moves_tokens_and_mints_lp() {
        let ex = seeded();
        assert_eq!(ex.reserves(), ReservePair::new(amt(1_000), amt(4_000)));
        assert_eq!(ex.lp_supply(), amt(2_000));
        assert_eq!(ex.balance(&alice(), Asset::LpShare), amt(2_000));
        assert!(ex.balance(&alice(), Asset::Token(Side::X)).is_zero());
        assert!(ex.allowance(&alice(), Side::Y).is_zero());
    }

    #[test]
    fn swap_pays_trader() {
        let mut ex = seeded();
        fund(&mut ex, bob(), 100, 0);
        let receipt = run(
            &mut ex,
            bob(),
            ContractCall::Swap {
                x_amount_in: amt(100),
                y_amount_in: amt(0),
                min_amount_out: None,
            },
        );
        let Receipt::Swapped(outcome) = receipt else {
            panic!("expected Swapped");
        };
        assert_eq!(ex.balance(&bob(), Asset::Token(Side::Y)), outcome.amount_out());
        assert!(ex.balance(&bob(), Asset::Token(Side::X)).is_zero());
        assert_eq!(ex.reserves(), outcome.reserves());
    }

    #[test]
    fn swap_without_allowance_is_atomic() {
        let mut ex = seeded();
        run(
            &mut ex,
            bob(),
            ContractCall::Mint {
                token: Side::X,
                to: bob(),
                amount: amt(100),
            },
        );
        let before = ex.clone();
        assert_eq!(
            ex.execute(
                bob(),
                ContractCall::Swap {
                    x_amount_in: amt(100),
                    y_amount_in: amt(0),
                    min_amount_out: None,
                },
            ),
            Err(AmmError::InsufficientAllowance)
        );
        assert_eq!(ex, before);
    }

    #[test]
    fn swap_direction_enforced() {
        let mut ex = seeded();
        assert_eq!(
            ex.execute(
                bob(),
                ContractCall::Swap {
                    x_amount_in: amt(1),
                    y_amount_in: amt(1),
                    min_amount_out: None,
                },
            ),
            Err(AmmError::InvalidSwapDirection)
        );
    }

    #[test]
    fn slippage_limit_applies() {
        let mut ex = seeded();
        fund(&mut ex, bob(), 100, 0);
        let Ok(quoted) = ex.ledger().quote(Side::X, amt(100)) else {
            panic!("expected Ok");
        };
        let before = ex.clone();
        let Err(AmmError::SlippageExceeded { .. }) = ex.execute(
            bob(),
            ContractCall::Swap {
                x_amount_in: amt(100),
                y_amount_in: amt(0),
                min_amount_out: Some(amt(quoted.get() + 1)),
            },
        ) else {
            panic!("expected SlippageExceeded");
        };
        assert_eq!(ex, before);
    }

    #[test]
    fn remove_limited_to_callers_shares() {
        let mut ex = seeded();
        // bob holds no shares even though the pool has 2000
        assert_eq!(
            ex.execute(bob(), ContractCall::RemoveLiquidity { lp_amount: amt(1) }),
            Err(AmmError::InsufficientLPBalance)
        );
        let receipt = run(
            &mut ex,
            alice(),
            ContractCall::RemoveLiquidity {
                lp_amount: amt(500),
            },
        );
        assert_eq!(
            receipt,
            Receipt::LiquidityRemoved(Withdrawal {
                amount_x: amt(250),
                amount_y: amt(1_000),
                lp_burned: amt(500),
            })
        );
        assert_eq!(ex.balance(&alice(), Asset::LpShare), amt(1_500));
        assert_eq!(ex.balance(&alice(), Asset::Token(Side::Y)), amt(1_000));
    }

    #[test]
    fn deposit_takes_only_used_amounts() {
        let mut ex = seeded();
        fund(&mut ex, bob(), 100, 1_000);
        let receipt = run(
            &mut ex,
            bob(),
            ContractCall::AddLiquidity {
                x_desired: amt(100),
                y_desired: amt(1_000),
            },
        );
        let Receipt::LiquidityAdded(deposit) = receipt else {
            panic!("expected LiquidityAdded");
        };
        assert_eq!(deposit.amount_y, amt(400));
        assert_eq!(ex.balance(&bob(), Asset::Token(Side::Y)), amt(600));
        assert_eq!(ex.allowance(&bob(), Side::Y), amt(600));
        assert_eq!(ex.balance(&bob(), Asset::LpShare), amt(200));
    }

    #[test]
    fn genesis_credits_provider() {
        let Ok(cfg) = AmmConfig::from_toml_str(
            r#"
            [genesis]
            provider = "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1"
            amount_x = "1"
            amount_y = "4"
            "#,
        ) else {
            panic!("expected Ok");
        };
        let Ok(ex) = Exchange::from_config(&cfg) else {
            panic!("expected Ok");
        };
        assert_eq!(ex.lp_supply(), FixedPointAmount::from_tokens(2));
        assert_eq!(ex.balance(&alice(), Asset::LpShare), FixedPointAmount::from_tokens(2));
    }
}
