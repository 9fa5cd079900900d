//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap growth**: the reserve product never decreases across a swap.
//! 2. **Legacy parity**: the basis-point formula equals the 997/1000 one.
//! 3. **Swap reversibility**: a round trip X→Y→X returns ≤ the original.
//! 4. **Quote monotonicity**: a larger input never gets a smaller output.
//! 5. **Exact-out bound**: the exact-out input always buys the request.
//! 6. **Proportionality**: remove then re-add restores the LP supply.
//! 7. **Atomic ledger**: random operation sequences keep the ledger
//!    consistent, and failed operations change nothing.
//! 8. **Decimal round trip**: parse ∘ format is the identity.

use proptest::prelude::*;

use super::{LiquidityAccountant, PoolLedger, SwapQuoter};
use crate::domain::{FeeTier, FixedPointAmount, ReservePair, Side, SwapRequest};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn amt(v: u128) -> FixedPointAmount {
    FixedPointAmount::new(v)
}

#[allow(clippy::panic)]
fn request(side: Side, v: u128) -> SwapRequest {
    let Ok(r) = SwapRequest::new(side, amt(v)) else {
        panic!("non-zero request");
    };
    r
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves between 0.00000000000001 and 10 million whole tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000_000_000_000_000_000u128
}

/// Small reserves in [10_000, 10_000_000] base units, where rounding bites.
fn small_reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::X), Just(Side::Y)]
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Swap(Side, u128),
    SwapLimited(Side, u128, u128),
    Add(u128, u128),
    Remove(u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (side_strategy(), 0u128..=5_000_000).prop_map(|(s, a)| Op::Swap(s, a)),
        (side_strategy(), 1u128..=5_000_000, 0u128..=5_000_000)
            .prop_map(|(s, a, m)| Op::SwapLimited(s, a, m)),
        (0u128..=10_000_000, 0u128..=10_000_000).prop_map(|(x, y)| Op::Add(x, y)),
        (0u128..=12_000_000).prop_map(Op::Remove),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1-5: pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_grows_product(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        a in 1u128..=10_000_000_000_000_000_000_000_000u128,
        side in side_strategy(),
    ) {
        let pair = ReservePair::new(amt(rx), amt(ry));
        let Ok((next, outcome)) =
            SwapQuoter::execute_swap(&pair, &request(side, a), FeeTier::STANDARD)
        else {
            return Ok(());
        };
        prop_assert!(next.current_product() >= pair.current_product());
        prop_assert!(!next.has_empty_side());
        prop_assert_eq!(next.reserve(side).get(), pair.reserve(side).get() + a);
        prop_assert_eq!(
            next.reserve(side.opposite()).get(),
            pair.reserve(side.opposite()).get() - outcome.amount_out().get()
        );
    }

    #[test]
    fn prop_matches_legacy_formula(
        r_in in 1u128..=u128::from(u32::MAX),
        r_out in 1u128..=u128::from(u32::MAX),
        a in 0u128..=u128::from(u32::MAX),
    ) {
        let legacy = r_out * a * 997 / (r_in * 1000 + a * 997);
        prop_assert_eq!(SwapQuoter::quote(amt(r_in), amt(r_out), amt(a)), Ok(amt(legacy)));
    }

    #[test]
    fn prop_swap_reversibility(
        rx in small_reserve_strategy(),
        ry in small_reserve_strategy(),
    ) {
        let swap_in = (rx / 1_000).max(1);
        let pair = ReservePair::new(amt(rx), amt(ry));

        let Ok((mid, there)) =
            SwapQuoter::execute_swap(&pair, &request(Side::X, swap_in), FeeTier::STANDARD)
        else {
            return Ok(());
        };
        let received = there.amount_out().get();
        if received == 0 { return Ok(()); }

        let Ok((_, back)) =
            SwapQuoter::execute_swap(&mid, &request(Side::Y, received), FeeTier::STANDARD)
        else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }

    #[test]
    fn prop_quote_monotonic(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        a in 0u128..=1_000_000_000_000_000_000_000u128,
        extra in 0u128..=1_000_000_000_000_000_000_000u128,
    ) {
        let Ok(small) = SwapQuoter::quote(amt(r_in), amt(r_out), amt(a)) else {
            return Ok(());
        };
        let Ok(large) = SwapQuoter::quote(amt(r_in), amt(r_out), amt(a + extra)) else {
            return Ok(());
        };
        prop_assert!(small <= large);
        prop_assert!(large < amt(r_out));
    }

    #[test]
    fn prop_exact_out_buys_request(
        r_in in small_reserve_strategy(),
        r_out in small_reserve_strategy(),
        fraction in 1u128..=999u128,
        bps in 0u32..=1_000u32,
    ) {
        let fee = FeeTier::new(crate::domain::BasisPoints::new(bps));
        let want = (r_out * fraction / 1_000).max(1);
        let Ok(need) = SwapQuoter::quote_exact_out(amt(r_in), amt(r_out), amt(want), fee) else {
            return Ok(());
        };
        let Ok(got) = SwapQuoter::quote_with_fee(amt(r_in), amt(r_out), need, fee) else {
            return Ok(());
        };
        prop_assert!(got >= amt(want), "paid {} for {} but got {}", need, want, got);
    }
}

// ---------------------------------------------------------------------------
// Properties 6-7: liquidity and ledger
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_remove_then_add_restores_supply(
        rx in small_reserve_strategy(),
        ry in small_reserve_strategy(),
        share_pct in 10u128..=50u128,
    ) {
        let Ok((pair, supply, _)) =
            LiquidityAccountant::add_liquidity(&ReservePair::EMPTY, amt(0), amt(rx), amt(ry))
        else {
            return Ok(());
        };
        let lp = amt(supply.get() * share_pct / 100);
        let Ok((drained, reduced, wd)) = LiquidityAccountant::remove_liquidity(&pair, supply, lp) else {
            return Ok(());
        };
        let Ok((_, restored, _)) =
            LiquidityAccountant::add_liquidity(&drained, reduced, wd.amount_x, wd.amount_y)
        else {
            return Ok(());
        };
        prop_assert!(restored <= supply, "re-adding minted more than was burned");
        prop_assert!(
            supply.get() - restored.get() <= lp.get() / 100 + 2,
            "supply {} restored only to {}",
            supply, restored
        );
    }

    #[test]
    fn prop_ledger_stays_consistent(
        x0 in small_reserve_strategy(),
        y0 in small_reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut pool = PoolLedger::new();
        let Ok(_) = pool.add_liquidity(amt(x0), amt(y0)) else {
            return Ok(());
        };

        for op in ops {
            let before = pool;
            let result = match op {
                Op::Swap(side, a) => SwapRequest::new(side, amt(a))
                    .and_then(|r| pool.swap(&r))
                    .map(|_| ()),
                Op::SwapLimited(side, a, min) => pool
                    .swap_with_limit(&request(side, a), amt(min))
                    .map(|_| ()),
                Op::Add(x, y) => pool.add_liquidity(amt(x), amt(y)).map(|_| ()),
                Op::Remove(lp) => pool.remove_liquidity(amt(lp)).map(|_| ()),
            };

            if result.is_err() {
                prop_assert_eq!(pool, before, "failed {:?} mutated the ledger", op);
            }
            if matches!(op, Op::Swap(..) | Op::SwapLimited(..)) && result.is_ok() {
                prop_assert!(
                    pool.reserves().current_product() >= before.reserves().current_product()
                );
            }
            prop_assert_eq!(pool.lp_supply().is_zero(), pool.reserves().is_empty());
            if !pool.lp_supply().is_zero() {
                prop_assert!(!pool.reserves().has_empty_side());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 8: decimal round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_decimal_round_trip(raw in any::<u128>()) {
        let a = amt(raw);
        prop_assert_eq!(FixedPointAmount::from_decimal_str(&a.to_decimal_string()), Ok(a));
        prop_assert_eq!(FixedPointAmount::from_decimal_str(&a.format_fixed(18)), Ok(a));
    }
}
