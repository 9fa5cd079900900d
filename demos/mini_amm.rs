//! Constant product exchange walkthrough.
//!
//! Builds an exchange from TOML, bootstraps it through the approval
//! sequence, trades both ways and redeems liquidity, printing balances as
//! 4-place decimals and the events a front end would refresh on.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=mini_amm=debug cargo run --example mini_amm
//! ```

use mini_amm::approval::{swap_needs_approval, ApprovalStep};
use mini_amm::config::AmmConfig;
use mini_amm::domain::{Address, Asset, FixedPointAmount, Side};
use mini_amm::exchange::{ContractCall, Receipt, SharedExchange};
use mini_amm::traits::FromConfig;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
fee_bps = 30
event_capacity = 16
"#;

fn show(label: &str, shared: &SharedExchange, who: &Address) {
    let x = shared.balance(who, Asset::Token(Side::X));
    let y = shared.balance(who, Asset::Token(Side::Y));
    let lp = shared.balance(who, Asset::LpShare);
    println!(
        "  {label:<8} X={:>12}  Y={:>12}  LP={:>12}",
        x.format_fixed(4),
        y.format_fixed(4),
        lp.format_fixed(4)
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mini AMM (x · y = k) ===\n");

    // ── 1. Build the exchange from configuration ────────────────────────
    let config = AmmConfig::from_toml_str(CONFIG)?;
    let shared = SharedExchange::from_config(&config)?;
    let mut events = shared.subscribe();
    println!("Fee tier: {}", config.fee_tier());

    let alice: Address = "0x00000000000000000000000000000000000a11ce".parse()?;
    let bob: Address = "0x0000000000000000000000000000000000000b0b".parse()?;

    // ── 2. Mint test tokens ─────────────────────────────────────────────
    let want_x: FixedPointAmount = "1000".parse()?;
    let want_y: FixedPointAmount = "4000".parse()?;
    shared.execute(alice, ContractCall::Mint { token: Side::X, to: alice, amount: want_x })?;
    shared.execute(alice, ContractCall::Mint { token: Side::Y, to: alice, amount: want_y })?;

    // ── 3. Approve A, then B, then deposit ──────────────────────────────
    loop {
        let step = ApprovalStep::next(
            shared.allowance(&alice, Side::X),
            shared.allowance(&alice, Side::Y),
            want_x,
            want_y,
        );
        println!("Approval step: {step}");
        let Some(call) = step.pending_call(want_x, want_y) else {
            break;
        };
        shared.execute(alice, call)?;
    }
    if let Receipt::LiquidityAdded(deposit) = shared.execute(
        alice,
        ContractCall::AddLiquidity { x_desired: want_x, y_desired: want_y },
    )? {
        println!("\n{deposit}");
    }
    println!("Pool: {}", shared.snapshot());

    // ── 4. Bob sells 25 X with 1% slippage tolerance ────────────────────
    let sell: FixedPointAmount = "25".parse()?;
    shared.execute(bob, ContractCall::Mint { token: Side::X, to: bob, amount: sell })?;
    if swap_needs_approval(shared.allowance(&bob, Side::X), sell) {
        shared.execute(bob, ContractCall::Approve { token: Side::X, amount: sell })?;
    }
    let quoted = shared.quote(Side::X, sell)?;
    let min_out = quoted.mul_div(FixedPointAmount::new(99), FixedPointAmount::new(100))?;
    println!(
        "\nQuote: {} X -> {} Y (min {})",
        sell.format_fixed(4),
        quoted.format_fixed(4),
        min_out.format_fixed(4)
    );
    if let Receipt::Swapped(outcome) = shared.execute(
        bob,
        ContractCall::Swap {
            x_amount_in: sell,
            y_amount_in: FixedPointAmount::ZERO,
            min_amount_out: Some(min_out),
        },
    )? {
        println!("{outcome}");
    }

    // ── 5. Bob sells the Y back and loses the fee twice ─────────────────
    let back = shared.balance(&bob, Asset::Token(Side::Y));
    shared.execute(bob, ContractCall::Approve { token: Side::Y, amount: back })?;
    shared.execute(
        bob,
        ContractCall::Swap {
            x_amount_in: FixedPointAmount::ZERO,
            y_amount_in: back,
            min_amount_out: None,
        },
    )?;

    // ── 6. Alice redeems half her shares ────────────────────────────────
    let half = shared
        .balance(&alice, Asset::LpShare)
        .mul_div(FixedPointAmount::new(1), FixedPointAmount::new(2))?;
    if let Receipt::LiquidityRemoved(withdrawal) =
        shared.execute(alice, ContractCall::RemoveLiquidity { lp_amount: half })?
    {
        println!("\n{withdrawal}");
    }

    // ── 7. Final state ──────────────────────────────────────────────────
    println!("\nBalances:");
    show("alice", &shared, &alice);
    show("bob", &shared, &bob);
    println!("Pool: {}", shared.snapshot());

    println!("\nEvents:");
    while let Ok(event) = events.try_recv() {
        println!("  {event}");
    }
    Ok(())
}
