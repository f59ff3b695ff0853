//! Investment-based risk and reward calculation.
//!
//! Run with: cargo run --example capital_calculator

use anyhow::Result;
use trade_sizer::{
    engine::PositionCalculator,
    format::{format_cash, format_ratio, format_shares, Currency},
    setup::{SecondaryCap, SizingMode, TradeSetup},
};

fn main() -> Result<()> {
    env_logger::init();

    let setup = TradeSetup::long(150.0, 140.0, 180.0).with_costs(1.0, 0.5);
    let investment = 50_000.0;

    // Cap the position at 40% of the portfolio.
    let cap = SecondaryCap::new(40.0, investment);

    let report = PositionCalculator::new().calculate(
        &setup,
        &SizingMode::by_capital(investment),
        Some(&cap),
    );

    let currency = Currency::PKR;
    println!("Investment-based Calculator");
    println!("  calculated shares:   {}", format_shares(report.shares()));
    println!(
        "  required investment: {}",
        format_cash(currency, report.required_investment)
    );
    println!(
        "  risk per share:      {}",
        format_cash(currency, report.metrics.adjusted_risk_per_share)
    );
    println!(
        "  total risk:          {}",
        format_cash(currency, report.metrics.total_risk)
    );
    println!(
        "  total profit:        {}",
        format_cash(currency, report.metrics.total_reward)
    );
    println!(
        "  reward : risk:       {}",
        format_ratio(report.metrics.reward_risk_ratio)
    );

    Ok(())
}
