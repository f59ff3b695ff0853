//! Position sizing by risk limit, driven from user-style text inputs.
//!
//! Run with: cargo run --example position_sizing

use anyhow::Result;
use trade_sizer::{
    engine::{PositionCalculator, SizingStatus, SizingWarning},
    format::{format_cash, format_ratio, format_shares, Currency},
    journal::{TradeJournal, TradeRecord},
    parse::{parse_amount, parse_percent},
    setup::{SecondaryCap, SizingMode, TradeSetup},
};

fn main() -> Result<()> {
    env_logger::init();

    // Values as a trader would type them into a form.
    let entry = parse_amount("PKR 150.00")?.expect("entry provided");
    let stop = parse_amount("140")?.expect("stop provided");
    let target = parse_amount("180")?.expect("target provided");
    let capital = parse_amount("100,000")?.expect("capital provided");
    let risk_percent = parse_percent("2%")?.expect("risk percent provided");

    let setup = TradeSetup::long(entry, stop, target).with_costs(0.25, 0.1);
    let mode = SizingMode::by_risk_percent(capital, risk_percent);
    let cap = SecondaryCap::new(25.0, capital);

    let calculator = PositionCalculator::new();
    let report = calculator.calculate(&setup, &mode, Some(&cap));

    let currency = Currency::PKR;
    println!("Position Sizing by Risk Limit");
    println!("  shares to buy:       {}", format_shares(report.shares()));
    println!(
        "  investment required: {}",
        format_cash(currency, report.required_investment)
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

    match report.status {
        SizingStatus::InvalidStop => {
            println!("  note: stop loss is on the wrong side of the entry price")
        }
        SizingStatus::NoRoom => println!("  note: risk budget too small for a single share"),
        SizingStatus::AwaitingInput => println!("  note: waiting for required inputs"),
        SizingStatus::Sized => {}
    }

    for warning in &report.warnings {
        match warning {
            SizingWarning::CappedByPortfolioRule { from, to } => {
                println!("  warning: portfolio rule reduced shares from {} to {}", from, to)
            }
            SizingWarning::ExceedsCapital {
                required,
                available,
            } => println!(
                "  warning: requires {} but only {} available",
                format_cash(currency, *required),
                format_cash(currency, *available)
            ),
        }
    }

    // Clamp to what the account can actually fund, as if the trader
    // pressed "adjust shares to fit capital".
    let affordable = calculator.clamp_to_affordable(&report, capital);
    if affordable.shares() != report.shares() {
        println!(
            "  adjusted to {} affordable shares",
            format_shares(affordable.shares())
        );
    }

    // Session journal: the record seeds the next screen's prefill.
    let mut journal = TradeJournal::new();
    journal.record(TradeRecord::from_report("PSX:ABC", &affordable));
    println!("\nSession journal:\n{}", journal.to_json()?);

    Ok(())
}
