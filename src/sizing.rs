//! Primary position sizing: capital-based and risk-limit-based share counts

use crate::setup::TradeSetup;
use crate::types::{floor_shares, Cash, Price, ShareCount};

/// Shares affordable with an investment budget.
///
/// Returns `floor(total_investment / entry_price)`. An entry price at or
/// below zero means the position cannot be priced and yields zero shares,
/// as does a zero budget.
pub fn shares_from_capital(total_investment: Cash, entry_price: Price) -> ShareCount {
    if entry_price <= 0.0 {
        return 0;
    }
    floor_shares(total_investment / entry_price)
}

/// Outcome of risk-limit sizing.
///
/// Carries the raw risk per share alongside the share count so a caller
/// can tell an invalid stop placement (`risk_per_share <= 0`, shares
/// forced to zero) apart from a valid zero-share outcome where the risk
/// budget is simply smaller than the risk per share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSizing {
    /// Shares the risk budget allows
    pub shares: ShareCount,
    /// Raw direction-adjusted risk per share, before cost adjustments
    pub risk_per_share: Cash,
}

impl RiskSizing {
    /// Whether the stop sits on the loss side of the entry
    pub fn stop_is_valid(&self) -> bool {
        self.risk_per_share > 0.0
    }
}

/// Shares permitted by a maximum tolerable loss.
///
/// `shares = floor(max_risk / risk_per_share)` when the stop is valid.
/// When the stop sits on the wrong side of the entry the share count is
/// zero and the non-positive `risk_per_share` signals why.
pub fn shares_from_risk_limit(max_risk: Cash, setup: &TradeSetup) -> RiskSizing {
    let risk_per_share = setup.risk_per_share();
    if risk_per_share <= 0.0 {
        return RiskSizing {
            shares: 0,
            risk_per_share,
        };
    }
    RiskSizing {
        shares: floor_shares(max_risk / risk_per_share),
        risk_per_share,
    }
}
