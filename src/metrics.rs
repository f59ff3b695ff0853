//! Risk/reward metrics for a sized position
//!
//! Cost adjustment is deliberately conservative: commission and slippage
//! are added to risk per share and subtracted from reward per share, so
//! the figures never understate risk or overstate reward.

use crate::setup::TradeSetup;
use crate::types::{Cash, Ratio, ShareCount};
use serde::{Deserialize, Serialize};

/// Derived financial outcomes for a share count against a setup.
///
/// Immutable once computed; recomputing with identical inputs yields an
/// identical value. A degenerate setup is not an error: the raw
/// `risk_per_share` simply comes back non-positive and the ratio is
/// `None`, leaving interpretation to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeMetrics {
    /// Position size the metrics were computed for
    pub shares: ShareCount,
    /// Raw risk per share (may be <= 0, signaling an invalid setup)
    pub risk_per_share: Cash,
    /// Risk per share including commission and slippage
    pub adjusted_risk_per_share: Cash,
    /// Raw reward per share
    pub reward_per_share: Cash,
    /// Reward per share net of commission and slippage
    pub adjusted_reward_per_share: Cash,
    /// Total loss if the stop is hit (adjusted risk x shares)
    pub total_risk: Cash,
    /// Total profit if the target is hit (adjusted reward x shares)
    pub total_reward: Cash,
    /// Adjusted reward / adjusted risk; `None` when adjusted risk <= 0
    pub reward_risk_ratio: Option<Ratio>,
}

/// Compute the full metrics set for `shares` of a setup.
pub fn trade_metrics(setup: &TradeSetup, shares: ShareCount) -> TradeMetrics {
    let risk_per_share = setup.risk_per_share();
    let reward_per_share = setup.reward_per_share();
    let cost = setup.cost_per_share();

    let adjusted_risk_per_share = risk_per_share + cost;
    let adjusted_reward_per_share = reward_per_share - cost;

    let total_risk = adjusted_risk_per_share * shares as f64;
    let total_reward = adjusted_reward_per_share * shares as f64;

    // The single division guard: a ratio exists only against positive
    // adjusted risk. Never divide by zero or a negative number.
    let reward_risk_ratio = if adjusted_risk_per_share > 0.0 {
        Some(adjusted_reward_per_share / adjusted_risk_per_share)
    } else {
        None
    };

    TradeMetrics {
        shares,
        risk_per_share,
        adjusted_risk_per_share,
        reward_per_share,
        adjusted_reward_per_share,
        total_risk,
        total_reward,
        reward_risk_ratio,
    }
}
