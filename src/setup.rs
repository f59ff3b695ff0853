//! Trade setup inputs: prices, direction, sizing mode, secondary caps
//!
//! A [`TradeSetup`] is an immutable snapshot of one calculation's inputs.
//! Each user interaction constructs a fresh setup; nothing here is shared
//! or mutated across calculations.

use crate::types::{Cash, Percent, Price};
use serde::{Deserialize, Serialize};

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Buy first, sell higher: risk = entry - stop, reward = target - entry
    Long,
    /// Sell first, buy lower: risk = stop - entry, reward = entry - target
    Short,
}

/// Immutable inputs for a single position calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSetup {
    /// Entry price
    pub entry_price: Price,
    /// Stop-loss price
    pub stop_loss: Price,
    /// Target price (profit projection)
    pub target_price: Price,
    /// Trade direction
    pub direction: Direction,
    /// Estimated commission per share
    pub commission_per_share: Cash,
    /// Estimated slippage per share
    pub slippage_per_share: Cash,
}

impl TradeSetup {
    /// Create a long setup with zero commission and slippage
    pub fn long(entry_price: Price, stop_loss: Price, target_price: Price) -> Self {
        Self {
            entry_price,
            stop_loss,
            target_price,
            direction: Direction::Long,
            commission_per_share: 0.0,
            slippage_per_share: 0.0,
        }
    }

    /// Create a short setup with zero commission and slippage
    pub fn short(entry_price: Price, stop_loss: Price, target_price: Price) -> Self {
        Self {
            entry_price,
            stop_loss,
            target_price,
            direction: Direction::Short,
            commission_per_share: 0.0,
            slippage_per_share: 0.0,
        }
    }

    /// Attach per-share commission and slippage estimates
    pub fn with_costs(mut self, commission_per_share: Cash, slippage_per_share: Cash) -> Self {
        self.commission_per_share = commission_per_share;
        self.slippage_per_share = slippage_per_share;
        self
    }

    /// Raw (cost-free) risk per share, direction-adjusted.
    ///
    /// Non-positive means the stop sits on the wrong side of the entry.
    pub fn risk_per_share(&self) -> Cash {
        match self.direction {
            Direction::Long => self.entry_price - self.stop_loss,
            Direction::Short => self.stop_loss - self.entry_price,
        }
    }

    /// Raw (cost-free) reward per share, direction-adjusted
    pub fn reward_per_share(&self) -> Cash {
        match self.direction {
            Direction::Long => self.target_price - self.entry_price,
            Direction::Short => self.entry_price - self.target_price,
        }
    }

    /// Combined per-share friction cost (commission + slippage)
    pub fn cost_per_share(&self) -> Cash {
        self.commission_per_share + self.slippage_per_share
    }
}

/// How the position size is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingMode {
    /// Size from an investment budget: shares = floor(budget / entry)
    ByCapital {
        /// Total amount available to invest in this position
        total_investment: Cash,
    },
    /// Size from a maximum tolerable loss: shares = floor(max_risk / risk_per_share)
    ByRiskLimit {
        /// Maximum acceptable loss if the stop is hit
        max_risk: Cash,
    },
}

impl SizingMode {
    /// Capital-based sizing
    pub fn by_capital(total_investment: Cash) -> Self {
        Self::ByCapital { total_investment }
    }

    /// Risk-limit sizing from an absolute loss amount
    pub fn by_risk(max_risk: Cash) -> Self {
        Self::ByRiskLimit { max_risk }
    }

    /// Risk-limit sizing from a percentage of capital
    /// (e.g. 2.0 on 100_000 capital gives a 2_000 risk budget)
    pub fn by_risk_percent(capital: Cash, risk_percent: Percent) -> Self {
        Self::ByRiskLimit {
            max_risk: capital * (risk_percent / 100.0),
        }
    }
}

/// Secondary position ceiling applied after primary sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryCap {
    /// Maximum percentage of capital for this position (0 = no cap)
    pub max_portfolio_percent: Percent,
    /// Capital available to the account
    pub available_capital: Cash,
}

impl SecondaryCap {
    pub fn new(max_portfolio_percent: Percent, available_capital: Cash) -> Self {
        Self {
            max_portfolio_percent,
            available_capital,
        }
    }
}
