//! Secondary position ceilings applied after primary sizing
//!
//! Caps only ever shrink a position. Applying the same cap twice is a
//! no-op the second time.

use crate::metrics::{trade_metrics, TradeMetrics};
use crate::setup::{SecondaryCap, TradeSetup};
use crate::types::{floor_shares, Cash, Percent, Price, ShareCount};

/// A ceiling on position size
pub trait PositionCap {
    /// Maximum shares the cap permits at this entry price, or `None`
    /// when the cap does not apply
    fn allowed_shares(&self, entry_price: Price) -> Option<ShareCount>;

    /// Cap name for log messages
    fn name(&self) -> &str;
}

/// Limit a position to a percentage of available capital.
///
/// A zero (or negative) percentage disables the cap.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioPercentCap {
    /// Maximum percentage of capital for this position
    pub max_portfolio_percent: Percent,
    /// Capital the percentage applies to
    pub available_capital: Cash,
}

impl PortfolioPercentCap {
    pub fn new(max_portfolio_percent: Percent, available_capital: Cash) -> Self {
        Self {
            max_portfolio_percent,
            available_capital,
        }
    }
}

impl From<SecondaryCap> for PortfolioPercentCap {
    fn from(cap: SecondaryCap) -> Self {
        Self::new(cap.max_portfolio_percent, cap.available_capital)
    }
}

impl PositionCap for PortfolioPercentCap {
    fn allowed_shares(&self, entry_price: Price) -> Option<ShareCount> {
        if self.max_portfolio_percent <= 0.0 {
            return None;
        }
        if entry_price <= 0.0 {
            return Some(0);
        }
        let cap_amount = (self.max_portfolio_percent / 100.0) * self.available_capital;
        Some(floor_shares(cap_amount / entry_price))
    }

    fn name(&self) -> &str {
        "PortfolioPercentCap"
    }
}

/// Limit a position to what available capital can actually buy
#[derive(Debug, Clone, Copy)]
pub struct AffordabilityCap {
    /// Capital available to fund the position
    pub available_capital: Cash,
}

impl AffordabilityCap {
    pub fn new(available_capital: Cash) -> Self {
        Self { available_capital }
    }
}

impl PositionCap for AffordabilityCap {
    fn allowed_shares(&self, entry_price: Price) -> Option<ShareCount> {
        if entry_price <= 0.0 {
            return Some(0);
        }
        Some(floor_shares(self.available_capital / entry_price))
    }

    fn name(&self) -> &str {
        "AffordabilityCap"
    }
}

/// Result of reconciling a position against a cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapResult {
    /// Shares were within the cap; metrics pass through untouched
    Unchanged(TradeMetrics),
    /// Shares exceeded the cap and were shrunk; metrics recomputed
    Clamped {
        metrics: TradeMetrics,
        from: ShareCount,
        to: ShareCount,
    },
}

impl CapResult {
    /// The metrics after cap application
    pub fn metrics(&self) -> &TradeMetrics {
        match self {
            CapResult::Unchanged(metrics) => metrics,
            CapResult::Clamped { metrics, .. } => metrics,
        }
    }
}

/// Reconcile computed metrics against a cap, recomputing them when the
/// share count shrinks. Never increases a share count.
pub fn clamp_position(setup: &TradeSetup, current: TradeMetrics, cap: &dyn PositionCap) -> CapResult {
    let allowed = match cap.allowed_shares(setup.entry_price) {
        Some(allowed) => allowed,
        None => return CapResult::Unchanged(current),
    };

    if current.shares <= allowed {
        return CapResult::Unchanged(current);
    }

    log::debug!(
        "{} reduced position from {} to {} shares",
        cap.name(),
        current.shares,
        allowed
    );

    CapResult::Clamped {
        metrics: trade_metrics(setup, allowed),
        from: current.shares,
        to: allowed,
    }
}
