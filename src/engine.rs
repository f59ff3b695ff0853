//! Position calculator: the full sizing pipeline
//!
//! Control flow per calculation: a sizing mode produces a candidate share
//! count, [`trade_metrics`](crate::metrics::trade_metrics) derives the
//! financial outcomes, and an optional secondary cap shrinks the position
//! (with recomputation) before the report is assembled. The calculator is
//! stateless; every call consumes an immutable input snapshot.

use crate::caps::{clamp_position, AffordabilityCap, CapResult, PortfolioPercentCap};
use crate::metrics::{trade_metrics, TradeMetrics};
use crate::setup::{SecondaryCap, SizingMode, TradeSetup};
use crate::sizing::{shares_from_capital, shares_from_risk_limit};
use crate::types::{Cash, ShareCount};
use serde::{Deserialize, Serialize};

/// How a calculation resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizingStatus {
    /// A required input is missing or zero; nothing to compute yet
    AwaitingInput,
    /// The stop sits on the wrong side of the entry; the setup is invalid
    InvalidStop,
    /// Valid setup, but the budget is too small for even one share
    NoRoom,
    /// A positive share count was produced
    Sized,
}

/// Advisory conditions attached to a report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingWarning {
    /// The portfolio-percent rule shrank the position
    CappedByPortfolioRule { from: ShareCount, to: ShareCount },
    /// The position costs more than the capital on hand
    ExceedsCapital { required: Cash, available: Cash },
}

/// Outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    /// The setup the report was computed from
    pub setup: TradeSetup,
    /// The sizing mode used
    pub mode: SizingMode,
    /// Derived risk/reward figures
    pub metrics: TradeMetrics,
    /// Cost of the position at the entry price (shares x entry)
    pub required_investment: Cash,
    /// Outcome classification
    pub status: SizingStatus,
    /// Advisory conditions; never fatal
    pub warnings: Vec<SizingWarning>,
}

impl PositionReport {
    /// Final share count after all caps
    pub fn shares(&self) -> ShareCount {
        self.metrics.shares
    }
}

/// Stateless position and risk calculator
#[derive(Debug, Default)]
pub struct PositionCalculator;

impl PositionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full sizing pipeline for one input snapshot.
    ///
    /// Never fails: degenerate inputs come back as a zero-share report
    /// with a status explaining why.
    pub fn calculate(
        &self,
        setup: &TradeSetup,
        mode: &SizingMode,
        cap: Option<&SecondaryCap>,
    ) -> PositionReport {
        let (shares, status) = self.size_position(setup, mode);
        let metrics = trade_metrics(setup, shares);
        let mut warnings = Vec::new();

        let metrics = match cap {
            Some(secondary) => {
                let percent_cap = PortfolioPercentCap::from(*secondary);
                match clamp_position(setup, metrics, &percent_cap) {
                    CapResult::Clamped { metrics, from, to } => {
                        warnings.push(SizingWarning::CappedByPortfolioRule { from, to });
                        metrics
                    }
                    CapResult::Unchanged(metrics) => metrics,
                }
            }
            None => metrics,
        };

        let required_investment = metrics.shares as f64 * setup.entry_price;

        if let Some(secondary) = cap {
            if required_investment > secondary.available_capital {
                warnings.push(SizingWarning::ExceedsCapital {
                    required: required_investment,
                    available: secondary.available_capital,
                });
            }
        }

        log::debug!(
            "sized {:?} position: {} shares, status {:?}, investment {:.2}",
            setup.direction,
            metrics.shares,
            status,
            required_investment
        );

        PositionReport {
            setup: *setup,
            mode: *mode,
            metrics,
            required_investment,
            status: Self::reclassify(status, metrics.shares),
            warnings,
        }
    }

    /// Shrink a report's position to what `available_capital` can buy.
    ///
    /// Caller-triggered companion to the risk-limit flow: risk-based
    /// sizing can demand more capital than the account holds, and the
    /// caller decides whether to clamp. Idempotent, and a no-op when the
    /// position is already affordable.
    pub fn clamp_to_affordable(
        &self,
        report: &PositionReport,
        available_capital: Cash,
    ) -> PositionReport {
        let cap = AffordabilityCap::new(available_capital);
        let (metrics, mut warnings) = match clamp_position(&report.setup, report.metrics, &cap) {
            CapResult::Clamped { metrics, .. } => {
                // Clamp resolved the shortfall; drop any stale capital warning.
                let kept: Vec<SizingWarning> = report
                    .warnings
                    .iter()
                    .copied()
                    .filter(|w| !matches!(w, SizingWarning::ExceedsCapital { .. }))
                    .collect();
                (metrics, kept)
            }
            CapResult::Unchanged(metrics) => (metrics, report.warnings.clone()),
        };

        let required_investment = metrics.shares as f64 * report.setup.entry_price;
        if required_investment > available_capital {
            let already_warned = warnings
                .iter()
                .any(|w| matches!(w, SizingWarning::ExceedsCapital { .. }));
            if !already_warned {
                warnings.push(SizingWarning::ExceedsCapital {
                    required: required_investment,
                    available: available_capital,
                });
            }
        }

        PositionReport {
            setup: report.setup,
            mode: report.mode,
            metrics,
            required_investment,
            status: Self::reclassify(report.status, metrics.shares),
            warnings,
        }
    }

    fn size_position(&self, setup: &TradeSetup, mode: &SizingMode) -> (ShareCount, SizingStatus) {
        match *mode {
            SizingMode::ByCapital { total_investment } => {
                if setup.entry_price <= 0.0 || total_investment <= 0.0 {
                    return (0, SizingStatus::AwaitingInput);
                }
                (
                    shares_from_capital(total_investment, setup.entry_price),
                    SizingStatus::Sized,
                )
            }
            SizingMode::ByRiskLimit { max_risk } => {
                if setup.entry_price <= 0.0 || setup.stop_loss <= 0.0 || max_risk <= 0.0 {
                    return (0, SizingStatus::AwaitingInput);
                }
                let sizing = shares_from_risk_limit(max_risk, setup);
                if !sizing.stop_is_valid() {
                    return (0, SizingStatus::InvalidStop);
                }
                (sizing.shares, SizingStatus::Sized)
            }
        }
    }

    /// A clamp (or a too-small budget) can leave a nominally sized
    /// position with zero shares; report that as no room to size.
    fn reclassify(status: SizingStatus, shares: ShareCount) -> SizingStatus {
        if status == SizingStatus::Sized && shares == 0 {
            SizingStatus::NoRoom
        } else {
            status
        }
    }
}
