//! # Trade-Sizer
//!
//! A position sizing and risk/reward calculation engine for discretionary
//! traders: given a trade setup (entry, stop-loss, target) and either an
//! investment budget or a maximum tolerable loss, it computes how many
//! shares to buy and what that implies for potential loss and gain.
//!
//! The engine is pure and synchronous. Presentation (tables, charts,
//! exports) belongs to the caller; parsing helpers in [`parse`] and
//! display helpers in [`format`] sit at that boundary.
//!
//! ## Example
//!
//! ```rust
//! use trade_sizer::prelude::*;
//!
//! let setup = TradeSetup::long(150.0, 140.0, 180.0);
//! let calculator = PositionCalculator::new();
//!
//! let report = calculator.calculate(&setup, &SizingMode::by_risk(5_000.0), None);
//! assert_eq!(report.shares(), 500);
//! assert_eq!(report.metrics.reward_risk_ratio, Some(3.0));
//! ```

pub mod caps;
pub mod engine;
pub mod error;
pub mod format;
pub mod journal;
pub mod metrics;
pub mod parse;
pub mod setup;
pub mod sizing;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::caps::{AffordabilityCap, CapResult, PortfolioPercentCap, PositionCap};
    pub use crate::engine::{PositionCalculator, PositionReport, SizingStatus, SizingWarning};
    pub use crate::error::{Result, SizerError};
    pub use crate::format::Currency;
    pub use crate::journal::{TradeJournal, TradeRecord};
    pub use crate::metrics::{trade_metrics, TradeMetrics};
    pub use crate::setup::{Direction, SecondaryCap, SizingMode, TradeSetup};
    pub use crate::sizing::{shares_from_capital, shares_from_risk_limit, RiskSizing};
    pub use crate::types::*;
}
