//! Session trade journal
//!
//! An in-memory log of completed calculations, scoped to the current
//! session. A record can seed the next calculation (cross-screen prefill);
//! the engine treats the seed as ordinary input with no linked semantics.
//! Export is the caller's job; `to_json` just hands over the data.

use crate::engine::PositionReport;
use crate::error::Result;
use crate::setup::{SizingMode, TradeSetup};
use crate::types::{Cash, Ratio, ShareCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of one completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Record identifier
    pub id: Uuid,
    /// When the calculation was recorded
    pub recorded_at: DateTime<Utc>,
    /// Stock name / symbol as the user entered it
    pub symbol: String,
    /// The input snapshot the calculation consumed
    pub setup: TradeSetup,
    /// The sizing mode used
    pub mode: SizingMode,
    /// Final share count after caps
    pub shares: ShareCount,
    /// Cost of the position at entry
    pub required_investment: Cash,
    /// Total loss if the stop is hit
    pub total_risk: Cash,
    /// Total profit if the target is hit
    pub total_reward: Cash,
    /// Reward:risk ratio, when defined
    pub reward_risk_ratio: Option<Ratio>,
}

impl TradeRecord {
    /// Capture a report into a journal record
    pub fn from_report(symbol: impl Into<String>, report: &PositionReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            symbol: symbol.into(),
            setup: report.setup,
            mode: report.mode,
            shares: report.metrics.shares,
            required_investment: report.required_investment,
            total_risk: report.metrics.total_risk,
            total_reward: report.metrics.total_reward,
            reward_risk_ratio: report.metrics.reward_risk_ratio,
        }
    }

    /// Prefill seed for a new calculation.
    ///
    /// Just the recorded inputs handed back as ordinary input; running
    /// them through the engine again reproduces the recorded outcome.
    pub fn seed(&self) -> TradeSetup {
        self.setup
    }
}

/// In-memory, session-scoped log of trade records
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TradeJournal {
    records: Vec<TradeRecord>,
}

impl TradeJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn record(&mut self, record: TradeRecord) {
        log::debug!("journal: recorded {} ({} shares)", record.symbol, record.shares);
        self.records.push(record);
    }

    /// Most recently recorded entry, if any
    pub fn last(&self) -> Option<&TradeRecord> {
        self.records.last()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records (end of session)
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serialize the journal for the caller to export or display
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
