//! Error types for trade-sizer
//!
//! The calculation engine itself never fails: every degenerate input maps
//! to a defined result value. Errors only arise at the boundary, when
//! converting free-form user text into numbers or serializing the journal.

use thiserror::Error;

/// Main error type for trade-sizer
#[derive(Error, Debug)]
pub enum SizerError {
    #[error("Unparseable amount: {0}")]
    ParseError(String),

    #[error("Percentage out of range (expected 0-100): {0}")]
    PercentOutOfRange(f64),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for trade-sizer operations
pub type Result<T> = std::result::Result<T, SizerError>;
