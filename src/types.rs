//! Core numeric types shared across the engine

/// Price type (using f64 for precision)
pub type Price = f64;

/// Money/cash type
pub type Cash = f64;

/// Percentage type (0.0 to 100.0)
pub type Percent = f64;

/// Reward:risk ratio type
pub type Ratio = f64;

/// Whole-share position size
pub type ShareCount = u64;

/// Truncate a real-valued share quotient toward zero.
///
/// Position sizes are always floored, never rounded up, so a computed
/// size never overstates what the budget can actually buy. Negative or
/// non-finite quotients map to zero shares.
pub fn floor_shares(quotient: f64) -> ShareCount {
    if quotient.is_finite() && quotient > 0.0 {
        quotient.floor() as ShareCount
    } else {
        0
    }
}
