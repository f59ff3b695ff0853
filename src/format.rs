//! Display formatting for money, shares, and ratios
//!
//! Output formatting for callers that want the conventional "PKR 50,000.00"
//! presentation. The currency here is a display label only; the engine
//! never converts between currencies.

use crate::types::{Cash, Ratio, ShareCount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currency (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Pakistani Rupee
    PKR,
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Indian Rupee
    INR,
    /// Japanese Yen
    JPY,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PKR => "PKR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PKR => "₨",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::INR => "₹",
            Currency::JPY => "¥",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PKR" => Some(Currency::PKR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "INR" => Some(Currency::INR),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Format a cash amount with its currency code: `PKR 50,000.00`
pub fn format_cash(currency: Currency, amount: Cash) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!(
        "{} {}{}.{}",
        currency.code(),
        sign,
        group_digits(int_part),
        frac_part
    )
}

/// Format a share count with thousands grouping
pub fn format_shares(shares: ShareCount) -> String {
    group_digits(&shares.to_string())
}

/// Format a reward:risk ratio: `3.00 : 1`, or `N/A` when undefined
pub fn format_ratio(ratio: Option<Ratio>) -> String {
    match ratio {
        Some(r) => format!("{:.2} : 1", r),
        None => "N/A".to_string(),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
