//! Free-form numeric input parsing
//!
//! The engine only ever sees parsed numbers; this module is the
//! collaborator that turns user text into them. Empty input means "not
//! yet provided" and maps to `None`, which is deliberately distinct from
//! an explicit zero. Malformed input is rejected with an error rather
//! than silently defaulted.

use crate::error::{Result, SizerError};
use crate::types::Percent;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₨', '₹'];

fn is_currency_char(c: char) -> bool {
    c.is_alphabetic() || CURRENCY_SYMBOLS.contains(&c)
}

/// Parse a monetary or price amount from user text.
///
/// Tolerates thousands separators and a currency prefix or suffix:
/// `"50,000"`, `"PKR 1,234.56"` and `"$150"` all parse. Whitespace-only
/// input is `Ok(None)`.
pub fn parse_amount(input: &str) -> Result<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();
    let stripped = cleaned
        .trim_start_matches(is_currency_char)
        .trim_end_matches(is_currency_char)
        .trim();

    let value: f64 = stripped
        .parse()
        .map_err(|_| SizerError::ParseError(input.to_string()))?;

    if !value.is_finite() {
        return Err(SizerError::ParseError(input.to_string()));
    }
    Ok(Some(value))
}

/// Parse a percentage in the 0-100 range, with or without a `%` suffix.
pub fn parse_percent(input: &str) -> Result<Option<Percent>> {
    let value = match parse_amount(input.trim().trim_end_matches('%'))? {
        Some(value) => value,
        None => return Ok(None),
    };
    if !(0.0..=100.0).contains(&value) {
        return Err(SizerError::PercentOutOfRange(value));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("150").unwrap(), Some(150.0));
        assert_eq!(parse_amount("151.25").unwrap(), Some(151.25));
        assert_eq!(parse_amount(" 140.5 ").unwrap(), Some(140.5));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_amount("50,000").unwrap(), Some(50_000.0));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), Some(1_234_567.89));
    }

    #[test]
    fn test_currency_prefixes() {
        assert_eq!(parse_amount("PKR 50,000").unwrap(), Some(50_000.0));
        assert_eq!(parse_amount("$150").unwrap(), Some(150.0));
        assert_eq!(parse_amount("1,234.56 PKR").unwrap(), Some(1_234.56));
    }

    #[test]
    fn test_empty_is_not_provided() {
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_amount("   ").unwrap(), None);
    }

    #[test]
    fn test_zero_is_provided() {
        // Zero is a value the user typed, not a missing field.
        assert_eq!(parse_amount("0").unwrap(), Some(0.0));
        assert_eq!(parse_amount("0.00").unwrap(), Some(0.0));
    }

    #[test]
    fn test_malformed_is_rejected() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12.3.4").is_err());
        assert!(parse_amount("PKR").is_err());
    }

    #[test]
    fn test_percent() {
        assert_eq!(parse_percent("2").unwrap(), Some(2.0));
        assert_eq!(parse_percent("2.5%").unwrap(), Some(2.5));
        assert_eq!(parse_percent("").unwrap(), None);
        assert!(matches!(
            parse_percent("150"),
            Err(SizerError::PercentOutOfRange(v)) if v == 150.0
        ));
        assert!(matches!(
            parse_percent("-1"),
            Err(SizerError::PercentOutOfRange(_))
        ));
    }
}
