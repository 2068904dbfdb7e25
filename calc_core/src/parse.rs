//! # Form Field Parsing
//!
//! Calculators receive their numbers from free-text fields. These helpers
//! turn that text into values with the same forgiving rules everywhere:
//! a leading number is taken as-is (`"12.5 %"` -> 12.5), anything else
//! reads as zero.
//!
//! ```rust
//! use calc_core::parse::parse_number;
//!
//! assert_eq!(parse_number("  5000 "), 5000.0);
//! assert_eq!(parse_number("10.5%"), 10.5);
//! assert_eq!(parse_number("abc"), 0.0);
//! assert_eq!(parse_number(""), 0.0);
//! ```

use chrono::NaiveDate;

use crate::errors::{CalcError, CalcResult};

/// Date format accepted by [`parse_date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a numeric form field, returning 0 for empty or non-numeric text.
///
/// The longest leading run of number-like characters is used, so trailing
/// units or symbols are ignored. Non-finite values also read as 0.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse an optional numeric field, falling back to `default` when absent.
pub fn parse_number_or(text: Option<&str>, default: f64) -> f64 {
    text.map(parse_number).unwrap_or(default)
}

/// Parse a `YYYY-MM-DD` date field.
pub fn parse_date(field: &str, text: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
        CalcError::invalid_input(field, text, format!("Expected a date as YYYY-MM-DD ({})", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("100"), 100.0);
        assert_eq!(parse_number("-2.5"), -2.5);
        assert_eq!(parse_number("1e3"), 1000.0);
    }

    #[test]
    fn test_leading_number_with_suffix() {
        assert_eq!(parse_number("15 km/L"), 15.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("3.14.15"), 3.14);
    }

    #[test]
    fn test_non_numeric_reads_as_zero() {
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("e5"), 0.0);
        assert_eq!(parse_number("₹500"), 0.0);
    }

    #[test]
    fn test_parse_number_or() {
        assert_eq!(parse_number_or(None, 42.0), 42.0);
        assert_eq!(parse_number_or(Some("7"), 42.0), 7.0);
        assert_eq!(parse_number_or(Some("x"), 42.0), 0.0);
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("birth_date", " 1990-01-01 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

        let err = parse_date("birth_date", "01/01/1990").unwrap_err();
        assert_eq!(err.field(), Some("birth_date"));
    }
}
