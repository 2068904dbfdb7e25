//! # Rounding and Currency Formatting
//!
//! Amounts are displayed in Indian style: the last three integer digits
//! form one group and the rest are grouped in pairs (`₹10,00,000`).
//!
//! ```rust
//! use calc_core::format::{format_inr, round_to};
//!
//! assert_eq!(format_inr(1_000_000.0, 0), "₹10,00,000");
//! assert_eq!(format_inr(21_494.42, 2), "₹21,494.42");
//! assert_eq!(round_to(66.6666, 2), 66.67);
//! ```

/// Rupee sign used by [`format_inr`]
pub const INR_SYMBOL: &str = "₹";

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Round to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Group an unsigned digit string the Indian way (3, then 2, 2, ...).
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format an amount with a currency symbol, Indian grouping and exactly
/// `fraction_digits` decimals.
pub fn format_currency(amount: f64, symbol: &str, fraction_digits: u32) -> String {
    if !amount.is_finite() {
        return format!("{}-", symbol);
    }

    let fixed = format!("{:.*}", fraction_digits as usize, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    // -0.004 rounds to "0.00" and should not keep its sign
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(f) => format!("{}{}{}.{}", sign, symbol, group_indian(int_part), f),
        None => format!("{}{}{}", sign, symbol, group_indian(int_part)),
    }
}

/// Format an amount in rupees.
pub fn format_inr(amount: f64, fraction_digits: u32) -> String {
    format_currency(amount, INR_SYMBOL, fraction_digits)
}

/// Short lakh/crore form for summary lines (`25.0 L`, `1.0 Cr`).
pub fn format_compact_inr(amount: f64) -> String {
    let magnitude = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if magnitude >= CRORE {
        format!("{}{:.1} Cr", sign, magnitude / CRORE)
    } else if magnitude >= LAKH {
        format!("{}{:.1} L", sign, magnitude / LAKH)
    } else {
        format!("{}{:.0}", sign, magnitude)
    }
}
