//! # Stock Split Calculation
//!
//! Works out holdings after a `new:old` split: a 1:2 split grants one new
//! share for every two held. Whole shares only; the fractional leftover is
//! paid out in cash at the post-split price.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::stock_split::split_shares;
//!
//! let result = split_shares(100.0, "1:2", 100.0).unwrap();
//! assert_eq!(result.additional_shares, 50.0);
//! assert_eq!(result.total_shares, 150.0);
//! assert_eq!(result.new_price, 66.67);
//! assert_eq!(result.refund_amount, 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::round_to;

/// Split ratio `new:old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRatio {
    /// Shares granted per block
    pub new: u32,

    /// Size of the held block
    pub old: u32,
}

impl SplitRatio {
    pub fn new(new: u32, old: u32) -> CalcResult<Self> {
        if new == 0 || old == 0 {
            return Err(CalcError::invalid_input(
                "split_ratio",
                format!("{}:{}", new, old),
                "Both sides of the ratio must be positive",
            ));
        }
        Ok(SplitRatio { new, old })
    }

    /// New shares granted per share held
    pub fn factor(&self) -> f64 {
        f64::from(self.new) / f64::from(self.old)
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.new, self.old)
    }
}

impl FromStr for SplitRatio {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CalcError::invalid_input("split_ratio", s, reason);

        let (new, old) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("Expected a ratio like 1:2"))?;

        let parse_side = |side: &str| -> CalcResult<u32> {
            let side = side.trim();
            if side.starts_with('-') {
                return Err(invalid("Both sides of the ratio must be positive"));
            }
            side.parse::<u32>()
                .map_err(|_| invalid("Both sides of the ratio must be whole numbers"))
        };

        SplitRatio::new(parse_side(new)?, parse_side(old)?)
    }
}

impl Serialize for SplitRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SplitRatio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Input for the stock split calculator.
///
/// ## JSON Example
///
/// ```json
/// { "current_price": 100.0, "split_ratio": "1:2", "shares_owned": 100.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSplitInput {
    /// Share price before the split
    pub current_price: f64,

    /// Ratio as `new:old`
    pub split_ratio: SplitRatio,

    /// Shares held before the split
    pub shares_owned: f64,
}

impl StockSplitInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.current_price <= 0.0 {
            return Err(CalcError::invalid_input(
                "current_price",
                self.current_price.to_string(),
                "Price must be positive",
            ));
        }
        if self.shares_owned <= 0.0 {
            return Err(CalcError::invalid_input(
                "shares_owned",
                self.shares_owned.to_string(),
                "Shares owned must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the stock split calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSplitResult {
    /// Price per share after the split, rounded to 2 decimals
    pub new_price: f64,

    /// Whole shares granted by the split
    pub additional_shares: f64,

    /// Shares held after the split
    pub total_shares: f64,

    /// Cash paid for the fractional share left over, rounded to 2 decimals
    pub refund_amount: f64,
}

/// Calculate post-split holdings.
pub fn calculate(input: &StockSplitInput) -> CalcResult<StockSplitResult> {
    input.validate()?;

    let price = input.current_price;
    let shares = input.shares_owned;

    let ratio = input.split_ratio;
    let additional_exact = (shares / f64::from(ratio.old)) * f64::from(ratio.new);
    let additional_shares = additional_exact.floor();
    let total_shares = shares + additional_shares;
    let new_price = (price * shares) / total_shares;
    let fractional = additional_exact - additional_shares;
    let refund_amount = fractional * new_price;

    Ok(StockSplitResult {
        new_price: round_to(new_price, 2),
        additional_shares,
        total_shares,
        refund_amount: round_to(refund_amount, 2),
    })
}

/// Parse `ratio` and calculate post-split holdings.
pub fn split_shares(current_price: f64, ratio: &str, shares_owned: f64) -> CalcResult<StockSplitResult> {
    let input = StockSplitInput {
        current_price,
        split_ratio: ratio.parse()?,
        shares_owned,
    };
    calculate(&input)
}
