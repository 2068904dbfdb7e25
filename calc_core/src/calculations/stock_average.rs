//! # Stock Average Calculation
//!
//! Averages the purchase price across several buys of the same stock.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::stock_average::{calculate, StockAverageInput, StockEntry};
//!
//! let input = StockAverageInput {
//!     entries: vec![StockEntry::new(10.0, 100.0), StockEntry::new(30.0, 80.0)],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_units, 40.0);
//! assert_eq!(result.total_amount, 3400.0);
//! assert!((result.average_price - 85.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One purchase: how many units at what price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StockEntry {
    /// Number of shares bought
    pub units: f64,

    /// Price paid per share
    pub price: f64,
}

impl StockEntry {
    pub fn new(units: f64, price: f64) -> Self {
        StockEntry { units, price }
    }

    /// Amount invested in this purchase (units x price)
    pub fn investment(&self) -> f64 {
        self.units * self.price
    }
}

/// Input for the stock average calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "entries": [
///     { "units": 10.0, "price": 100.0 },
///     { "units": 30.0, "price": 80.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAverageInput {
    /// Purchases to average (at least one)
    pub entries: Vec<StockEntry>,
}

impl Default for StockAverageInput {
    /// Two blank purchases, the shape of a fresh form
    fn default() -> Self {
        StockAverageInput {
            entries: vec![StockEntry::default(), StockEntry::default()],
        }
    }
}

impl StockAverageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.entries.is_empty() {
            return Err(CalcError::missing_field("entries"));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.units.is_nan() || entry.units < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("entries[{}].units", i),
                    entry.units.to_string(),
                    "Units cannot be negative",
                ));
            }
            if entry.price.is_nan() || entry.price < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("entries[{}].price", i),
                    entry.price.to_string(),
                    "Price cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results from the stock average calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAverageResult {
    /// Sum of units across all purchases
    pub total_units: f64,

    /// Weighted average price (0 when no units were bought)
    pub average_price: f64,

    /// Sum of units x price across all purchases
    pub total_amount: f64,

    /// Amount invested in each purchase, in input order
    pub entry_investments: Vec<f64>,
}

/// Sum units and invested amounts and derive the average price.
///
/// Returns an average of 0 when total units are 0 rather than dividing by
/// zero.
pub fn average_and_total(entries: &[StockEntry]) -> StockAverageResult {
    let total_units: f64 = entries.iter().map(|e| e.units).sum();
    let total_amount: f64 = entries.iter().map(StockEntry::investment).sum();
    let average_price = if total_units != 0.0 {
        total_amount / total_units
    } else {
        0.0
    };

    StockAverageResult {
        total_units,
        average_price,
        total_amount,
        entry_investments: entries.iter().map(StockEntry::investment).collect(),
    }
}

/// Calculate the average purchase price.
pub fn calculate(input: &StockAverageInput) -> CalcResult<StockAverageResult> {
    input.validate()?;
    Ok(average_and_total(&input.entries))
}
