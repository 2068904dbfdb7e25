//! # Future Value Calculation
//!
//! Compound growth of a single amount: `FV = P · (1 + rate)^years`.
//! Results are rounded to 2 decimals.
//!
//! ```rust
//! use calc_core::calculations::future_value::future_value;
//!
//! let result = future_value(100.0, 10.0, 5.0);
//! assert_eq!(result.future_value, 161.05);
//! assert_eq!(result.total_interest, 61.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::format::round_to;
use crate::units::Percent;

/// Input for the future value calculator.
///
/// ## JSON Example
///
/// ```json
/// { "initial_amount": 100.0, "annual_rate_percent": 10.0, "years": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureValueInput {
    /// Amount invested today
    pub initial_amount: f64,

    /// Annual growth rate in percent
    pub annual_rate_percent: f64,

    /// Years to compound
    pub years: f64,
}

/// Growth of the initial amount, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureValueResult {
    pub future_value: f64,
    pub total_interest: f64,

    /// Initial amount as a share of the future value, in percent
    pub principal_percent: f64,

    /// Interest as a share of the future value, in percent
    pub interest_percent: f64,
}

/// Compound `initial` for `years`.
///
/// Computes only for a positive initial amount and a non-negative horizon;
/// anything else yields an all-zero result.
pub fn future_value(initial: f64, annual_rate_percent: f64, years: f64) -> FutureValueResult {
    if initial <= 0.0 || years < 0.0 {
        return FutureValueResult {
            future_value: 0.0,
            total_interest: 0.0,
            principal_percent: 0.0,
            interest_percent: 0.0,
        };
    }

    let rate = Percent(annual_rate_percent).as_fraction();
    let value = initial * (1.0 + rate).powf(years);

    let future_value = round_to(value, 2);
    let total_interest = round_to(value - initial, 2);

    let (principal_percent, interest_percent) = if future_value > 0.0 {
        (initial / future_value * 100.0, total_interest / future_value * 100.0)
    } else {
        (0.0, 0.0)
    };

    FutureValueResult {
        future_value,
        total_interest,
        principal_percent,
        interest_percent,
    }
}

/// Calculate the future value. Never fails; out-of-domain input yields zeros.
pub fn calculate(input: &FutureValueInput) -> CalcResult<FutureValueResult> {
    Ok(future_value(
        input.initial_amount,
        input.annual_rate_percent,
        input.years,
    ))
}
