//! # EMI Calculation
//!
//! Equated monthly installment for an amortizing loan:
//!
//! ```text
//! EMI = P · R · (1 + R)^N / ((1 + R)^N − 1)
//! ```
//!
//! with `R` the monthly rate (annual % / 1200) and `N` the term in months.
//! The formula has no meaning for a zero rate or term, so those inputs are
//! rejected instead of producing a number.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::emi::emi;
//!
//! let result = emi(1_000_000.0, 10.5, 5.0).unwrap();
//! assert!((result.monthly_emi - 21_494.0).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Percent;

/// Input parameters for a loan.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 1000000.0, "annual_rate_percent": 10.5, "years": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan amount
    pub principal: f64,

    /// Annual interest rate in percent (10.5 means 10.5 %)
    pub annual_rate_percent: f64,

    /// Loan term in years (fractions allowed)
    pub years: f64,
}

impl EmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Loan amount must be positive",
            ));
        }
        if self.annual_rate_percent <= 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_percent",
                self.annual_rate_percent.to_string(),
                "Interest rate must be positive",
            ));
        }
        if self.years <= 0.0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "Loan term must be positive",
            ));
        }
        Ok(())
    }

    /// Monthly decimal rate R
    pub fn monthly_rate(&self) -> f64 {
        Percent(self.annual_rate_percent).monthly_rate()
    }

    /// Number of monthly installments N
    pub fn months(&self) -> f64 {
        self.years * 12.0
    }
}

/// Results from the EMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_emi": 21493.9,
///   "total_interest": 289634.02,
///   "total_amount": 1289634.02,
///   "principal_percent": 77.54,
///   "interest_percent": 22.46
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Fixed monthly installment
    pub monthly_emi: f64,

    /// Interest paid over the whole term
    pub total_interest: f64,

    /// Everything paid over the term (EMI x N)
    pub total_amount: f64,

    /// Principal as a share of the total paid, in percent
    pub principal_percent: f64,

    /// Interest as a share of the total paid, in percent
    pub interest_percent: f64,
}

/// Calculate the monthly installment and totals for a loan.
pub fn calculate(input: &EmiInput) -> CalcResult<EmiResult> {
    input.validate()?;

    let p = input.principal;
    let r = input.monthly_rate();
    let n = input.months();

    let growth = (1.0 + r).powf(n);
    let monthly_emi = p * r * growth / (growth - 1.0);
    // A rate too small to move 1 + r, or a term long enough to overflow
    if growth - 1.0 <= 0.0 || !monthly_emi.is_finite() {
        return Err(CalcError::calculation_failed(
            "emi",
            format!("rate {}% over {} years is out of range", input.annual_rate_percent, input.years),
        ));
    }
    let total_amount = monthly_emi * n;
    let total_interest = total_amount - p;

    let (principal_percent, interest_percent) = if total_amount > 0.0 {
        (p / total_amount * 100.0, total_interest / total_amount * 100.0)
    } else {
        (0.0, 0.0)
    };

    Ok(EmiResult {
        monthly_emi,
        total_interest,
        total_amount,
        principal_percent,
        interest_percent,
    })
}

/// Convenience wrapper over [`calculate`].
pub fn emi(principal: f64, annual_rate_percent: f64, years: f64) -> CalcResult<EmiResult> {
    calculate(&EmiInput {
        principal,
        annual_rate_percent,
        years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanishing_rate_fails() {
        let err = emi(100_000.0, 1e-14, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(emi(100_000.0, 10.0, 1e9).is_err());
    }

    #[test]
    fn test_home_loan() {
        let result = emi(1_000_000.0, 10.5, 5.0).unwrap();
        assert!((result.monthly_emi - 21_494.0).abs() < 1.0);
        assert!((result.total_interest - (result.monthly_emi * 60.0 - 1_000_000.0)).abs() < 1e-6);
        assert!((result.total_amount - result.monthly_emi * 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_one_year_loan() {
        // 1 lakh at 12% for 12 months
        let result = emi(100_000.0, 12.0, 1.0).unwrap();
        assert!((result.monthly_emi - 8884.87).abs() < 0.01);
    }

    #[test]
    fn test_percent_split() {
        let result = emi(1_000_000.0, 10.5, 5.0).unwrap();
        assert!((result.principal_percent + result.interest_percent - 100.0).abs() < 1e-9);
        assert!(result.principal_percent > result.interest_percent);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = emi(100_000.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate_percent"));
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = emi(100_000.0, 10.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("years"));
    }

    #[test]
    fn test_zero_principal_rejected() {
        assert!(emi(0.0, 10.0, 5.0).is_err());
    }
}
