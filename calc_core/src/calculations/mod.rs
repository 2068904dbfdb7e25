//! # Calculators
//!
//! This module contains every calculator. Each one follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! plus a free function named after the operation (`emi`, `split_shares`,
//! `age_between`, ...) for callers that already have loose values.
//!
//! ## Available Calculations
//!
//! - [`stock_average`] - Weighted average purchase price
//! - [`stock_split`] - Holdings after a stock split
//! - [`emi`] - Loan installment
//! - [`sip`] - Regular, step-up and lumpsum investment projections
//! - [`future_value`] - Compound growth of a single amount
//! - [`trip`] - Trip cost per person
//! - [`age`] - Age in years, months and days
//! - [`bmi`] - Body mass index

pub mod age;
pub mod bmi;
pub mod emi;
pub mod future_value;
pub mod sip;
pub mod stock_average;
pub mod stock_split;
pub mod trip;


use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use bmi::{BmiCategory, BmiInput, BmiResult, Gender, UnitSystem};
pub use emi::{EmiInput, EmiResult};
pub use future_value::{FutureValueInput, FutureValueResult};
pub use sip::{SipInput, SipPlan, SipResult};
pub use stock_average::{StockAverageInput, StockAverageResult, StockEntry};
pub use stock_split::{SplitRatio, StockSplitInput, StockSplitResult};
pub use trip::{Expense, TripInput, TripResult};

/// The calculators on offer, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculator {
    StockAverage,
    StockSplit,
    Emi,
    Sip,
    FutureValue,
    Trip,
    Age,
    Bmi,
}

impl Calculator {
    /// All calculators in menu order
    pub const ALL: [Calculator; 8] = [
        Calculator::StockAverage,
        Calculator::StockSplit,
        Calculator::Emi,
        Calculator::Sip,
        Calculator::FutureValue,
        Calculator::Trip,
        Calculator::Age,
        Calculator::Bmi,
    ];

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Calculator::StockAverage => "Stock Average",
            Calculator::StockSplit => "Stock Split",
            Calculator::Emi => "EMI",
            Calculator::Sip => "SIP",
            Calculator::FutureValue => "Future Value",
            Calculator::Trip => "Trip",
            Calculator::Age => "Age",
            Calculator::Bmi => "BMI",
        }
    }

    /// Identifier used for subcommands and the JSON `calculator` tag
    pub fn slug(&self) -> &'static str {
        match self {
            Calculator::StockAverage => "stock-average",
            Calculator::StockSplit => "stock-split",
            Calculator::Emi => "emi",
            Calculator::Sip => "sip",
            Calculator::FutureValue => "future-value",
            Calculator::Trip => "trip",
            Calculator::Age => "age",
            Calculator::Bmi => "bmi",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Calculator::StockAverage => "Average price across several purchases of a stock",
            Calculator::StockSplit => "Shares, price and cash refund after a stock split",
            Calculator::Emi => "Monthly installment and total interest on a loan",
            Calculator::Sip => "Future value of a monthly, step-up or lumpsum investment",
            Calculator::FutureValue => "Compound growth of a single amount",
            Calculator::Trip => "Fuel and expenses of a trip split per person",
            Calculator::Age => "Exact age in years, months and days",
            Calculator::Bmi => "Body mass index and weight category",
        }
    }

    /// Look up a calculator by its slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Calculator::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Any calculator's input, tagged by `calculator`.
///
/// ## JSON Example
///
/// ```json
/// { "calculator": "emi", "principal": 1000000.0, "annual_rate_percent": 10.5, "years": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationInput {
    StockAverage(StockAverageInput),
    StockSplit(StockSplitInput),
    Emi(EmiInput),
    Sip(SipInput),
    FutureValue(FutureValueInput),
    Trip(TripInput),
    Age(AgeInput),
    Bmi(BmiInput),
}

/// Result matching a [`CalculationInput`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationOutput {
    StockAverage(StockAverageResult),
    StockSplit(StockSplitResult),
    Emi(EmiResult),
    Sip(SipResult),
    FutureValue(FutureValueResult),
    Trip(TripResult),
    Age(AgeResult),
    Bmi(BmiResult),
}

impl CalculationInput {
    /// Which calculator this input is for
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculationInput::StockAverage(_) => Calculator::StockAverage,
            CalculationInput::StockSplit(_) => Calculator::StockSplit,
            CalculationInput::Emi(_) => Calculator::Emi,
            CalculationInput::Sip(_) => Calculator::Sip,
            CalculationInput::FutureValue(_) => Calculator::FutureValue,
            CalculationInput::Trip(_) => Calculator::Trip,
            CalculationInput::Age(_) => Calculator::Age,
            CalculationInput::Bmi(_) => Calculator::Bmi,
        }
    }

    /// Run the matching calculator.
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        let calculator = self.calculator();
        tracing::debug!(calculator = calculator.slug(), "evaluating");

        let output = match self {
            CalculationInput::StockAverage(i) => stock_average::calculate(i).map(CalculationOutput::StockAverage),
            CalculationInput::StockSplit(i) => stock_split::calculate(i).map(CalculationOutput::StockSplit),
            CalculationInput::Emi(i) => emi::calculate(i).map(CalculationOutput::Emi),
            CalculationInput::Sip(i) => sip::calculate(i).map(CalculationOutput::Sip),
            CalculationInput::FutureValue(i) => future_value::calculate(i).map(CalculationOutput::FutureValue),
            CalculationInput::Trip(i) => trip::calculate(i).map(CalculationOutput::Trip),
            CalculationInput::Age(i) => age::calculate(i).map(CalculationOutput::Age),
            CalculationInput::Bmi(i) => bmi::calculate(i).map(CalculationOutput::Bmi),
        };

        if let Err(e) = &output {
            tracing::warn!(
                calculator = calculator.slug(),
                code = e.error_code(),
                error = %e,
                "input rejected"
            );
        }
        output
    }

    /// Parse a tagged input from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_slugs() {
        let slugs: Vec<_> = Calculator::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(
            slugs,
            vec!["stock-average", "stock-split", "emi", "sip", "future-value", "trip", "age", "bmi"]
        );
        for calc in Calculator::ALL {
            assert_eq!(Calculator::from_slug(calc.slug()), Some(calc));
            assert!(!calc.description().is_empty());
        }
        assert_eq!(Calculator::from_slug("profile"), None);
    }

    #[test]
    fn test_slug_matches_serde_name() {
        for calc in Calculator::ALL {
            let json = serde_json::to_string(&calc).unwrap();
            assert_eq!(json, format!("\"{}\"", calc.slug()));
        }
    }

    #[test]
    fn test_evaluate_from_json() {
        let input = CalculationInput::from_json(
            r#"{"calculator": "emi", "principal": 1000000.0, "annual_rate_percent": 10.5, "years": 5.0}"#,
        )
        .unwrap();
        assert_eq!(input.calculator(), Calculator::Emi);

        match input.evaluate().unwrap() {
            CalculationOutput::Emi(result) => assert!((result.monthly_emi - 21_494.0).abs() < 1.0),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_sip_with_nested_mode_tag() {
        let input = CalculationInput::from_json(
            r#"{"calculator": "sip", "annual_rate_percent": 12.0, "years": 10.0, "mode": "lumpsum", "amount": 100000.0}"#,
        )
        .unwrap();
        let output = input.evaluate().unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["calculator"], "sip");
        assert_eq!(json["future_value"], 310_585.0);
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let input = CalculationInput::from_json(
            r#"{"calculator": "age", "birth_date": "2030-01-01", "end_date": "2020-01-01"}"#,
        )
        .unwrap();
        assert_eq!(input.evaluate().unwrap_err().field(), Some("birth_date"));
    }

    #[test]
    fn test_unknown_calculator_is_serialization_error() {
        let err = CalculationInput::from_json(r#"{"calculator": "profile"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_idempotent() {
        let input = CalculationInput::Bmi(BmiInput {
            gender: Gender::Female,
            age: Some(33),
            height: 173.0,
            weight: 75.0,
            unit: UnitSystem::Metric,
        });
        assert_eq!(input.evaluate().unwrap(), input.evaluate().unwrap());
    }
}
