//! # calc_core - Everyday Calculation Engine
//!
//! `calc_core` is the computational heart of Calcdeck: stock average, stock
//! split, EMI, SIP, future value, trip cost, age and BMI calculators behind
//! a JSON-friendly API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Invalid input is a structured [`CalcError`], never a sentinel
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{CalculationInput, CalculationOutput};
//!
//! let input = CalculationInput::from_json(
//!     r#"{"calculator": "future-value", "initial_amount": 100.0, "annual_rate_percent": 10.0, "years": 5.0}"#,
//! ).unwrap();
//!
//! if let CalculationOutput::FutureValue(result) = input.evaluate().unwrap() {
//!     assert_eq!(result.future_value, 161.05);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators, the tagged dispatcher and the catalog
//! - [`parse`] - Lenient form-field parsing
//! - [`format`] - Rounding and Indian-style currency formatting
//! - [`settings`] - Display settings and per-calculator defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod parse;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationInput, CalculationOutput, Calculator};
pub use errors::{CalcError, CalcResult};
pub use settings::Settings;
