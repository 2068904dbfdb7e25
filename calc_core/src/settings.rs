//! # Settings
//!
//! Display preferences and the starting values each calculator form is
//! pre-filled with. Settings are plain JSON; every field is optional and
//! falls back to its default.
//!
//! ## Structure
//!
//! ```text
//! Settings
//! ├── currency: CurrencySettings (symbol, fraction digits)
//! └── defaults: CalculatorDefaults (one block per calculator)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::Settings;
//!
//! let settings = Settings::from_json(r#"{ "defaults": { "emi": { "years": 20.0 } } }"#).unwrap();
//! assert_eq!(settings.defaults.emi.years, 20.0);
//! assert_eq!(settings.defaults.emi.principal, 1_000_000.0);
//! assert_eq!(settings.currency.symbol, "₹");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_currency, INR_SYMBOL};

/// Largest number of decimals accepted for currency output
pub const MAX_FRACTION_DIGITS: u32 = 6;

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How amounts are printed
    pub currency: CurrencySettings,

    /// Values used when a field is left blank
    pub defaults: CalculatorDefaults,
}

impl Settings {
    /// Parse settings from JSON, filling gaps with defaults, and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CalcError::config(format!("invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings make sense.
    pub fn validate(&self) -> CalcResult<()> {
        if self.currency.symbol.trim().is_empty() {
            return Err(CalcError::config("currency.symbol must not be empty"));
        }
        if self.currency.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(CalcError::config(format!(
                "currency.fraction_digits must be at most {}, got {}",
                MAX_FRACTION_DIGITS, self.currency.fraction_digits
            )));
        }
        if self.defaults.stock_split.split_ratio.parse::<crate::calculations::SplitRatio>().is_err() {
            return Err(CalcError::config(format!(
                "defaults.stock_split.split_ratio '{}' is not a valid ratio",
                self.defaults.stock_split.split_ratio
            )));
        }
        Ok(())
    }

    /// Format an amount with the configured symbol and decimals.
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, &self.currency.symbol, self.currency.fraction_digits)
    }
}

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub symbol: String,
    pub fraction_digits: u32,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: INR_SYMBOL.to_string(),
            fraction_digits: 0,
        }
    }
}

/// Starting values for every calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub stock_split: StockSplitDefaults,
    pub emi: EmiDefaults,
    pub sip: SipDefaults,
    pub future_value: FutureValueDefaults,
    pub trip: TripDefaults,
    pub bmi: BmiDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSplitDefaults {
    pub current_price: f64,
    pub split_ratio: String,
    pub shares_owned: f64,
}

impl Default for StockSplitDefaults {
    fn default() -> Self {
        StockSplitDefaults {
            current_price: 100.0,
            split_ratio: "1:2".to_string(),
            shares_owned: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmiDefaults {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

impl Default for EmiDefaults {
    fn default() -> Self {
        EmiDefaults {
            principal: 1_000_000.0,
            annual_rate_percent: 10.5,
            years: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipDefaults {
    pub monthly_amount: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
    pub step_up_rate_percent: f64,
    pub lumpsum_amount: f64,
}

impl Default for SipDefaults {
    fn default() -> Self {
        SipDefaults {
            monthly_amount: 5000.0,
            annual_rate_percent: 12.0,
            years: 10.0,
            step_up_rate_percent: 10.0,
            lumpsum_amount: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FutureValueDefaults {
    pub initial_amount: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

impl Default for FutureValueDefaults {
    fn default() -> Self {
        FutureValueDefaults {
            initial_amount: 100.0,
            annual_rate_percent: 10.0,
            years: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripDefaults {
    pub distance_km: f64,
    pub fuel_efficiency_kmpl: f64,
    pub fuel_cost_per_liter: f64,
    pub people_count: f64,
}

impl Default for TripDefaults {
    fn default() -> Self {
        TripDefaults {
            distance_km: 530.0,
            fuel_efficiency_kmpl: 15.0,
            fuel_cost_per_liter: 100.0,
            people_count: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiDefaults {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
}

impl Default for BmiDefaults {
    fn default() -> Self {
        BmiDefaults {
            height_cm: 173.0,
            weight_kg: 75.0,
            age: 33,
        }
    }
}
