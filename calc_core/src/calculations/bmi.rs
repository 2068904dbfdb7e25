//! # BMI Calculation
//!
//! Body mass index from height and weight in either unit system:
//!
//! - Metric: `weight_kg / height_m²` (height entered in centimeters)
//! - Imperial: `703 · weight_lb / height_in²`
//!
//! The value is rounded to 2 decimals before it is categorised, so a BMI of
//! 24.996 reads as 25.00 and lands in [`BmiCategory::Overweight`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bmi::{bmi, BmiCategory, UnitSystem};
//!
//! let result = bmi(173.0, 75.0, UnitSystem::Metric).unwrap();
//! assert_eq!(result.bmi_value, 25.06);
//! assert_eq!(result.category, BmiCategory::Overweight);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::round_to;
use crate::units::{Centimeters, Inches, Kilograms, Pounds};

/// Imperial BMI scaling factor
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Measurement system for height and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms
    #[default]
    Metric,
    /// Height in inches, weight in pounds
    Imperial,
}

/// Recorded with the measurement; does not change the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Short feedback line shown with the result
    pub fn message(&self) -> &'static str {
        match self {
            BmiCategory::Normal => "Great job! You have a healthy weight.",
            BmiCategory::Underweight => "Time to gain some weight!",
            BmiCategory::Overweight | BmiCategory::Obesity => "Time to run!",
        }
    }

    pub fn advice(&self) -> Option<&'static str> {
        match self {
            BmiCategory::Overweight | BmiCategory::Obesity => Some(
                "By maintaining a healthy weight, you lower your risk of developing serious health problems.",
            ),
            _ => None,
        }
    }

    /// Position of `bmi` on a 0-100 gauge split into four equal bands.
    ///
    /// Each category takes a quarter of the gauge; the obesity band spans
    /// BMI 30 to 40 and everything above pins to 100.
    pub fn scale_position(bmi: f64) -> f64 {
        if bmi <= 0.0 || bmi.is_nan() {
            return 0.0;
        }

        let position = if bmi < 18.5 {
            (bmi / 18.5) * 25.0
        } else if bmi < 25.0 {
            25.0 + ((bmi - 18.5) / 6.5) * 25.0
        } else if bmi < 30.0 {
            50.0 + ((bmi - 25.0) / 5.0) * 25.0
        } else {
            75.0 + (((bmi - 30.0) / 10.0) * 25.0).min(25.0)
        };

        position.clamp(0.0, 100.0)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for the BMI calculator.
///
/// ## JSON Example
///
/// ```json
/// { "gender": "male", "age": 33, "height": 173.0, "weight": 75.0, "unit": "metric" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    #[serde(default)]
    pub gender: Gender,

    /// Age in years (informational)
    #[serde(default)]
    pub age: Option<u32>,

    /// Height in cm (metric) or inches (imperial)
    pub height: f64,

    /// Weight in kg (metric) or pounds (imperial)
    pub weight: f64,

    #[serde(default)]
    pub unit: UnitSystem,
}

impl BmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        if self.weight <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to 2 decimals
    pub bmi_value: f64,

    pub category: BmiCategory,

    /// Gauge position, 0-100
    pub scale_position: f64,

    pub message: String,
}

/// BMI for `height`/`weight` in the given unit system.
pub fn bmi(height: f64, weight: f64, unit: UnitSystem) -> CalcResult<BmiResult> {
    calculate(&BmiInput {
        gender: Gender::default(),
        age: None,
        height,
        weight,
        unit,
    })
}

/// Calculate BMI, rejecting non-positive height or weight.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let raw = match input.unit {
        UnitSystem::Metric => {
            let height_m = Centimeters(input.height).meters();
            input.weight / (height_m * height_m)
        }
        UnitSystem::Imperial => IMPERIAL_FACTOR * (input.weight / (input.height * input.height)),
    };

    let bmi_value = round_to(raw, 2);
    let category = BmiCategory::from_bmi(bmi_value);

    Ok(BmiResult {
        bmi_value,
        category,
        scale_position: BmiCategory::scale_position(bmi_value),
        message: category.message().to_string(),
    })
}

/// Convert a height/weight pair between unit systems, rounding each to a
/// whole number the way the form's unit toggle does.
pub fn convert_measurements(height: f64, weight: f64, from: UnitSystem, to: UnitSystem) -> (f64, f64) {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => {
            let h: Inches = Centimeters(height).into();
            let w: Pounds = Kilograms(weight).into();
            (h.value().round(), w.value().round())
        }
        (UnitSystem::Imperial, UnitSystem::Metric) => {
            let h: Centimeters = Inches(height).into();
            let w: Kilograms = Pounds(weight).into();
            (h.value().round(), w.value().round())
        }
        _ => (height, weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let result = bmi(173.0, 75.0, UnitSystem::Metric).unwrap();
        assert!((result.bmi_value - 25.06).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Overweight);
        assert_eq!(result.message, "Time to run!");
    }

    #[test]
    fn test_imperial_bmi() {
        // 703 * 150 / 70^2 = 21.52
        let result = bmi(70.0, 150.0, UnitSystem::Imperial).unwrap();
        assert!((result.bmi_value - 21.52).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_rounding_before_categorising() {
        // 24.996 rounds up to 25.00
        let height_cm = 200.0;
        let weight = 24.996 * 4.0;
        let result = bmi(height_cm, weight, UnitSystem::Metric).unwrap();
        assert_eq!(result.bmi_value, 25.0);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_scale_position() {
        assert_eq!(BmiCategory::scale_position(0.0), 0.0);
        assert!((BmiCategory::scale_position(18.5) - 25.0).abs() < 1e-9);
        assert!((BmiCategory::scale_position(25.0) - 50.0).abs() < 1e-9);
        assert!((BmiCategory::scale_position(35.0) - 87.5).abs() < 1e-9);
        assert_eq!(BmiCategory::scale_position(60.0), 100.0);
    }

    #[test]
    fn test_non_positive_measurements_rejected() {
        assert_eq!(bmi(0.0, 70.0, UnitSystem::Metric).unwrap_err().field(), Some("height"));
        assert_eq!(bmi(170.0, -1.0, UnitSystem::Metric).unwrap_err().field(), Some("weight"));
    }

    #[test]
    fn test_unit_toggle() {
        assert_eq!(
            convert_measurements(173.0, 75.0, UnitSystem::Metric, UnitSystem::Imperial),
            (68.0, 165.0)
        );
        assert_eq!(
            convert_measurements(68.0, 165.0, UnitSystem::Imperial, UnitSystem::Metric),
            (173.0, 75.0)
        );
        assert_eq!(
            convert_measurements(1.0, 2.0, UnitSystem::Metric, UnitSystem::Metric),
            (1.0, 2.0)
        );
    }

    #[test]
    fn test_input_defaults_from_json() {
        let input: BmiInput = serde_json::from_str(r#"{"height": 70.0, "weight": 150.0, "unit": "imperial"}"#).unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.age, None);
        assert_eq!(input.unit, UnitSystem::Imperial);
    }

    #[test]
    fn test_advice() {
        assert!(BmiCategory::Obesity.advice().is_some());
        assert!(BmiCategory::Normal.advice().is_none());
    }
}
