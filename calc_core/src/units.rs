//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the calculators deal with.
//! Each is a plain `f64` newtype so JSON stays clean (just numbers).
//!
//! ## Conversion Factors
//!
//! The factors match what the BMI unit toggle has always used:
//! - Length: 1 in = 2.54 cm
//! - Mass: 1 kg = 2.205 lb
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Centimeters, Inches, Percent};
//!
//! let height = Inches(70.0);
//! let cm: Centimeters = height.into();
//! assert!((cm.0 - 177.8).abs() < 1e-9);
//!
//! let rate = Percent(12.0);
//! assert!((rate.monthly_rate() - 0.01).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.205;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl Centimeters {
    /// Length in meters
    pub fn meters(self) -> f64 {
        self.0 / 100.0
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * LB_PER_KG)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 / LB_PER_KG)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Fuel volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

// ============================================================================
// Rates
// ============================================================================

/// A rate expressed in percent (12.0 means 12 %)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// Rate as a decimal fraction (12 % -> 0.12)
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Annual percent converted to a monthly decimal rate (rate / 1200)
    pub fn monthly_rate(self) -> f64 {
        self.0 / (12.0 * 100.0)
    }
}

// ============================================================================
// Raw value access (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Centimeters);
impl_value!(Inches);
impl_value!(Kilometers);
impl_value!(Kilograms);
impl_value!(Pounds);
impl_value!(Liters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_centimeters() {
        let cm: Centimeters = Inches(10.0).into();
        assert!((cm.0 - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let lb: Pounds = Kilograms(75.0).into();
        assert!((lb.0 - 165.375).abs() < 1e-9);

        let kg: Kilograms = lb.into();
        assert!((kg.0 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_meters() {
        assert!((Centimeters(173.0).meters() - 1.73).abs() < 1e-12);
    }

    #[test]
    fn test_percent_rates() {
        assert!((Percent(10.0).as_fraction() - 0.1).abs() < 1e-12);
        assert!((Percent(10.5).monthly_rate() - 0.00875).abs() < 1e-12);
    }

    #[test]
    fn test_value() {
        assert_eq!(Kilometers(530.0).value(), 530.0);
        assert_eq!(Liters(35.5).value(), 35.5);
    }

    #[test]
    fn test_serialization() {
        let p = Percent(12.5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "12.5");
    }
}
