//! # Trip Cost Calculation
//!
//! Splits the cost of a road trip (fuel plus any extra expenses) between
//! the people travelling.
//!
//! ## Guards
//!
//! - A fuel efficiency of 0 or less is treated as 1 km/L
//! - A head count of 0 or less is treated as 1 person
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::trip::{calculate, TripInput};
//!
//! let mut trip = TripInput::new(530.0, 15.0, 100.0, 4.0);
//! trip.add_expense("Food", 500.0).unwrap();
//!
//! let result = calculate(&trip).unwrap();
//! assert!((result.fuel_required - 35.333).abs() < 0.001);
//! assert!((result.total_trip_cost - 4033.33).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Kilometers, Liters};

/// An extra cost shared by the group (food, tolls, stay, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-form label
    #[serde(rename = "type")]
    pub kind: String,

    pub amount: f64,
}

/// Input for the trip cost calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "distance_km": 530.0,
///   "fuel_efficiency_kmpl": 15.0,
///   "fuel_cost_per_liter": 100.0,
///   "people_count": 4.0,
///   "expenses": [{ "type": "Food", "amount": 500.0 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// Total distance driven
    pub distance_km: f64,

    /// Vehicle mileage in km per liter
    pub fuel_efficiency_kmpl: f64,

    /// Price of one liter of fuel
    pub fuel_cost_per_liter: f64,

    /// People splitting the bill
    pub people_count: f64,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl TripInput {
    pub fn new(distance_km: f64, fuel_efficiency_kmpl: f64, fuel_cost_per_liter: f64, people_count: f64) -> Self {
        TripInput {
            distance_km,
            fuel_efficiency_kmpl,
            fuel_cost_per_liter,
            people_count,
            expenses: Vec::new(),
        }
    }

    /// Append an expense. Only positive amounts are accepted.
    pub fn add_expense(&mut self, kind: impl Into<String>, amount: f64) -> CalcResult<()> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(CalcError::invalid_input(
                "expense.amount",
                amount.to_string(),
                "Expense amount must be positive",
            ));
        }
        self.expenses.push(Expense {
            kind: kind.into(),
            amount,
        });
        Ok(())
    }

    /// Remove the expense at `index`, returning it if it existed.
    pub fn remove_expense(&mut self, index: usize) -> Option<Expense> {
        if index < self.expenses.len() {
            Some(self.expenses.remove(index))
        } else {
            None
        }
    }
}

/// Results from the trip cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    /// Fuel needed for the distance, in liters
    pub fuel_required: f64,

    pub fuel_cost: f64,

    /// Sum of all extra expenses
    pub total_additional_expenses: f64,

    /// Fuel cost plus extra expenses
    pub total_trip_cost: f64,

    pub cost_per_person: f64,
}

/// Cost of a trip and each traveller's share.
pub fn trip_cost(
    distance_km: f64,
    fuel_efficiency_kmpl: f64,
    fuel_cost_per_liter: f64,
    people_count: f64,
    expenses: &[Expense],
) -> TripResult {
    let efficiency = if fuel_efficiency_kmpl > 0.0 { fuel_efficiency_kmpl } else { 1.0 };
    let fuel = Liters(Kilometers(distance_km).value() / efficiency);
    let fuel_cost = fuel.value() * fuel_cost_per_liter;

    let total_additional_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let total_trip_cost = fuel_cost + total_additional_expenses;

    let people = if people_count > 0.0 { people_count } else { 1.0 };

    TripResult {
        fuel_required: fuel.value(),
        fuel_cost,
        total_additional_expenses,
        total_trip_cost,
        cost_per_person: total_trip_cost / people,
    }
}

/// Calculate the trip cost from a [`TripInput`].
pub fn calculate(input: &TripInput) -> CalcResult<TripResult> {
    Ok(trip_cost(
        input.distance_km,
        input.fuel_efficiency_kmpl,
        input.fuel_cost_per_liter,
        input.people_count,
        &input.expenses,
    ))
}
