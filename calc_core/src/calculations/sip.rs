//! # SIP Calculation
//!
//! Projects the value of a systematic investment plan. Three plans are
//! supported, selected by [`SipPlan`]:
//!
//! - **Sip**: fixed monthly contribution, monthly compounding, contributions
//!   made at the start of each month (annuity due):
//!   `FV = A · ((1 + R)^N − 1) / R · (1 + R)`
//! - **StepUp**: monthly contribution raised by a fixed percentage after
//!   every completed 12-month block, simulated month by month
//! - **Lumpsum**: single upfront amount compounded annually:
//!   `FV = P · (1 + rate)^years`
//!
//! All amounts in [`SipResult`] are rounded to whole currency units.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::sip::{calculate, SipInput, SipPlan};
//!
//! let input = SipInput {
//!     annual_rate_percent: 12.0,
//!     years: 10.0,
//!     plan: SipPlan::Sip { monthly_amount: 5000.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_investment, 600_000.0);
//! assert_eq!(result.future_value, 1_161_695.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Percent;

/// Longest horizon accepted, in years
pub const MAX_YEARS: f64 = 100.0;

/// Which investment plan to project.
///
/// Serialized with a `mode` tag: `"sip"`, `"step-up"` or `"lumpsum"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SipPlan {
    /// Fixed monthly contribution
    Sip { monthly_amount: f64 },

    /// Monthly contribution raised by `step_up_rate_percent` every year
    StepUp {
        monthly_amount: f64,
        step_up_rate_percent: f64,
    },

    /// One upfront investment
    Lumpsum { amount: f64 },
}

impl SipPlan {
    /// Mode tag as used in JSON and on the command line
    pub fn mode_name(&self) -> &'static str {
        match self {
            SipPlan::Sip { .. } => "sip",
            SipPlan::StepUp { .. } => "step-up",
            SipPlan::Lumpsum { .. } => "lumpsum",
        }
    }
}

/// Input for the SIP calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "annual_rate_percent": 12.0,
///   "years": 10.0,
///   "mode": "step-up",
///   "monthly_amount": 5000.0,
///   "step_up_rate_percent": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Expected annual return in percent
    pub annual_rate_percent: f64,

    /// Investment horizon in years
    pub years: f64,

    /// Plan and its amounts
    #[serde(flatten)]
    pub plan: SipPlan,
}

impl SipInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.years.is_finite() || self.years > MAX_YEARS {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                format!("Horizon must be at most {} years", MAX_YEARS),
            ));
        }

        let (field, amount) = match self.plan {
            SipPlan::Sip { monthly_amount } | SipPlan::StepUp { monthly_amount, .. } => {
                ("monthly_amount", monthly_amount)
            }
            SipPlan::Lumpsum { amount } => ("amount", amount),
        };
        if amount < 0.0 {
            return Err(CalcError::invalid_input(
                field,
                amount.to_string(),
                "Investment amount cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Projected outcome of an investment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    /// Value at the end of the horizon
    pub future_value: f64,

    /// Total amount put in
    pub total_investment: f64,

    /// future_value - total_investment
    pub total_returns: f64,

    /// Investment as a share of the future value, in percent
    pub investment_percent: f64,

    /// Returns as a share of the future value, in percent
    pub returns_percent: f64,
}

impl SipResult {
    /// All-zero result, reported when the horizon or rate leaves nothing to compound
    pub fn zero() -> Self {
        SipResult {
            future_value: 0.0,
            total_investment: 0.0,
            total_returns: 0.0,
            investment_percent: 0.0,
            returns_percent: 0.0,
        }
    }

    fn rounded(future_value: f64, total_investment: f64) -> Self {
        let future_value = future_value.round();
        let total_investment = total_investment.round();
        let total_returns = future_value - total_investment;

        let (investment_percent, returns_percent) = if future_value > 0.0 {
            (
                total_investment / future_value * 100.0,
                total_returns / future_value * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        SipResult {
            future_value,
            total_investment,
            total_returns,
            investment_percent,
            returns_percent,
        }
    }
}

/// Regular SIP. Zero result when the horizon or rate is not positive.
pub fn sip(monthly_amount: f64, annual_rate_percent: f64, years: f64) -> SipResult {
    let r = Percent(annual_rate_percent).monthly_rate();
    let months = years * 12.0;

    if months <= 0.0 || r <= 0.0 {
        return SipResult::zero();
    }

    let future_value = monthly_amount * (((1.0 + r).powf(months) - 1.0) / r) * (1.0 + r);
    SipResult::rounded(future_value, monthly_amount * months)
}

/// Step-up SIP, simulated month by month.
///
/// Each month the contribution is added and the running value compounds
/// once. The contribution grows by `step_up_rate_percent` after every
/// 12-month block. Blocks run while the block index is below `years`, so a
/// fractional horizon finishes its last block in full. Horizons that are not
/// finite or exceed [`MAX_YEARS`] give a zero result.
pub fn step_up_sip(monthly_amount: f64, annual_rate_percent: f64, years: f64, step_up_rate_percent: f64) -> SipResult {
    if !years.is_finite() || years > MAX_YEARS {
        return SipResult::zero();
    }

    let r = Percent(annual_rate_percent).monthly_rate();
    let step_up = Percent(step_up_rate_percent).as_fraction();

    let mut contribution = monthly_amount;
    let mut total_investment = 0.0;
    let mut future_value = 0.0;

    let mut year = 0u32;
    while f64::from(year) < years {
        for _ in 0..12 {
            total_investment += contribution;
            future_value = (future_value + contribution) * (1.0 + r);
        }
        contribution += contribution * step_up;
        year += 1;
    }

    SipResult::rounded(future_value, total_investment)
}

/// One upfront investment compounded annually.
pub fn lumpsum(principal: f64, annual_rate_percent: f64, years: f64) -> SipResult {
    let rate = Percent(annual_rate_percent).as_fraction();
    let future_value = principal * (1.0 + rate).powf(years);
    SipResult::rounded(future_value, principal)
}

/// Project the plan described by `input`.
pub fn calculate(input: &SipInput) -> CalcResult<SipResult> {
    input.validate()?;

    let rate = input.annual_rate_percent;
    let years = input.years;
    let result = match input.plan {
        SipPlan::Sip { monthly_amount } => sip(monthly_amount, rate, years),
        SipPlan::StepUp {
            monthly_amount,
            step_up_rate_percent,
        } => step_up_sip(monthly_amount, rate, years, step_up_rate_percent),
        SipPlan::Lumpsum { amount } => lumpsum(amount, rate, years),
    };
    Ok(result)
}
