//! # Age Calculation
//!
//! Calendar-aware difference between two dates, expressed as whole years,
//! then whole months within the remaining year, then days within the
//! remaining month.
//!
//! Month arithmetic clamps to the end of shorter months: one month after
//! Jan 31 is Feb 28 (or 29), and the first anniversary of Feb 29 in a
//! common year falls on Feb 28.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::age::age_between;
//! use chrono::NaiveDate;
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
//! let end = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
//!
//! let age = age_between(birth, end).unwrap();
//! assert_eq!((age.years, age.months, age.days), (30, 1, 24));
//! ```

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input for the age calculator.
///
/// ## JSON Example
///
/// ```json
/// { "birth_date": "1990-01-01", "end_date": "2024-06-30" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AgeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.birth_date > self.end_date {
            return Err(CalcError::invalid_input(
                "birth_date",
                self.birth_date.to_string(),
                format!("Birth date is after the end date {}", self.end_date),
            ));
        }
        Ok(())
    }
}

/// Age as years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,

    /// Whole months after the last birthday (0-11)
    pub months: u32,

    /// Days after the last monthly anniversary (0-30)
    pub days: u32,
}

fn add_months(date: NaiveDate, months: u32) -> CalcResult<NaiveDate> {
    date.checked_add_months(Months::new(months)).ok_or_else(|| CalcError::Internal {
        message: format!("date overflow adding {} months to {}", months, date),
    })
}

/// Years, months and days from `birth_date` to `end_date`.
///
/// Fails when `birth_date` is after `end_date`.
pub fn age_between(birth_date: NaiveDate, end_date: NaiveDate) -> CalcResult<AgeResult> {
    AgeInput {
        birth_date,
        end_date,
    }
    .validate()?;

    // Month count that lands in end_date's month; step back one if that
    // anniversary is still ahead of end_date.
    let mut total_months = (end_date.year() - birth_date.year()) * 12 + end_date.month() as i32
        - birth_date.month() as i32;
    if add_months(birth_date, total_months as u32)? > end_date {
        total_months -= 1;
    }
    let total_months = total_months as u32;

    let anchor = add_months(birth_date, total_months)?;
    let days = (end_date - anchor).num_days() as u32;

    Ok(AgeResult {
        years: total_months / 12,
        months: total_months % 12,
        days,
    })
}

/// Calculate the age described by `input`.
pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    age_between(input.birth_date, input.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_years() {
        let age = age_between(date(1990, 1, 1), date(2020, 1, 1)).unwrap();
        assert_eq!(age, AgeResult { years: 30, months: 0, days: 0 });
    }

    #[test]
    fn test_same_day() {
        let age = age_between(date(2024, 5, 5), date(2024, 5, 5)).unwrap();
        assert_eq!(age, AgeResult { years: 0, months: 0, days: 0 });
    }

    #[test]
    fn test_months_and_days() {
        let age = age_between(date(1990, 1, 15), date(2020, 3, 10)).unwrap();
        assert_eq!(age, AgeResult { years: 30, months: 1, days: 24 });
    }

    #[test]
    fn test_day_before_birthday() {
        let age = age_between(date(2000, 6, 15), date(2010, 6, 14)).unwrap();
        assert_eq!(age.years, 9);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 30);
    }

    #[test]
    fn test_end_of_month_clamping() {
        let age = age_between(date(2021, 1, 31), date(2021, 3, 1)).unwrap();
        assert_eq!(age, AgeResult { years: 0, months: 1, days: 1 });
    }

    #[test]
    fn test_leap_day_birthday() {
        let age = age_between(date(2000, 2, 29), date(2001, 2, 28)).unwrap();
        assert_eq!(age, AgeResult { years: 1, months: 0, days: 0 });
    }

    #[test]
    fn test_until_today_is_non_negative() {
        let today = chrono::Local::now().date_naive();
        let age = age_between(date(1990, 1, 1), today).unwrap();
        assert!(age.years >= 30);
        assert!(age.months < 12);
    }

    #[test]
    fn test_birth_after_end_is_invalid() {
        let err = age_between(date(2030, 1, 1), date(2020, 1, 1)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("birth_date"));
    }

    #[test]
    fn test_serialization() {
        let input = AgeInput {
            birth_date: date(1990, 1, 1),
            end_date: date(2024, 6, 30),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"birth_date":"1990-01-01","end_date":"2024-06-30"}"#);
    }
}
