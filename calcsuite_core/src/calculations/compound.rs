//! # Compound Interest
//!
//! Future value under periodic compounding:
//!
//! ```text
//! futureValue = P * (1 + r/n)^(n*t)
//! ```
//!
//! where `r` is the fractional annual rate, `n` the number of compounding
//! periods per year, and `t` the number of years.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::calculations::compound::{calculate, CompoundInput};
//!
//! let input = CompoundInput {
//!     principal: 1000.0,
//!     annual_rate: 0.07,
//!     years: 10.0,
//!     compounds_per_year: 12.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.future_value - 2009.66).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for a compound interest calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInput {
    /// Initial principal
    pub principal: f64,

    /// Annual interest rate as a fraction (0.07 for 7%)
    pub annual_rate: f64,

    /// Investment horizon in years
    pub years: f64,

    /// Compounding periods per year (12 = monthly, 365 = daily)
    pub compounds_per_year: f64,
}

impl CompoundInput {
    /// Validate input parameters. Non-finite values (NaN, infinity) are
    /// rejected along with out-of-domain ones.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal must be positive",
            ));
        }
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate",
                self.annual_rate.to_string(),
                "Interest rate cannot be negative",
            ));
        }
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "Years must be positive",
            ));
        }
        if !self.compounds_per_year.is_finite() || self.compounds_per_year <= 0.0 {
            return Err(CalcError::invalid_input(
                "compounds_per_year",
                self.compounds_per_year.to_string(),
                "Compounding frequency must be positive",
            ));
        }
        Ok(())
    }
}

/// Compound interest results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundResult {
    /// Value of the investment at the end of the horizon
    pub future_value: f64,

    /// Interest earned (future value minus principal)
    pub total_interest: f64,
}

/// Calculate future value under compound interest.
pub fn calculate(input: &CompoundInput) -> CalcResult<CompoundResult> {
    input.validate()?;

    let future_value = input.principal
        * (1.0 + input.annual_rate / input.compounds_per_year)
            .powf(input.compounds_per_year * input.years);

    Ok(CompoundResult {
        future_value,
        total_interest: future_value - input.principal,
    })
}

/// Human-readable label for a compounding frequency.
///
/// The common frequencies get their conventional names; anything else is
/// rendered as "N times/year".
pub fn compounding_label(compounds_per_year: f64) -> String {
    if compounds_per_year.fract() == 0.0 {
        match compounds_per_year as u32 {
            1 => return "Annually".to_string(),
            2 => return "Semi-Annually".to_string(),
            4 => return "Quarterly".to_string(),
            12 => return "Monthly".to_string(),
            365 => return "Daily".to_string(),
            _ => {}
        }
    }
    format!("{} times/year", compounds_per_year)
}
