//! # Loan Amortization
//!
//! Fixed-payment loan calculation using the standard annuity formula.
//!
//! With monthly rate `i = r/12` and payment count `n = 12t`:
//!
//! ```text
//! payment = P * i * (1+i)^n / ((1+i)^n - 1)
//! ```
//!
//! A zero interest rate is valid and degenerates to `payment = P/n` with no
//! interest paid.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::calculations::loan::{calculate, LoanInput};
//!
//! let input = LoanInput {
//!     principal: 10000.0,
//!     annual_rate: 0.05,
//!     term_years: 5.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment - 188.71).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for a loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a fraction (0.05 for 5%)
    pub annual_rate: f64,

    /// Loan term in years
    pub term_years: f64,
}

impl LoanInput {
    /// Validate input parameters. Non-finite values (NaN, infinity) are
    /// rejected along with out-of-domain ones.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Loan amount must be positive",
            ));
        }
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate",
                self.annual_rate.to_string(),
                "Interest rate cannot be negative",
            ));
        }
        if !self.term_years.is_finite() || self.term_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Loan term must be positive",
            ));
        }
        Ok(())
    }
}

/// Loan calculation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Fixed monthly payment
    pub monthly_payment: f64,

    /// Total paid over the life of the loan
    pub total_payment: f64,

    /// Total interest paid (total payment minus principal)
    pub total_interest: f64,
}

/// Calculate the amortized payment schedule summary.
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let monthly_rate = input.annual_rate / 12.0;
    let payments = input.term_years * 12.0;

    if monthly_rate == 0.0 {
        return Ok(LoanResult {
            monthly_payment: input.principal / payments,
            total_payment: input.principal,
            total_interest: 0.0,
        });
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    let monthly_payment = input.principal * (monthly_rate * growth) / (growth - 1.0);
    let total_payment = monthly_payment * payments;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - input.principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_loan() {
        let input = LoanInput {
            principal: 10000.0,
            annual_rate: 0.05,
            term_years: 5.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.monthly_payment - 188.71).abs() < 0.01);
        assert!((result.total_interest - 1322.74).abs() < 0.01);
        assert!(
            (result.total_payment - (result.monthly_payment * 60.0)).abs() < 1e-9
        );
    }

    #[test]
    fn test_zero_rate_loan() {
        let input = LoanInput {
            principal: 12000.0,
            annual_rate: 0.0,
            term_years: 5.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.monthly_payment, 12000.0 / 60.0);
        assert_eq!(result.total_payment, 12000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let base = LoanInput {
            principal: 10000.0,
            annual_rate: 0.05,
            term_years: 5.0,
        };

        let mut input = base.clone();
        input.principal = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = base.clone();
        input.annual_rate = -0.01;
        assert!(calculate(&input).is_err());

        let mut input = base;
        input.term_years = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let base = LoanInput {
            principal: 10000.0,
            annual_rate: 0.05,
            term_years: 5.0,
        };

        let mut input = base.clone();
        input.principal = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = base.clone();
        input.annual_rate = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = base;
        input.term_years = f64::INFINITY;
        assert!(calculate(&input).is_err());
    }
}
