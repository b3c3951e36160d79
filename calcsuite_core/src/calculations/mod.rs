//! # Calculator Formulas
//!
//! Pure, deterministic calculation functions for the five tools. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Validated numeric parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure function
//!
//! Parsing raw form text into these inputs is the job of the [`crate::forms`]
//! module; nothing in here touches history or storage.
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body Mass Index with WHO category bands
//! - [`loan`] - Fixed-payment loan amortization (annuity formula)
//! - [`compound`] - Compound interest future value
//! - [`calorie`] - BMR and daily calories (Mifflin-St Jeor)
//! - [`currency`] - Static-rate currency conversion

pub mod bmi;
pub mod calorie;
pub mod compound;
pub mod currency;
pub mod loan;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use calorie::{ActivityLevel, CalorieInput, CalorieResult, Gender};
pub use compound::{CompoundInput, CompoundResult};
pub use currency::{ConversionInput, ConversionResult, Currency};
pub use loan::{LoanInput, LoanResult};

/// Measurement system for weight/height inputs.
///
/// Serializes as `"metric"` / `"imperial"`, matching the persisted
/// history schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Display label for the unit system
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}
