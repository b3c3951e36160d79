//! # BMI Calculation
//!
//! Body Mass Index with the WHO category bands.
//!
//! - Metric: `weight_kg / height_m²` (height entered in cm)
//! - Imperial: `weight_lb / height_in² × 703` (height entered in total inches)
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::calculations::bmi::{calculate, BmiCategory, BmiInput};
//! use calcsuite_core::calculations::UnitSystem;
//!
//! let input = BmiInput {
//!     unit: UnitSystem::Metric,
//!     weight: 70.0,
//!     height: 175.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.bmi - 22.86).abs() < 0.01);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::UnitSystem;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a BMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    /// Which measurement system `weight` and `height` are in
    pub unit: UnitSystem,

    /// Body weight: kg (metric) or lb (imperial)
    pub weight: f64,

    /// Height: cm (metric) or total inches (imperial)
    pub height: f64,
}

impl BmiInput {
    /// Validate input parameters. Non-finite values (NaN, infinity) are
    /// rejected along with non-positive ones.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }
}

/// WHO BMI classification bands (inclusive lower bound, exclusive upper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    NormalWeight,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    /// Display label for the category
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

/// BMI calculation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body Mass Index
    pub bmi: f64,

    /// WHO classification of the BMI value
    pub category: BmiCategory,
}

/// Calculate BMI from validated inputs.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let bmi = match input.unit {
        UnitSystem::Metric => {
            let height_m = input.height / 100.0;
            input.weight / (height_m * height_m)
        }
        UnitSystem::Imperial => (input.weight / (input.height * input.height)) * 703.0,
    };

    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let input = BmiInput {
            unit: UnitSystem::Metric,
            weight: 70.0,
            height: 175.0,
        };
        let result = calculate(&input).unwrap();
        // 70 / 1.75^2 = 22.857...
        assert!((result.bmi - 22.857).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::NormalWeight);
        assert_eq!(result.category.label(), "Normal weight");
    }

    #[test]
    fn test_imperial_bmi() {
        // 154 lb at 5'9" (69 in)
        let input = BmiInput {
            unit: UnitSystem::Imperial,
            weight: 154.0,
            height: 69.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.bmi - 22.74).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_rejects_nonpositive_inputs() {
        let input = BmiInput {
            unit: UnitSystem::Metric,
            weight: 0.0,
            height: 175.0,
        };
        assert!(calculate(&input).is_err());

        let input = BmiInput {
            unit: UnitSystem::Imperial,
            weight: 154.0,
            height: -1.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let input = BmiInput {
            unit: UnitSystem::Metric,
            weight: f64::NAN,
            height: 175.0,
        };
        assert!(calculate(&input).is_err());

        let input = BmiInput {
            unit: UnitSystem::Metric,
            weight: 70.0,
            height: f64::INFINITY,
        };
        assert!(calculate(&input).is_err());
    }
}
