//! # Calorie / BMR Calculation
//!
//! Basal Metabolic Rate via the Mifflin-St Jeor equation:
//!
//! ```text
//! male:   BMR = 10w + 6.25h - 5a + 5
//! female: BMR = 10w + 6.25h - 5a - 161
//! ```
//!
//! with weight in kg, height in cm, age in years. Daily calories are
//! `BMR * activity multiplier`.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::calculations::calorie::{
//!     calculate, ActivityLevel, CalorieInput, Gender,
//! };
//!
//! let input = CalorieInput {
//!     gender: Gender::Male,
//!     age_years: 25.0,
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     activity: ActivityLevel::ModeratelyActive,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.bmr - 1673.75).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Conversion factor from pounds to kilograms
pub const LB_TO_KG: f64 = 0.453592;

/// Conversion factor from inches to centimeters
pub const IN_TO_CM: f64 = 2.54;

/// Biological sex for the Mifflin-St Jeor constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Activity multiplier applied to BMR to estimate daily calorie needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise (1.2)
    Sedentary,
    /// Light exercise/sports 1-3 days/week (1.375)
    LightlyActive,
    /// Moderate exercise/sports 3-5 days/week (1.55)
    ModeratelyActive,
    /// Hard exercise/sports 6-7 days a week (1.725)
    VeryActive,
    /// Very hard exercise/physical job (1.9)
    ExtraActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// The multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Full description, as shown in activity selectors
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => {
                "Lightly active (light exercise/sports 1-3 days/week)"
            }
            ActivityLevel::ModeratelyActive => {
                "Moderately active (moderate exercise/sports 3-5 days/week)"
            }
            ActivityLevel::VeryActive => {
                "Very active (hard exercise/sports 6-7 days a week)"
            }
            ActivityLevel::ExtraActive => "Extra active (very hard exercise/physical job)",
        }
    }

    /// Look up a level by its multiplier value
    pub fn from_multiplier(value: f64) -> Option<Self> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| (level.multiplier() - value).abs() < 1e-9)
    }
}

/// Input parameters for a calorie calculation.
///
/// Weight and height are metric; imperial form inputs are converted
/// before reaching this layer (lb x 0.453592, in x 2.54).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieInput {
    pub gender: Gender,
    pub age_years: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

impl CalorieInput {
    /// Validate input parameters. Non-finite values (NaN, infinity) are
    /// rejected along with non-positive ones.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.age_years.is_finite() || self.age_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "age_years",
                self.age_years.to_string(),
                "Age must be positive",
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight_kg",
                self.weight_kg.to_string(),
                "Weight must be positive",
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_cm",
                self.height_cm.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }
}

/// Calorie calculation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal Metabolic Rate (kcal/day at rest)
    pub bmr: f64,

    /// Estimated daily calorie needs (BMR x activity multiplier)
    pub calories: f64,
}

/// Calculate BMR and daily calories via Mifflin-St Jeor.
pub fn calculate(input: &CalorieInput) -> CalcResult<CalorieResult> {
    input.validate()?;

    let base = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age_years;
    let bmr = match input.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };

    Ok(CalorieResult {
        bmr,
        calories: bmr * input.activity.multiplier(),
    })
}
