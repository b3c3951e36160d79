//! Calorie form: age, gender, weight/height in either unit system, and an
//! activity multiplier. Imperial inputs are converted to metric before the
//! formula runs.

use crate::calculations::calorie::{
    self, ActivityLevel, CalorieInput, CalorieResult, Gender, IN_TO_CM, LB_TO_KG,
};
use crate::calculations::UnitSystem;
use crate::forms::{parse_field, parse_field_or_zero};
use crate::history::entries::CalorieRecord;
use crate::history::storage::Storage;
use crate::history::store::HistoryStore;

/// Raw input state for the calorie calculator.
#[derive(Debug, Clone)]
pub struct CalorieForm {
    pub unit: UnitSystem,
    pub age: String,
    pub gender: Gender,
    /// kg (metric) or lb (imperial)
    pub weight: String,
    /// cm, metric only
    pub height: String,
    /// feet component, imperial only
    pub feet: String,
    /// inches component, imperial only
    pub inches: String,
    /// Activity multiplier as text ("1.55")
    pub activity_level: String,
}

impl Default for CalorieForm {
    fn default() -> Self {
        CalorieForm {
            unit: UnitSystem::Metric,
            age: "25".to_string(),
            gender: Gender::Male,
            weight: "70".to_string(),
            height: "175".to_string(),
            feet: "5".to_string(),
            inches: "9".to_string(),
            activity_level: "1.55".to_string(),
        }
    }
}

impl CalorieForm {
    /// Reset all fields to defaults
    pub fn reset(&mut self) {
        *self = CalorieForm::default();
    }

    /// Run the calculation and, on success, record a history snapshot.
    pub fn calculate<S: Storage>(&self, store: &mut HistoryStore<S>) -> Option<CalorieResult> {
        let age_years = parse_field(&self.age)?;
        let activity = ActivityLevel::from_multiplier(parse_field(&self.activity_level)?)?;

        let (weight_kg, height_cm) = match self.unit {
            UnitSystem::Metric => (parse_field(&self.weight)?, parse_field(&self.height)?),
            UnitSystem::Imperial => {
                let weight_lb = parse_field(&self.weight)?;
                let total_inches =
                    parse_field_or_zero(&self.feet) * 12.0 + parse_field_or_zero(&self.inches);
                (weight_lb * LB_TO_KG, total_inches * IN_TO_CM)
            }
        };

        let input = CalorieInput {
            gender: self.gender,
            age_years,
            weight_kg,
            height_cm,
            activity,
        };
        let result = calorie::calculate(&input).ok()?;

        store.append(CalorieRecord {
            bmr: format!("{:.0}", result.bmr),
            calories: format!("{:.0}", result.calories),
            age: self.age.trim().to_string(),
            gender: self.gender,
            weight: match self.unit {
                UnitSystem::Metric => format!("{} kg", self.weight.trim()),
                UnitSystem::Imperial => format!("{} lbs", self.weight.trim()),
            },
            height: match self.unit {
                UnitSystem::Metric => format!("{} cm", self.height.trim()),
                UnitSystem::Imperial => {
                    format!("{}' {}\"", self.feet.trim(), self.inches.trim())
                }
            },
            activity_level: activity.label().to_string(),
            unit: self.unit,
        });

        Some(result)
    }
}
