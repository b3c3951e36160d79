//! BMI form: metric weight/height in kg/cm, imperial weight in lb with
//! height split into feet and inches.

use crate::calculations::bmi::{self, BmiInput, BmiResult};
use crate::calculations::UnitSystem;
use crate::forms::{parse_field, parse_field_or_zero};
use crate::history::entries::BmiRecord;
use crate::history::storage::Storage;
use crate::history::store::HistoryStore;

/// Raw input state for the BMI calculator.
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    pub unit: UnitSystem,
    /// kg (metric) or lb (imperial)
    pub weight: String,
    /// cm, metric only
    pub height: String,
    /// feet component, imperial only
    pub feet: String,
    /// inches component, imperial only
    pub inches: String,
}

impl BmiForm {
    /// Reset all fields to defaults (empty, metric)
    pub fn reset(&mut self) {
        *self = BmiForm::default();
    }

    /// Run the calculation and, on success, record a history snapshot.
    ///
    /// Returns `None` on any validation failure, in which case nothing is
    /// written to history.
    pub fn calculate<S: Storage>(&self, store: &mut HistoryStore<S>) -> Option<BmiResult> {
        let weight = parse_field(&self.weight)?;
        let height = match self.unit {
            UnitSystem::Metric => parse_field(&self.height)?,
            UnitSystem::Imperial => {
                // Either component may be blank; "5' " is a valid height
                parse_field_or_zero(&self.feet) * 12.0 + parse_field_or_zero(&self.inches)
            }
        };

        let input = BmiInput {
            unit: self.unit,
            weight,
            height,
        };
        let result = bmi::calculate(&input).ok()?;

        store.append(BmiRecord {
            bmi: format!("{:.2}", result.bmi),
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
            unit: self.unit,
        });

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bmi::BmiCategory;
    use crate::history::storage::MemoryStorage;

    #[test]
    fn test_metric_calculation_records_history() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = BmiForm {
            unit: UnitSystem::Metric,
            weight: "70".to_string(),
            height: "175".to_string(),
            ..Default::default()
        };

        let result = form.calculate(&mut store).unwrap();
        assert!((result.bmi - 22.86).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::NormalWeight);

        let log = store.load::<BmiRecord>();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].record.bmi, "22.86");
        assert_eq!(log[0].record.weight, "70 kg");
        assert_eq!(log[0].record.height, "175 cm");
    }

    #[test]
    fn test_imperial_height_from_feet_and_inches() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = BmiForm {
            unit: UnitSystem::Imperial,
            weight: "154".to_string(),
            feet: "5".to_string(),
            inches: "9".to_string(),
            ..Default::default()
        };

        let result = form.calculate(&mut store).unwrap();
        assert!((result.bmi - 22.74).abs() < 0.01);

        let log = store.load::<BmiRecord>();
        assert_eq!(log[0].record.height, "5' 9\"");
        assert_eq!(log[0].record.weight, "154 lbs");
    }

    #[test]
    fn test_blank_inches_parses_as_zero() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = BmiForm {
            unit: UnitSystem::Imperial,
            weight: "154".to_string(),
            feet: "6".to_string(),
            inches: String::new(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_some());
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = BmiForm {
            unit: UnitSystem::Metric,
            weight: "abc".to_string(),
            height: "175".to_string(),
            ..Default::default()
        };

        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<BmiRecord>().is_empty());

        // Both imperial components blank means height 0, also rejected
        let form = BmiForm {
            unit: UnitSystem::Imperial,
            weight: "154".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<BmiRecord>().is_empty());
    }

    #[test]
    fn test_nan_text_is_rejected_and_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = BmiForm {
            unit: UnitSystem::Metric,
            weight: "nan".to_string(),
            height: "175".to_string(),
            ..Default::default()
        };

        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<BmiRecord>().is_empty());

        let form = BmiForm {
            unit: UnitSystem::Metric,
            weight: "70".to_string(),
            height: "inf".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<BmiRecord>().is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = BmiForm {
            unit: UnitSystem::Imperial,
            weight: "154".to_string(),
            feet: "5".to_string(),
            ..Default::default()
        };
        form.reset();
        assert_eq!(form.unit, UnitSystem::Metric);
        assert!(form.weight.is_empty());
        assert!(form.feet.is_empty());
    }
}
