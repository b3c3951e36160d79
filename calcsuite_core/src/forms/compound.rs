//! Compound interest form: principal, annual rate in percent, years, and
//! compounding frequency per year.

use crate::calculations::compound::{self, compounding_label, CompoundInput, CompoundResult};
use crate::format;
use crate::forms::parse_field;
use crate::history::entries::CompoundRecord;
use crate::history::storage::Storage;
use crate::history::store::HistoryStore;

/// Raw input state for the compound interest calculator.
#[derive(Debug, Clone)]
pub struct CompoundForm {
    pub principal: String,
    /// Annual interest rate in percent ("7" = 7%)
    pub rate: String,
    pub years: String,
    /// Compounding periods per year ("12" = monthly)
    pub compounds: String,
}

impl Default for CompoundForm {
    fn default() -> Self {
        CompoundForm {
            principal: "1000".to_string(),
            rate: "7".to_string(),
            years: "10".to_string(),
            compounds: "12".to_string(),
        }
    }
}

impl CompoundForm {
    /// Reset all fields to defaults
    pub fn reset(&mut self) {
        *self = CompoundForm::default();
    }

    /// Run the calculation and, on success, record a history snapshot.
    pub fn calculate<S: Storage>(&self, store: &mut HistoryStore<S>) -> Option<CompoundResult> {
        let principal = parse_field(&self.principal)?;
        let rate_percent = parse_field(&self.rate)?;
        let years = parse_field(&self.years)?;
        let compounds_per_year = parse_field(&self.compounds)?;

        let input = CompoundInput {
            principal,
            annual_rate: rate_percent / 100.0,
            years,
            compounds_per_year,
        };
        let result = compound::calculate(&input).ok()?;

        store.append(CompoundRecord {
            future_value: format::usd(result.future_value),
            total_interest: format::usd(result.total_interest),
            principal: format::usd(principal),
            rate: format!("{}%", self.rate.trim()),
            years: format!("{} years", self.years.trim()),
            compounds: compounding_label(compounds_per_year),
        });

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::MemoryStorage;

    #[test]
    fn test_calculation_records_formatted_snapshot() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = CompoundForm::default();

        let result = form.calculate(&mut store).unwrap();
        assert!((result.future_value - 2009.66).abs() < 0.01);

        let log = store.load::<CompoundRecord>();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].record.future_value, "$2,009.66");
        assert_eq!(log[0].record.principal, "$1,000.00");
        assert_eq!(log[0].record.rate, "7%");
        assert_eq!(log[0].record.years, "10 years");
        assert_eq!(log[0].record.compounds, "Monthly");
    }

    #[test]
    fn test_unusual_frequency_label() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = CompoundForm {
            compounds: "52".to_string(),
            ..Default::default()
        };

        form.calculate(&mut store).unwrap();
        let log = store.load::<CompoundRecord>();
        assert_eq!(log[0].record.compounds, "52 times/year");
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = CompoundForm {
            years: "zero".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<CompoundRecord>().is_empty());
    }
}
