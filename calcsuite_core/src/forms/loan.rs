//! Loan form: amount, annual rate in percent, and term in years.

use crate::calculations::loan::{self, LoanInput, LoanResult};
use crate::format;
use crate::forms::parse_field;
use crate::history::entries::LoanRecord;
use crate::history::storage::Storage;
use crate::history::store::HistoryStore;

/// Raw input state for the loan calculator.
#[derive(Debug, Clone)]
pub struct LoanForm {
    pub amount: String,
    /// Annual interest rate in percent ("5" = 5%)
    pub interest: String,
    pub term: String,
}

impl Default for LoanForm {
    fn default() -> Self {
        LoanForm {
            amount: "10000".to_string(),
            interest: "5".to_string(),
            term: "5".to_string(),
        }
    }
}

impl LoanForm {
    /// Reset all fields to defaults
    pub fn reset(&mut self) {
        *self = LoanForm::default();
    }

    /// Run the calculation and, on success, record a history snapshot.
    ///
    /// A zero interest rate is a valid input and is recorded like any
    /// other successful calculation.
    pub fn calculate<S: Storage>(&self, store: &mut HistoryStore<S>) -> Option<LoanResult> {
        let principal = parse_field(&self.amount)?;
        let rate_percent = parse_field(&self.interest)?;
        let term_years = parse_field(&self.term)?;

        let input = LoanInput {
            principal,
            annual_rate: rate_percent / 100.0,
            term_years,
        };
        let result = loan::calculate(&input).ok()?;

        store.append(LoanRecord {
            monthly_payment: format::usd(result.monthly_payment),
            total_payment: format::usd(result.total_payment),
            total_interest: format::usd(result.total_interest),
            amount: format::usd(principal),
            interest: format!("{}%", self.interest.trim()),
            term: format!("{} years", self.term.trim()),
        });

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::MemoryStorage;

    #[test]
    fn test_defaults_match_placeholder_values() {
        let form = LoanForm::default();
        assert_eq!(form.amount, "10000");
        assert_eq!(form.interest, "5");
        assert_eq!(form.term, "5");
    }

    #[test]
    fn test_calculation_records_formatted_snapshot() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = LoanForm::default();

        let result = form.calculate(&mut store).unwrap();
        assert!((result.monthly_payment - 188.71).abs() < 0.01);

        let log = store.load::<LoanRecord>();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].record.monthly_payment, "$188.71");
        assert_eq!(log[0].record.amount, "$10,000.00");
        assert_eq!(log[0].record.interest, "5%");
        assert_eq!(log[0].record.term, "5 years");
    }

    #[test]
    fn test_zero_rate_still_records_history() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = LoanForm {
            amount: "12000".to_string(),
            interest: "0".to_string(),
            term: "5".to_string(),
        };

        let result = form.calculate(&mut store).unwrap();
        assert_eq!(result.monthly_payment, 200.0);
        assert_eq!(result.total_interest, 0.0);

        let log = store.load::<LoanRecord>();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].record.total_interest, "$0.00");
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = LoanForm {
            amount: "-10".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());
        assert!(store.load::<LoanRecord>().is_empty());
    }

    #[test]
    fn test_non_finite_text_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());

        let form = LoanForm {
            interest: "inf".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());

        let form = LoanForm {
            amount: "NaN".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());

        assert!(store.load::<LoanRecord>().is_empty());
    }
}
