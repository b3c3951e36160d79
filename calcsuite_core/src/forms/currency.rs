//! Currency form: amount plus source and target currencies, with a swap
//! action.

use crate::calculations::currency::{self, ConversionInput, ConversionResult, Currency};
use crate::format;
use crate::forms::parse_field;
use crate::history::entries::CurrencyRecord;
use crate::history::storage::Storage;
use crate::history::store::HistoryStore;

/// Raw input state for the currency converter.
#[derive(Debug, Clone)]
pub struct CurrencyForm {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl Default for CurrencyForm {
    fn default() -> Self {
        CurrencyForm {
            amount: "100".to_string(),
            from: Currency::Usd,
            to: Currency::Eur,
        }
    }
}

impl CurrencyForm {
    /// Reset all fields to defaults
    pub fn reset(&mut self) {
        *self = CurrencyForm::default();
    }

    /// Exchange the source and target currencies
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Run the conversion and, on success, record a history snapshot.
    pub fn calculate<S: Storage>(&self, store: &mut HistoryStore<S>) -> Option<ConversionResult> {
        let amount = parse_field(&self.amount)?;

        let input = ConversionInput {
            amount,
            from: self.from,
            to: self.to,
        };
        let result = currency::calculate(&input).ok()?;

        store.append(CurrencyRecord {
            from_amount: format::amount(amount),
            from_currency: self.from.code().to_string(),
            to_amount: format::amount(result.converted),
            to_currency: self.to.code().to_string(),
            rate: format!(
                "1 {} = {:.4} {}",
                self.from.code(),
                result.unit_rate,
                self.to.code()
            ),
        });

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::MemoryStorage;

    #[test]
    fn test_default_conversion_records_history() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let form = CurrencyForm::default();

        let result = form.calculate(&mut store).unwrap();
        assert!((result.converted - 93.0).abs() < 1e-9);

        let log = store.load::<CurrencyRecord>();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].record.from_amount, "100.00");
        assert_eq!(log[0].record.from_currency, "USD");
        assert_eq!(log[0].record.to_amount, "93.00");
        assert_eq!(log[0].record.to_currency, "EUR");
        assert_eq!(log[0].record.rate, "1 USD = 0.9300 EUR");
    }

    #[test]
    fn test_swap_exchanges_currencies() {
        let mut form = CurrencyForm::default();
        form.swap();
        assert_eq!(form.from, Currency::Eur);
        assert_eq!(form.to, Currency::Usd);
    }

    #[test]
    fn test_invalid_amount_writes_nothing() {
        let mut store = HistoryStore::new(MemoryStorage::new());

        let form = CurrencyForm {
            amount: "-5".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());

        let form = CurrencyForm {
            amount: "lots".to_string(),
            ..Default::default()
        };
        assert!(form.calculate(&mut store).is_none());

        assert!(store.load::<CurrencyRecord>().is_empty());
    }
}
