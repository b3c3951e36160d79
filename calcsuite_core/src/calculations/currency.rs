//! # Currency Conversion
//!
//! Static-rate conversion between ten major currencies. Rates are fixed
//! compile-time constants relative to USD as the base unit; there is no
//! network fetch anywhere in the core.
//!
//! Converting amount `A` from currency X to Y goes through the base:
//! `A / rate[X] * rate[Y]`. The quoted unit rate is `rate[Y] / rate[X]`.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::calculations::currency::{calculate, ConversionInput, Currency};
//!
//! let input = ConversionInput {
//!     amount: 100.0,
//!     from: Currency::Usd,
//!     to: Currency::Eur,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.converted - 93.0).abs() < 1e-9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported currencies with static USD-base rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
    Gbp,
    Aud,
    Cad,
    Chf,
    Cny,
    Inr,
    Brl,
}

impl Currency {
    /// All supported currencies, in menu order
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Jpy,
        Currency::Gbp,
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Inr,
        Currency::Brl,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Brl => "BRL",
        }
    }

    /// Full currency name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "United States Dollar",
            Currency::Eur => "Euro",
            Currency::Jpy => "Japanese Yen",
            Currency::Gbp => "British Pound",
            Currency::Aud => "Australian Dollar",
            Currency::Cad => "Canadian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Inr => "Indian Rupee",
            Currency::Brl => "Brazilian Real",
        }
    }

    /// Units of this currency per 1 USD
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.93,
            Currency::Jpy => 157.25,
            Currency::Gbp => 0.79,
            Currency::Aud => 1.51,
            Currency::Cad => 1.37,
            Currency::Chf => 0.90,
            Currency::Cny => 7.25,
            Currency::Inr => 83.54,
            Currency::Brl => 5.25,
        }
    }

    /// Display symbol, where one exists.
    ///
    /// Currencies without a conventional symbol (CHF) return `None`;
    /// formatting falls back to "amount CODE".
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("$"),
            Currency::Eur => Some("\u{20ac}"),
            Currency::Jpy => Some("\u{a5}"),
            Currency::Gbp => Some("\u{a3}"),
            Currency::Aud => Some("A$"),
            Currency::Cad => Some("CA$"),
            Currency::Chf => None,
            Currency::Cny => Some("CN\u{a5}"),
            Currency::Inr => Some("\u{20b9}"),
            Currency::Brl => Some("R$"),
        }
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| CalcError::unknown_currency(code))
    }
}

/// Input parameters for a currency conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    /// Amount in the source currency
    pub amount: f64,

    /// Source currency
    pub from: Currency,

    /// Target currency
    pub to: Currency,
}

impl ConversionInput {
    /// Validate input parameters. Non-finite values (NaN, infinity) are
    /// rejected along with non-positive ones.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CalcError::invalid_input(
                "amount",
                self.amount.to_string(),
                "Amount must be positive",
            ));
        }
        Ok(())
    }
}

/// Currency conversion results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Amount in the target currency
    pub converted: f64,

    /// Target units per 1 source unit
    pub unit_rate: f64,
}

/// Convert an amount between two currencies via the USD base.
pub fn calculate(input: &ConversionInput) -> CalcResult<ConversionResult> {
    input.validate()?;

    let in_base = input.amount / input.from.rate();

    Ok(ConversionResult {
        converted: in_base * input.to.rate(),
        unit_rate: input.to.rate() / input.from.rate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_to_eur() {
        let input = ConversionInput {
            amount: 100.0,
            from: Currency::Usd,
            to: Currency::Eur,
        };
        let result = calculate(&input).unwrap();
        assert!((result.converted - 93.0).abs() < 1e-9);
        assert!((result.unit_rate - 0.93).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_is_identity() {
        for from in Currency::ALL {
            for to in Currency::ALL {
                let there = calculate(&ConversionInput {
                    amount: 250.0,
                    from,
                    to,
                })
                .unwrap();
                let back = calculate(&ConversionInput {
                    amount: there.converted,
                    from: to,
                    to: from,
                })
                .unwrap();
                assert!(
                    (back.converted - 250.0).abs() < 1e-9,
                    "{} -> {} round trip drifted",
                    from.code(),
                    to.code()
                );
            }
        }
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(CalcError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_rejects_nonpositive_amount() {
        let input = ConversionInput {
            amount: 0.0,
            from: Currency::Usd,
            to: Currency::Eur,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_rejects_non_finite_amount() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let input = ConversionInput {
                amount,
                from: Currency::Usd,
                to: Currency::Eur,
            };
            assert!(calculate(&input).is_err());
        }
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&Currency::Gbp).unwrap();
        assert_eq!(json, "\"GBP\"");
        let parsed: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, Currency::Jpy);
    }
}
