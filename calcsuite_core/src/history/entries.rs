//! # History Entry Types
//!
//! One record type per calculator, all fields pre-formatted display strings.
//! Values are frozen at calculation time: a later change to formatting
//! conventions never rewrites what is already in a log.
//!
//! The persisted JSON layout is a flat array of objects with camelCase
//! fields plus `id` and `timestamp` at the same level, one array per
//! calculator key. There is no version field; records tolerate absent
//! fields via serde defaults so older entries keep loading after schema
//! additions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::calculations::calorie::Gender;
use crate::calculations::UnitSystem;

/// The five calculator types, used as history log keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    Bmi,
    Loan,
    CompoundInterest,
    Calorie,
    Currency,
}

impl CalculatorKind {
    /// All calculator kinds for iteration
    pub const ALL: [CalculatorKind; 5] = [
        CalculatorKind::Bmi,
        CalculatorKind::Loan,
        CalculatorKind::CompoundInterest,
        CalculatorKind::Calorie,
        CalculatorKind::Currency,
    ];

    /// Stable persistence key for this calculator's log
    pub fn storage_key(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "bmiHistory",
            CalculatorKind::Loan => "loanHistory",
            CalculatorKind::CompoundInterest => "compoundInterestHistory",
            CalculatorKind::Calorie => "calorieHistory",
            CalculatorKind::Currency => "currencyHistory",
        }
    }

    /// Display name for menus and headers
    pub fn label(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "BMI",
            CalculatorKind::Loan => "Loan",
            CalculatorKind::CompoundInterest => "Compound Interest",
            CalculatorKind::Calorie => "Calorie",
            CalculatorKind::Currency => "Currency",
        }
    }
}

/// A record type that belongs to exactly one calculator's log.
///
/// Implementors are the per-tool payloads below; the store uses `KIND` to
/// pick the persistence key, so a record can never be appended to the
/// wrong log.
pub trait HistoryRecord: Serialize + DeserializeOwned + Clone {
    /// Which calculator log this record belongs to
    const KIND: CalculatorKind;
}

/// A stored history entry: a unique id, a human-readable timestamp, and the
/// per-tool record flattened alongside them.
///
/// `#[serde(flatten)]` keeps the persisted object flat, so an entry
/// serializes as `{"id": ..., "timestamp": ..., <record fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<R> {
    /// Unique within the log, collision-resistant across rapid appends
    pub id: String,

    /// Human-readable creation time, frozen at append
    pub timestamp: String,

    /// The calculator-specific payload
    #[serde(flatten)]
    pub record: R,
}

/// BMI calculation snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BmiRecord {
    pub bmi: String,
    pub weight: String,
    pub height: String,
    pub unit: UnitSystem,
}

impl HistoryRecord for BmiRecord {
    const KIND: CalculatorKind = CalculatorKind::Bmi;
}

/// Loan calculation snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanRecord {
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
    pub amount: String,
    pub interest: String,
    pub term: String,
}

impl HistoryRecord for LoanRecord {
    const KIND: CalculatorKind = CalculatorKind::Loan;
}

/// Compound interest calculation snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompoundRecord {
    pub future_value: String,
    pub total_interest: String,
    pub principal: String,
    pub rate: String,
    pub years: String,
    pub compounds: String,
}

impl HistoryRecord for CompoundRecord {
    const KIND: CalculatorKind = CalculatorKind::CompoundInterest;
}

/// Calorie calculation snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalorieRecord {
    pub bmr: String,
    pub calories: String,
    pub age: String,
    pub gender: Gender,
    pub weight: String,
    pub height: String,
    pub activity_level: String,
    pub unit: UnitSystem,
}

impl HistoryRecord for CalorieRecord {
    const KIND: CalculatorKind = CalculatorKind::Calorie;
}

/// Currency conversion snapshot.
///
/// `rate` is the quoted form, e.g. `"1 USD = 0.9300 EUR"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyRecord {
    pub from_amount: String,
    pub from_currency: String,
    pub to_amount: String,
    pub to_currency: String,
    pub rate: String,
}

impl HistoryRecord for CurrencyRecord {
    const KIND: CalculatorKind = CalculatorKind::Currency;
}
