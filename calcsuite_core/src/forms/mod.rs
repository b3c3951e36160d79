//! # Calculator Forms
//!
//! Per-tool orchestration: each form holds the raw text a front end
//! collected, and `calculate` runs the full pipeline on a user-triggered
//! action:
//!
//! ```text
//! parse/validate -> formula -> format display snapshot -> append history
//! ```
//!
//! A validation rejection returns `None` and writes nothing; the front end
//! interprets `None` as "clear the result panel". `reset()` restores each
//! form's default field values and is independent of history.

pub mod bmi;
pub mod calorie;
pub mod compound;
pub mod currency;
pub mod loan;

pub use bmi::BmiForm;
pub use calorie::CalorieForm;
pub use compound::CompoundForm;
pub use currency::CurrencyForm;
pub use loan::LoanForm;

/// Parse a raw form field as a number. Empty or non-numeric text is a
/// validation failure, not an error. `f64::from_str` accepts "nan" and
/// "inf", which no calculator treats as a value, so non-finite parses are
/// rejected here too.
pub(crate) fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

/// Parse an optional form field, treating blank or unparseable text as 0
/// (imperial feet/inches behave this way).
pub(crate) fn parse_field_or_zero(raw: &str) -> f64 {
    parse_field(raw).unwrap_or(0.0)
}
