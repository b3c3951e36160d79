//! # Display Formatting
//!
//! en-US style number formatting for history snapshots and result panels.
//! History entries store these strings verbatim, so the formatting here is
//! frozen at write time; changing it later never rewrites old entries.

use crate::calculations::currency::Currency;

/// Format a value with thousands grouping and two decimals: `1322.6` -> `"1,322.60"`.
pub fn amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format a value as US dollars: `1322.6` -> `"$1,322.60"`.
pub fn usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", amount(-value))
    } else {
        format!("${}", amount(value))
    }
}

/// Format a value in a given currency.
///
/// Uses the currency's symbol where one exists; otherwise degrades to
/// the plain `"amount CODE"` form (e.g. `"90.00 CHF"`).
pub fn currency_display(value: f64, currency: Currency) -> String {
    match currency.symbol() {
        Some(symbol) => format!("{}{}", symbol, amount(value)),
        None => format!("{} {}", amount(value), currency.code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_grouping() {
        assert_eq!(amount(0.0), "0.00");
        assert_eq!(amount(93.0), "93.00");
        assert_eq!(amount(1322.6), "1,322.60");
        assert_eq!(amount(1234567.891), "1,234,567.89");
        assert_eq!(amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(10000.0), "$10,000.00");
        assert_eq!(usd(188.7123), "$188.71");
        assert_eq!(usd(-42.0), "-$42.00");
    }

    #[test]
    fn test_currency_display_symbol_and_fallback() {
        assert_eq!(currency_display(93.0, Currency::Eur), "\u{20ac}93.00");
        assert_eq!(currency_display(93.0, Currency::Usd), "$93.00");
        // CHF has no symbol in the table, so it falls back to code suffix
        assert_eq!(currency_display(90.0, Currency::Chf), "90.00 CHF");
    }
}
