// src/core/price.rs
//
// Shop price = sheet price + 4% fee, but never less than €5 over the sheet price.
// The override is applied before rounding; rounding is half-up to whole euros.

use super::number::leading_f64;
use crate::config::consts::{CURRENCY, FEE_MULTIPLIER, MIN_MARKUP, NO_PRICE};

/// Read the sheet's "Price + ship" cell: comma decimal separator and a trailing
/// " €" are accepted.
pub fn parse_sheet_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let mut s = if text.contains(',') {
        text.replacen(',', ".", 1)
    } else {
        s!(text)
    };
    s = s.replacen(" €", "", 1);
    leading_f64(&s)
}

/// Apply the fee / minimum markup and round to whole currency units.
pub fn apply_markup(original: f64) -> f64 {
    let mut adjusted = original * FEE_MULTIPLIER;
    if adjusted - original < MIN_MARKUP {
        adjusted = original + MIN_MARKUP;
    }
    (adjusted + 0.5).floor()
}

/// "100 €" → "€105", "1000 €" → "€1040", "" / "abc" / "1e400" → "N/A"
pub fn adjust_price(text: &str) -> String {
    let Some(original) = parse_sheet_price(text).filter(|v| v.is_finite()) else {
        return s!(NO_PRICE);
    };
    let rounded = apply_markup(original);
    if !rounded.is_finite() {
        return s!(NO_PRICE);
    }
    format!("{CURRENCY}{rounded:.0}")
}

/// Numeric value of a formatted price, for sorting. "N/A" and junk sort as 0.
pub fn extract_price(price: &str) -> f64 {
    if price.is_empty() || price == NO_PRICE {
        return 0.0;
    }
    let num: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    leading_f64(&num).unwrap_or(0.0)
}
