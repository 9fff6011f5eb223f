// src/core/sizes.rs
//
// Shoe sizes arrive as free text: "42", "42,5", "42.5 ", "US 9".
// Two sizes are the same when they agree after normalization.

use std::cmp::Ordering;

use super::number::leading_f64;

/// Comma → period, trimmed, lower-case.
pub fn normalize_size(size: &str) -> String {
    size.replace(',', ".").trim().to_lowercase()
}

/// Equivalence used for both aggregation and filtering. Symmetric and reflexive.
pub fn sizes_match(a: &str, b: &str) -> bool {
    let na = normalize_size(a);
    let nb = normalize_size(b);

    na == nb
        || na.replacen('.', ",", 1) == nb
        || na == nb.replacen('.', ",", 1)
}

/// Numeric sizes first (ascending), then everything else by normalized text.
pub fn cmp_sizes(a: &str, b: &str) -> Ordering {
    let na = normalize_size(a);
    let nb = normalize_size(b);
    match (leading_f64(&na), leading_f64(&nb)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| na.cmp(&nb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => na.cmp(&nb),
    }
}

/// One representative (first spelling seen) per equivalence class, sorted.
pub fn distinct_sizes<'a, I>(sizes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for size in sizes {
        if size.trim().is_empty() {
            continue;
        }
        if !out.iter().any(|seen| sizes_match(seen, size)) {
            out.push(s!(size.trim()));
        }
    }
    out.sort_by(|a, b| cmp_sizes(a, b));
    out
}
