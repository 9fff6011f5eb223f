// tests/price.rs
use boas_shop::core::price::{apply_markup, parse_sheet_price};
use boas_shop::core::{adjust_price, extract_price};

#[test]
fn minimum_markup_applies_below_125() {
    assert_eq!(adjust_price("100 €"), "€105");
    assert_eq!(adjust_price("10"), "€15");
    assert_eq!(adjust_price("0"), "€5");
}

#[test]
fn percentage_fee_applies_above_125() {
    assert_eq!(adjust_price("1000 €"), "€1040");
    assert_eq!(adjust_price("200"), "€208");
    // exactly 5 over: fee wins, no override
    assert_eq!(adjust_price("125"), "€130");
}

#[test]
fn rounding_happens_after_override() {
    // 124.99 * 1.04 = 129.9896, only 4.9996 over → 129.99 → 130
    assert_eq!(adjust_price("124.99"), "€130");
    // 12.5 + 5 = 17.5 rounds half up
    assert_eq!(adjust_price("12,5 €"), "€18");
}

#[test]
fn comma_decimal_and_currency_marker() {
    assert_eq!(parse_sheet_price("1000,00 €"), Some(1000.0));
    assert_eq!(parse_sheet_price("99,9"), Some(99.9));
    assert_eq!(parse_sheet_price("80 €"), Some(80.0));
    assert_eq!(adjust_price("1000,00 €"), "€1040");
}

#[test]
fn unparseable_is_na() {
    assert_eq!(adjust_price(""), "N/A");
    assert_eq!(adjust_price("abc"), "N/A");
    assert_eq!(adjust_price("€100"), "N/A");
}

#[test]
fn markup_is_monotonic_and_never_below_minimum() {
    let mut prev = f64::MIN;
    for cents in (0..300_000).step_by(37) {
        let original = cents as f64 / 100.0;
        let adjusted = apply_markup(original);
        assert!(adjusted >= prev, "not monotonic at {original}");
        assert!(adjusted - original >= 4.5, "increase too small at {original}");
        if original * 0.04 > 5.0 {
            assert!(adjusted - original >= original * 0.04 - 0.5, "fee lost at {original}");
        }
        prev = adjusted;
    }
}

#[test]
fn extract_price_for_sorting() {
    assert_eq!(extract_price("€105"), 105.0);
    assert_eq!(extract_price("€1040"), 1040.0);
    assert_eq!(extract_price("N/A"), 0.0);
    assert_eq!(extract_price(""), 0.0);
    assert_eq!(extract_price("free"), 0.0);
}

#[test]
fn large_prices_keep_their_magnitude() {
    let price = adjust_price("1e20");
    let digits = price.strip_prefix('€').unwrap();
    assert_eq!(digits.len(), 21);
    assert!(digits.starts_with("104"), "{price}");

    let price = adjust_price("99999999999999999999 €");
    assert_eq!(price.strip_prefix('€').unwrap().len(), 21);

    assert_eq!(adjust_price("10000000000"), "€10400000000");
}

#[test]
fn overflowing_prices_are_na() {
    assert_eq!(adjust_price("1e400"), "N/A");
    assert_eq!(adjust_price("1.75e308"), "N/A");
}
