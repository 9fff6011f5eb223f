// tests/export.rs
mod common;

use std::fs;

use boas_shop::export::{self, products_to_string, sizes_label, Delim};
use boas_shop::i18n::Lang;
use common::sample_products;

#[test]
fn sizes_label_lists_quantities() {
    let products = sample_products();
    assert_eq!(sizes_label(&products[0]), "42 (1); 42,5 (2)");
    assert_eq!(sizes_label(&products[2]), "41 (1)");
}

#[test]
fn csv_quotes_fields_with_separators() {
    let products = sample_products();
    let out = products_to_string(&products[..1], None, Delim::Csv).unwrap();
    assert_eq!(out, "Air Max 90,AM90-001,€105,\"42 (1); 42,5 (2)\"\n");
}

#[test]
fn tsv_with_localized_headers() {
    let products = sample_products();
    let headers = export::headers(Lang::Pt.strings());
    let out = products_to_string(&products[1..2], Some(headers.as_slice()), Delim::Tsv).unwrap();
    assert_eq!(out, "Nome\tSKU\tPreço\tTamanhos\nJordan 1\t-\t€1040\t44 (1)\n");
}

#[test]
fn quotes_are_doubled_and_tsv_quotes_tabs() {
    let mut products = sample_products();
    products.truncate(1);
    products[0].name = "Air \"Max\" 90".to_string();
    products[0].sku = "AM\t90".to_string();

    let csv = products_to_string(&products, None, Delim::Csv).unwrap();
    assert!(csv.starts_with("\"Air \"\"Max\"\" 90\",AM\t90,"), "{csv}");

    let tsv = products_to_string(&products, None, Delim::Tsv).unwrap();
    assert!(tsv.starts_with("\"Air \"\"Max\"\" 90\"\t\"AM\t90\"\t€105\t"), "{tsv}");
    assert!(tsv.ends_with("42 (1); 42,5 (2)\n"));
}

#[test]
fn writes_file_and_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("boas_shop_export_{}", std::process::id()));
    let path = dir.join("nested").join("out.tsv");
    let products = sample_products();

    export::write_products(&path, &products, None, Delim::Tsv).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Air Max 90\tAM90-001\t€105\t"));

    let _ = fs::remove_dir_all(&dir);
}
