// src/feed/aggregate.rs
//
// Feed lines are single units ("one pair of X in size 42"). Group them into
// products keyed by name + SKU and count units per size.

use std::collections::HashMap;

use super::parse::RawRow;
use crate::config::consts::{COL_IMAGE, COL_NAME, COL_PRICE, COL_SIZE, COL_SKU, NO_SKU};
use crate::core::{adjust_price, extract_price, resolve_image_url, sizes_match};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeEntry {
    /// As spelled by the first row carrying it
    pub size: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// "-" when the sheet has none
    pub sku: String,
    pub image: String,
    /// "€<int>" or "N/A"
    pub price: String,
    /// First-seen order, no two equivalent sizes
    pub sizes: Vec<SizeEntry>,
}

impl Product {
    pub fn key(&self) -> String {
        group_key(&self.name, Some(&self.sku))
    }

    pub fn price_value(&self) -> f64 {
        extract_price(&self.price)
    }

    pub fn total_quantity(&self) -> u32 {
        self.sizes.iter().map(|e| e.quantity).sum()
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|e| sizes_match(size, &e.size))
    }

    fn add_unit(&mut self, size: &str) {
        match self.sizes.iter_mut().find(|e| sizes_match(&e.size, size)) {
            Some(entry) => entry.quantity += 1,
            None => self.sizes.push(SizeEntry {
                size: s!(size),
                quantity: 1,
            }),
        }
    }
}

/// `name|sku`, or just `name` when the SKU is missing or the "-" placeholder.
pub fn group_key(name: &str, sku: Option<&str>) -> String {
    match sku {
        Some(sku) if !sku.is_empty() && sku != NO_SKU => join!(name, "|", sku),
        _ => s!(name),
    }
}

fn non_empty<'a>(v: Option<&'a str>) -> Option<&'a str> {
    v.filter(|s| !s.is_empty())
}

/// Rows without a name or size are dropped silently.
/// Image and price come from the first row of each group.
pub fn aggregate(rows: &[RawRow]) -> Vec<Product> {
    let mut products: Vec<Product> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let (Some(name), Some(size)) = (non_empty(row.get(COL_NAME)), non_empty(row.get(COL_SIZE)))
        else {
            skipped += 1;
            continue;
        };
        let sku = non_empty(row.get(COL_SKU));

        let ix = *by_key.entry(group_key(name, sku)).or_insert_with(|| {
            products.push(Product {
                name: s!(name),
                sku: s!(sku.unwrap_or(NO_SKU)),
                image: resolve_image_url(row.get(COL_IMAGE).unwrap_or("")),
                price: adjust_price(row.get(COL_PRICE).unwrap_or("")),
                sizes: Vec::new(),
            });
            products.len() - 1
        });

        products[ix].add_unit(size);
    }

    logd!(
        "Aggregate: {} row(s) → {} product(s), {} skipped",
        rows.len(),
        products.len(),
        skipped
    );
    products
}
