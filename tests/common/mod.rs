// tests/common/mod.rs
#![allow(dead_code)]

/// Small feed covering grouping, equivalent sizes, hidden rows and junk lines.
pub const SAMPLE_FEED: &str = "\
Name,SKU,Size,Price + ship,image_url,notes
Air Max 90,AM90-001,42,100 €,,
Air Max 90,AM90-001,\"42,5\",100 €,,
Air Max 90,AM90-001,42.5,100 €,,
Jordan 1,-,44,\"1000,00 €\",https://drive.google.com/file/d/abc/view?usp=sharing,
Dunk Low,DL-7,40,abc,https://img.example.com/dunk.png,On Hold
Samba,,41,150 €,,Great condition
,X,41,10 €,,
Gazelle,GZ-1,,80 €,,
";

pub fn sample_products() -> Vec<boas_shop::feed::Product> {
    boas_shop::feed::process(SAMPLE_FEED)
}

pub fn names(products: &[boas_shop::feed::Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}
