// src/config/consts.rs

// Feed (published spreadsheet, CSV export)
pub const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTo2OTo7z73stGi8MjrUjKEDhgZmk_eIzAral-e4izDyjDbjSJO7vTeg4LXlrwPncotNCth4lFh6YaF/pub?gid=1204797675&single=true&output=csv";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const USER_AGENT: &str = concat!("boas_shop/", env!("CARGO_PKG_VERSION"));

// Feed columns
pub const COL_NAME: &str = "Name";
pub const COL_SKU: &str = "SKU";
pub const COL_SIZE: &str = "Size";
pub const COL_PRICE: &str = "Price + ship";
pub const COL_IMAGE: &str = "image_url";
pub const COL_NOTES: &str = "notes";

/// SKU placeholder used by the sheet (and by us when the cell is empty)
pub const NO_SKU: &str = "-";

/// Lower-case markers in `notes` that take a row off the shelf
pub const HIDDEN_NOTE_MARKERS: &[&str] = &["consign", "hold", "hide"];

// Pricing
pub const CURRENCY: &str = "€";
pub const FEE_MULTIPLIER: f64 = 1.04; // 4% fee
pub const MIN_MARKUP: f64 = 5.0;
pub const NO_PRICE: &str = "N/A";

// Images
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";
pub const SHARE_HOST: &str = "drive.google.com";
pub const SHARE_VIEW_SUFFIX: &str = "/view?usp=sharing";
pub const DIRECT_VIEW_SUFFIX: &str = "/uc?export=view";
pub const MAX_IMAGE_SIDE: u32 = 1200;

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Concurrency
pub const IMAGE_WORKERS: usize = 4;
