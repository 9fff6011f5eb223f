// src/core/mod.rs

pub mod image_url;
pub mod number;
pub mod price;
pub mod sizes;

pub use image_url::resolve_image_url;
pub use price::{adjust_price, extract_price};
pub use sizes::{normalize_size, sizes_match};
