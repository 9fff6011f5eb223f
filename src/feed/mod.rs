// src/feed/mod.rs
//! # Inventory feed pipeline
//!
//! Text in, products out:
//!
//! ```text
//! net::FeedSource::fetch → parse::parse → filter::keep_available → aggregate::aggregate
//!                 ↖______________ load::load_with_retry (whole chain per attempt) ______↙
//! ```
//!
//! Everything after the fetch is pure and synchronous. Nothing here knows about
//! the GUI or the CLI; front ends consume `Vec<Product>` and hand it to
//! `view::Catalog`.

pub mod aggregate;
pub mod filter;
pub mod load;
pub mod net;
pub mod parse;

pub use aggregate::{aggregate, Product, SizeEntry};
pub use filter::keep_available;
pub use load::{load_once, load_with_retry, process};
pub use net::{FeedSource, HttpFeed};
pub use parse::{parse, RawRow};
