// src/gui/components/mod.rs
pub mod footer;
pub mod header;
pub mod lightbox;
pub mod product_grid;
pub mod product_list;
pub mod size_filter;
pub mod status;
pub mod toolbar;
