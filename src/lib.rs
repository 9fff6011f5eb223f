// src/lib.rs

#[macro_use]
pub mod macros;

#[doc(hidden)]
pub use ::log as __log;

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod feed;
pub mod i18n;
pub mod log;
pub mod progress;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
