// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,reload,poll_load}.

mod copy;    // src/gui/actions/copy.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use load::{poll_load, reload};
