//! Shared building blocks for the medspa binaries and crates.

pub mod types;
pub mod utils;
