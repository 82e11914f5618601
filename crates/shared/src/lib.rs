//! Host Gate Shared Types and Utilities
//!
//! This crate contains the book record type, the record lookup error and
//! database helpers shared across the host gate crates.

pub mod db;
pub mod error;
pub mod types;

pub use db::*;
pub use error::*;
pub use types::*;
