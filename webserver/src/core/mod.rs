//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod calculator;

// Re-export commonly used types
pub use calculator::{add, parse_int};
