//! Shared types for the calculator system
//!
//! Contains the wire contract between the webserver and its clients,
//! plus process identity and logging helpers used by both binaries.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
