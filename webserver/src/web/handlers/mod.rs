//! Request handlers

pub mod api;

pub use api::{calculate, health_check};
