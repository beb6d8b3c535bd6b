//! Calculator client library
//!
//! Holds the calculator store that drives the addition endpoint and
//! exposes loading, error and result state for display.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod store;
pub mod traits;

// Re-export main types
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use services::RealCalculatorApi;
pub use state::CalculatorState;
pub use store::CalculatorStore;
pub use traits::CalculatorApi;
