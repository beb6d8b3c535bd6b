//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod api_client;

pub use api_client::RealCalculatorApi;
