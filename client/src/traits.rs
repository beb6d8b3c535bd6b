//! Service trait definitions for dependency injection
//!
//! Network access is abstracted behind this trait so the store can be
//! driven by mocks in tests

use async_trait::async_trait;
use shared::SumResponse;

use crate::error::ClientResult;

/// Access to the addition endpoint
#[mockall::automock]
#[async_trait]
pub trait CalculatorApi: Send + Sync {
    /// Ask the server for the sum of two operands
    async fn fetch_sum(&self, a: f64, b: f64) -> ClientResult<SumResponse>;
}
