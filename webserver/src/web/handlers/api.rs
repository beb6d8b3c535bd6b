//! REST API handlers
//!
//! HTTP endpoints for the addition operation and the health probe

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use shared::{HealthResponse, SumResponse};

use crate::core::calculator;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;

/// Add the `a` and `b` query parameters - /api/calculate
///
/// A missing parameter is treated like an unparsable one.
pub async fn calculate(Query(params): Query<HashMap<String, String>>) -> WebServerResult<Json<SumResponse>> {
    let operand = |name: &str| params.get(name).and_then(|raw| calculator::parse_int(raw));

    let (Some(a), Some(b)) = (operand("a"), operand("b")) else {
        return Err(WebServerError::InvalidNumbers);
    };

    let sum = calculator::add(a, b)?;
    Ok(Json(SumResponse { sum }))
}

/// Health check endpoint - /health
pub async fn health_check(State(state): State<Arc<WebServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.get_uptime_seconds(),
        timestamp: Utc::now().timestamp().max(0) as u64,
    })
}
