//! Error types for the webserver

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{ErrorBody, ProcessId, process_error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Please provide valid numbers for \"a\" and \"b\" query parameters.")]
    InvalidNumbers,

    #[error("The sum of \"a\" and \"b\" is out of range.")]
    SumOutOfRange,

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    /// HTTP status this error maps to when it escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidNumbers | WebServerError::SumOutOfRange => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_client_error() {
            self.to_string()
        } else {
            process_error!(ProcessId::current(), error = %self, "Request failed");
            "Internal server error".to_string()
        };

        (status, Json(ErrorBody::new(status.as_u16(), message))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
