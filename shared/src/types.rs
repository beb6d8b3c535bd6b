//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Path of the addition endpoint
pub const CALCULATE_PATH: &str = "/api/calculate";

/// Path of the health probe
pub const HEALTH_PATH: &str = "/health";

static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any component in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// HTTP server hosting the addition endpoint
    WebServer,
    /// Command line client driving the calculator store
    Client,
    /// Library use without a binary entry point (tests, embedding)
    Library,
}

impl ProcessId {
    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the client
    pub fn init_client() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Client)
    }

    /// Get the global process ID, `Library` until a binary initializes it
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Library)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Client => write!(f, "client"),
            ProcessId::Library => write!(f, "library"),
        }
    }
}

/// Successful response of the addition endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResponse {
    pub sum: i64,
}

/// Error body returned with any 4xx/5xx status.
///
/// The server always fills both messages. Clients must tolerate either
/// being absent since proxies and other servers answer with their own bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Body with the same text in both message fields
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status_code,
            status_message: Some(message.clone()),
            message: Some(message),
        }
    }
}

/// Health probe payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub timestamp: u64,
}
