//! Webserver state management

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Core webserver state
///
/// The addition endpoint is stateless; this only tracks lifecycle data
/// reported by the health probe.
#[derive(Debug)]
pub struct WebServerState {
    pub is_running: AtomicBool,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new() -> Self {
        Self {
            is_running: AtomicBool::new(false),
            server_start_time: Instant::now(),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::new()
    }
}
