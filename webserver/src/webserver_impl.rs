//! Main webserver implementation
//!
//! Owns the router, the listener lifecycle and the shutdown channel.

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use shared::{CALCULATE_PATH, HEALTH_PATH, ProcessId, logging, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers;

/// Main webserver struct
pub struct WebServer {
    state: Arc<WebServerState>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl WebServer {
    /// Create a new webserver around the given state
    pub fn new(state: WebServerState) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            state: Arc::new(state),
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    /// Sender that stops a running server when `()` is sent
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route(CALCULATE_PATH, get(handlers::calculate))
            .route(HEALTH_PATH, get(handlers::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Browser front ends call from another origin
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Bind `addr` and serve until a shutdown signal arrives
    pub async fn run(&mut self, addr: SocketAddr) -> WebServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        self.run_with_listener(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn run_with_listener(&mut self, listener: TcpListener) -> WebServerResult<()> {
        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| WebServerError::ServerStartup("Server has already been started".to_string()))?;

        let local_addr = listener.local_addr()?;
        let router = self.build_router();

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", local_addr);
        self.state.set_running(true);

        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await;

        self.state.set_running(false);
        logging::log_shutdown(ProcessId::current(), "HTTP server stopped");

        result.map_err(WebServerError::from)
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}
