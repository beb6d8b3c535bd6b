//! Webserver library for the calculator system
//!
//! Serves the addition endpoint and a health probe over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::ServerConfig;
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
