//! Server configuration

use std::net::{IpAddr, SocketAddr};

use crate::error::{WebServerError, WebServerResult};

/// Listen address settings, usually filled from command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve the configured host and port into a bind address
    pub fn socket_addr(&self) -> WebServerResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 3000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_ipv6_host() {
        let addr = ServerConfig::new("::1", 8080).socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.is_ipv6());
    }

    #[test]
    fn test_invalid_host() {
        let result = ServerConfig::new("not-an-ip", 3000).socket_addr();
        assert!(matches!(result, Err(WebServerError::Config(_))));
    }
}
