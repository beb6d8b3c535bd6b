//! Client configuration

use std::time::Duration;

use shared::SharedError;
use url::Url;

use crate::error::ClientResult;

/// Request timeout used when none is given
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the addition endpoint lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Validate a server address such as `http://127.0.0.1:3000`.
    ///
    /// A bare `host:port` is accepted and treated as plain http.
    pub fn new(server: &str, timeout: Duration) -> ClientResult<Self> {
        let candidate = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("http://{server}")
        };

        let base_url = Url::parse(&candidate).map_err(|_| SharedError::invalid_config("server", server))?;
        if base_url.host_str().is_none() {
            return Err(SharedError::invalid_config("server", server).into());
        }

        if timeout.is_zero() {
            return Err(SharedError::invalid_config("timeout", "0ms").into());
        }

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_full_url() {
        let config = ClientConfig::new("http://127.0.0.1:3000", DEFAULT_TIMEOUT).unwrap();

        assert_eq!(config.base_url.host_str(), Some("127.0.0.1"));
        assert_eq!(config.base_url.port(), Some(3000));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_bare_host_and_port() {
        let config = ClientConfig::new("localhost:8080", DEFAULT_TIMEOUT).unwrap();

        assert_eq!(config.base_url.scheme(), "http");
        assert_eq!(config.base_url.port(), Some(8080));
    }

    #[test]
    fn test_invalid_server() {
        let result = ClientConfig::new("http://", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(ClientError::Shared(SharedError::InvalidConfig { .. }))));
    }

    #[test]
    fn test_zero_timeout() {
        let result = ClientConfig::new("http://localhost:3000", Duration::ZERO);
        assert!(matches!(result, Err(ClientError::Shared(SharedError::InvalidConfig { .. }))));
    }
}
