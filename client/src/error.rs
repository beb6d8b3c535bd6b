//! Client error types

use reqwest::StatusCode;
use shared::{ErrorBody, SharedError};
use thiserror::Error;

/// Shown when no error carries a usable message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while calculating.";

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("[{method}] \"{url}\": {message}")]
    Transport {
        method: String,
        url: String,
        message: String,
    },

    #[error("[{method}] \"{url}\": {status}")]
    Api {
        method: String,
        url: String,
        status: StatusCode,
        body: Option<ErrorBody>,
    },

    #[error("[{method}] \"{url}\": invalid response body: {message}")]
    Decode {
        method: String,
        url: String,
        message: String,
    },

    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl ClientError {
    /// Human readable message for display.
    ///
    /// Prefers the server's `message`, then its `statusMessage`, then this
    /// error's own description. Empty strings are skipped, and an error with
    /// no detail of its own falls back to [`UNKNOWN_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let ClientError::Api { body: Some(body), .. } = self {
            let server_message = [body.message.as_deref(), body.status_message.as_deref()]
                .into_iter()
                .flatten()
                .find(|message| !message.trim().is_empty());

            if let Some(message) = server_message {
                return message.to_string();
            }
        }

        let has_detail = match self {
            ClientError::Transport { message, .. } | ClientError::Decode { message, .. } => {
                !message.trim().is_empty()
            }
            ClientError::Api { .. } | ClientError::Shared(_) => true,
        };

        if has_detail {
            self.to_string()
        } else {
            UNKNOWN_ERROR_MESSAGE.to_string()
        }
    }
}
