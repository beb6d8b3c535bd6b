//! HTTP client for the addition endpoint

use async_trait::async_trait;
use shared::{CALCULATE_PATH, ErrorBody, ProcessId, SharedError, SumResponse, process_debug};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::state::format_number;
use crate::traits::CalculatorApi;

const METHOD: &str = "GET";

/// Calls the addition endpoint with reqwest
#[derive(Clone)]
pub struct RealCalculatorApi {
    endpoint: Url,
    client: reqwest::Client,
}

impl RealCalculatorApi {
    /// Create a new API client for the configured server
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = config
            .base_url
            .join(CALCULATE_PATH)
            .map_err(|_| SharedError::invalid_config("server", config.base_url.as_str()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SharedError::invalid_config("http_client", e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    /// Endpoint URL without query parameters
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, a: f64, b: f64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("a", &format_number(a))
            .append_pair("b", &format_number(b));
        url
    }
}

#[async_trait]
impl CalculatorApi for RealCalculatorApi {
    async fn fetch_sum(&self, a: f64, b: f64) -> ClientResult<SumResponse> {
        let url = self.request_url(a, b);
        process_debug!(ProcessId::current(), "📤 {} {}", METHOD, url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                method: METHOD.to_string(),
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Any body that is not the structured shape is dropped
            let body = response.json::<ErrorBody>().await.ok();
            return Err(ClientError::Api {
                method: METHOD.to_string(),
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json::<SumResponse>().await.map_err(|e| ClientError::Decode {
            method: METHOD.to_string(),
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
