// ── Fetch gateway ──
//
// The one place page code reaches the backend. Paths are backend-relative
// (`/lodges/`); the base URL comes from the injected `FrontendConfig`.

use prostory_api::ApiClient;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::FrontendConfig;
use crate::error::FetchError;

/// Configured entry point for backend reads.
///
/// Cloning is cheap: the underlying HTTP client is reference-counted.
#[derive(Debug, Clone)]
pub struct Gateway {
    api: ApiClient,
}

impl Gateway {
    pub fn new(config: &FrontendConfig) -> Result<Self, FetchError> {
        let api = ApiClient::new(config.api_base.as_str(), &config.transport()).map_err(|e| {
            error!(error = %e, "failed to build API client");
            FetchError::from(e)
        })?;
        debug!(base = %api.base_url(), "gateway ready");
        Ok(Self { api })
    }

    pub fn from_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// GET `path` and return the decoded JSON body.
    ///
    /// Failures are logged with the endpoint before being normalized.
    pub async fn get(&self, path: &str) -> Result<Value, FetchError> {
        self.api.get_json(path).await.map_err(|e| {
            error!(endpoint = path, error = %e, "API error");
            FetchError::from(e)
        })
    }

    /// GET `path` and return the raw body (used for XML passthrough).
    pub async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        self.api.get_text(path).await.map_err(|e| {
            error!(endpoint = path, error = %e, "API error");
            FetchError::from(e)
        })
    }
}
