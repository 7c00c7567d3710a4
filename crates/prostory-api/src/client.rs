// Backend HTTP client
//
// Wraps `reqwest::Client` with base-URL concatenation and error-body
// parsing. Endpoints are plain GETs; the response shape contract lives in
// `collection` and the typed views in `prostory-core`.

use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

// ── Error response shape from the backend ────────────────────────────

/// DRF puts human-readable errors in `detail`; hand-written views use
/// `message` or `error`.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.detail
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// `.`, `..` and their percent-encoded spellings, which URL parsing
/// resolves away.
fn is_dot_segment(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase().replace("%2e", ".");
    lowered == "." || lowered == ".."
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the backend REST API.
///
/// `base_url` is the API root (e.g. `http://localhost:8000/api`); resource
/// paths such as `/lodges/?type=house` are appended verbatim.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse and strip the trailing slash so `{base}{path}` never doubles it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw.trim())?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&path);
        Ok(url)
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Concatenate a backend-relative path onto the base URL.
    ///
    /// `path` should start with `/` and may carry a query string. Dot
    /// segments are rejected rather than resolved.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        let path_only = path.split(['?', '#']).next().unwrap_or_default();
        if path_only.split('/').any(is_dot_segment) {
            return Err(Error::InvalidPath {
                path: path.to_owned(),
            });
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let full = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Ok(Url::parse(&full)?)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// GET a path and parse the body as JSON.
    ///
    /// An empty 2xx body is reported as `Value::Null`, which the
    /// normalizer turns into an empty collection.
    pub async fn get_json(&self, path: &str) -> Result<Value, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// GET a path and return the raw body (XML, plain text).
    pub async fn get_text(&self, path: &str) -> Result<String, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }
        Ok(resp.text().await?)
    }

    // ── Response handling ────────────────────────────────────────────

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(ErrorResponse::into_message);

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}
