use thiserror::Error;

/// Top-level error type for the `prostory-api` crate.
///
/// Covers every failure mode of a single backend request: no response,
/// a non-2xx response, or a body that is not JSON. `prostory-core` maps
/// these into the render-facing `FetchError`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request path containing `.` or `..` segments, which would
    /// resolve outside the resource it names.
    #[error("Path escapes its resource: {path}")]
    InvalidPath { path: String },

    /// The `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx response. `message` is whatever the backend put in its
    /// `detail` / `message` / `error` field, if anything.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status of the failed response, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if no response was received at all.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => e.status().is_none(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}
