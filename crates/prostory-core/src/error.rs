use strum::Display;
use thiserror::Error;

/// Shown to visitors when the backend gives no usable explanation.
pub const DEFAULT_ERROR_MESSAGE: &str = "Ошибка при загрузке данных";

/// Status reported when no HTTP response was received.
const NO_RESPONSE_STATUS: u16 = 500;

/// What went wrong with a fetch, at the granularity pages care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FetchErrorKind {
    /// No response: connection refused, DNS, timeout, bad URL.
    Network,
    /// The backend answered with a non-2xx status.
    Http,
    /// The payload arrived but could not be decoded.
    Decode,
}

/// Normalized failure of one backend read.
///
/// Cheap to clone: a failed fetch is shared by every caller that awaited
/// the same cache key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (HTTP {status_code})")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub status_code: u16,
    pub message: String,
}

impl FetchError {
    /// Build an error, falling back to [`DEFAULT_ERROR_MESSAGE`] when
    /// `message` is absent or blank.
    pub fn new(kind: FetchErrorKind, status_code: u16, message: Option<String>) -> Self {
        Self {
            kind,
            status_code,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
        }
    }

    pub fn network() -> Self {
        Self::new(FetchErrorKind::Network, NO_RESPONSE_STATUS, None)
    }

    pub fn decode() -> Self {
        Self::new(FetchErrorKind::Decode, NO_RESPONSE_STATUS, None)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::Http && self.status_code == 404
    }

    pub fn is_network(&self) -> bool {
        self.kind == FetchErrorKind::Network
    }
}

impl From<prostory_api::Error> for FetchError {
    fn from(err: prostory_api::Error) -> Self {
        use prostory_api::Error as Api;

        match err {
            Api::Http { status, message } => Self::new(FetchErrorKind::Http, status, message),
            Api::Transport(ref e) => match e.status() {
                Some(status) => Self::new(FetchErrorKind::Http, status.as_u16(), None),
                None => Self::network(),
            },
            // No backend resource lives behind a dot segment.
            Api::InvalidPath { .. } => Self::new(FetchErrorKind::Http, 404, None),
            Api::InvalidUrl(_) | Api::ClientBuild(_) => Self::network(),
            Api::Deserialization { .. } => Self::decode(),
        }
    }
}
