//! CLI error types with miette diagnostics.
//!
//! Maps `FetchError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use prostory_config::ConfigError;
use prostory_core::{FetchError, FetchErrorKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the backend at {url}")]
    #[diagnostic(
        code(prostory::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Set it with --api-base or API_BASE_URL."
        )
    )]
    ConnectionFailed { url: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(prostory::not_found),
        help("Run: prostory {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Backend error (HTTP {status}): {message}")]
    #[diagnostic(code(prostory::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response shape from {key}")]
    #[diagnostic(
        code(prostory::decode),
        help("The backend answered with data this version does not understand. Run with -vv for details.")
    )]
    Decode { key: String },

    // ── Validation / Config ──────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(prostory::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(prostory::config),
        help("Inspect the effective settings with: prostory config show")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(prostory::serialize))]
    Serialize(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            Self::ApiError { .. } | Self::Decode { .. } | Self::Io(_) | Self::Serialize(_) => {
                exit_code::GENERAL
            }
        }
    }

    /// Translate a failed fetch, naming the resource for not-found help.
    pub fn from_fetch(
        err: FetchError,
        key: &str,
        api_base: &str,
        resource_type: &str,
        list_command: &str,
    ) -> Self {
        match err.kind {
            FetchErrorKind::Network => Self::ConnectionFailed {
                url: api_base.to_owned(),
            },
            FetchErrorKind::Decode => Self::Decode { key: key.to_owned() },
            FetchErrorKind::Http if err.is_not_found() => Self::NotFound {
                resource_type: resource_type.to_owned(),
                identifier: key.to_owned(),
                list_command: list_command.to_owned(),
            },
            FetchErrorKind::Http => Self::ApiError {
                status: err.status_code,
                message: err.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let not_found = CliError::from_fetch(
            FetchError::new(FetchErrorKind::Http, 404, None),
            "lodge-9",
            "http://localhost:8000/api",
            "lodge",
            "lodges list",
        );
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let offline = CliError::from_fetch(
            FetchError::network(),
            "news",
            "http://localhost:8000/api",
            "news",
            "news list",
        );
        assert_eq!(offline.exit_code(), exit_code::CONNECTION);
        assert!(offline.to_string().contains("http://localhost:8000/api"));

        let server = CliError::from_fetch(
            FetchError::new(FetchErrorKind::Http, 500, None),
            "hero",
            "http://localhost:8000/api",
            "hero",
            "hero",
        );
        assert_eq!(server.exit_code(), exit_code::GENERAL);

        let usage = CliError::Validation {
            field: "value".into(),
            reason: "empty".into(),
        };
        assert_eq!(usage.exit_code(), exit_code::USAGE);
    }
}
