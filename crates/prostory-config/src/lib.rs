//! Configuration for the prostory tools.
//!
//! Figment layering, lowest priority first: built-in defaults, the TOML
//! file, the deployment environment (`API_BASE_URL`, `SITE_URL`,
//! `API_SECRET`, `NODE_ENV`, `PORT`), then `PROSTORY_`-prefixed overrides
//! with `__` for nesting. The result converts into
//! `prostory_core::FrontendConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use prostory_core::config::{DEFAULT_API_BASE, DEFAULT_SITE_URL};
use prostory_core::sitemap::DEFAULT_ROUTES;
use prostory_core::{FrontendConfig, SitemapSource, sanitize_site_url};

/// Unprefixed variables read from the deployment environment.
pub const DEPLOYMENT_ENV: &[&str] = &["API_BASE_URL", "SITE_URL", "API_SECRET", "NODE_ENV", "PORT"];

/// Prefix for overrides of any setting, e.g. `PROSTORY_SITE__NAME`.
pub const ENV_PREFIX: &str = "PROSTORY_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Backend API root.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Public site root.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Server-side secret. Never serialized, never sent to the backend.
    #[serde(default, skip_serializing, deserialize_with = "secret_from_scalar")]
    pub api_secret: Option<SecretString>,

    #[serde(default = "default_node_env")]
    pub node_env: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub site: SiteMeta,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            site_url: default_site_url(),
            api_secret: None,
            node_env: default_node_env(),
            port: default_port(),
            timeout: default_timeout(),
            user_agent: None,
            site: SiteMeta::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

/// Site identity used in page metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteMeta {
    #[serde(default = "default_site_name")]
    pub name: String,

    #[serde(default = "default_site_description")]
    pub description: String,

    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            description: default_site_description(),
            locale: default_locale(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SitemapConfig {
    /// Routes listed in the generated sitemap, relative to the site root.
    #[serde(default = "default_routes")]
    pub routes: Vec<String>,

    /// `generated` or `backend`.
    #[serde(default)]
    pub source: SitemapSource,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            source: SitemapSource::default(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.into()
}
fn default_site_url() -> String {
    DEFAULT_SITE_URL.into()
}
fn default_node_env() -> String {
    "development".into()
}
fn default_port() -> u16 {
    3000
}
fn default_timeout() -> u64 {
    30
}
fn default_site_name() -> String {
    "Строгановские Просторы".into()
}
fn default_site_description() -> String {
    "Загородный комплекс для отдыха на природе".into()
}
fn default_locale() -> String {
    "ru".into()
}
fn default_routes() -> Vec<String> {
    DEFAULT_ROUTES.iter().map(|r| (*r).to_owned()).collect()
}

/// Accept the secret as a string or a bare number (environment values
/// like `API_SECRET=12345` arrive as integers).
fn secret_from_scalar<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| match s {
            Scalar::Text(t) => t,
            Scalar::Signed(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
        })
        .filter(|s| !s.is_empty())
        .map(SecretString::from))
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.node_env.eq_ignore_ascii_case("production")
    }

    pub fn has_api_secret(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Validate URLs and build the runtime config.
    pub fn to_frontend_config(&self) -> Result<FrontendConfig, ConfigError> {
        let api_base = parse_url("api_base_url", self.api_base_url.trim())?;
        let site_url = parse_url("site_url", &sanitize_site_url(&self.site_url))?;

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        Ok(FrontendConfig {
            api_base,
            site_url,
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        })
    }
}

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("{e}: {raw}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected http or https, got '{other}'"),
        }),
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("ru", "prostory", "prostory").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("prostory");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// The layered figment for a given config file.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::raw().only(DEPLOYMENT_ENV))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load from the canonical config path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load from an explicit config file + environment. A missing file is
/// not an error.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
///
/// The API secret is never written.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
