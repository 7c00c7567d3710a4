//! CLI configuration: thin wrapper around `prostory_config`.
//!
//! Adds `GlobalOpts` flag overrides (`--api-base`, `--site-url`,
//! `--timeout`) on top of the layered config.

use std::path::PathBuf;

use prostory_core::FrontendConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use prostory_config::{Config, config_path};

/// Config file in effect: `--config` or the platform default.
pub fn active_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load the layered config and apply CLI flag overrides.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = prostory_config::load_from(&active_path(global))?;

    if let Some(api_base) = &global.api_base {
        cfg.api_base_url.clone_from(api_base);
    }
    if let Some(site_url) = &global.site_url {
        cfg.site_url.clone_from(site_url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }

    Ok(cfg)
}

/// Validated runtime config for the data layer.
pub fn frontend(cfg: &Config) -> Result<FrontendConfig, CliError> {
    Ok(cfg.to_frontend_config()?)
}
