// ── Runtime configuration ──
//
// Built by the config crate (or by hand in tests) and handed to the
// gateway at construction. Nothing in this crate reads the environment.

use std::time::Duration;

use prostory_api::TransportConfig;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Everything the data layer needs to reach the backend and describe the site.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Backend API root, e.g. `https://prostory.ru/api`.
    pub api_base: Url,
    /// Public site root used for sitemap locations and robots.txt.
    pub site_url: Url,
    pub timeout: Duration,
    /// Overrides the default `prostory/<version>` user agent.
    pub user_agent: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            site_url: Url::parse(DEFAULT_SITE_URL).expect("default site URL is a valid URL"),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl FrontendConfig {
    pub fn new(api_base: Url, site_url: Url) -> Self {
        Self {
            api_base,
            site_url,
            ..Self::default()
        }
    }

    /// Site root without a trailing slash, ready to prefix routes with.
    pub fn site_root(&self) -> String {
        sanitize_site_url(self.site_url.as_str())
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig::default().with_timeout(self.timeout);
        if let Some(agent) = &self.user_agent {
            transport.user_agent.clone_from(agent);
        }
        transport
    }
}

/// Strip stray `§` characters, surrounding whitespace and trailing slashes
/// from a site URL.
pub fn sanitize_site_url(raw: &str) -> String {
    raw.replace('§', "").trim().trim_end_matches('/').to_owned()
}
