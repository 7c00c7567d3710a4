// ── robots.txt ──

use std::fmt::Write as _;

use crate::config::sanitize_site_url;

/// Crawl rules for the public site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub sitemap: Option<String>,
}

impl RobotsPolicy {
    /// Open site, admin and API closed, pointing crawlers at the backend
    /// sitemap served under `/api/sitemap.xml`.
    pub fn for_site(site_url: &str) -> Self {
        let site = sanitize_site_url(site_url);
        Self {
            allow: vec!["/".into()],
            disallow: vec!["/admin/".into(), "/api/".into()],
            sitemap: Some(format!("{site}/api/sitemap.xml")),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("User-agent: *\n");
        for path in &self.allow {
            let _ = writeln!(out, "Allow: {path}");
        }
        for path in &self.disallow {
            let _ = writeln!(out, "Disallow: {path}");
        }
        if let Some(sitemap) = &self.sitemap {
            let _ = write!(out, "\nSitemap: {sitemap}\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        insta::assert_snapshot!(RobotsPolicy::for_site("https://prostory.ru/§").render(), @r"
        User-agent: *
        Allow: /
        Disallow: /admin/
        Disallow: /api/

        Sitemap: https://prostory.ru/api/sitemap.xml
        ");
    }

    #[test]
    fn without_sitemap() {
        let policy = RobotsPolicy {
            sitemap: None,
            ..RobotsPolicy::for_site("http://localhost:3000")
        };
        assert!(!policy.render().contains("Sitemap"));
    }
}
