// ── sitemap.xml ──
//
// Either generated locally from a route list or proxied verbatim from the
// backend's `/sitemap.xml`.

use std::fmt::Write as _;

use prostory_api::Resource;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::sanitize_site_url;
use crate::error::FetchError;
use crate::gateway::Gateway;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Routes listed when nothing else is configured: the landing page only.
pub const DEFAULT_ROUTES: &[&str] = &[""];

/// Where the served sitemap comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SitemapSource {
    #[default]
    Generated,
    Backend,
}

/// Render a sitemap for `routes` under `site_url`.
///
/// The root route (`""`) gets priority 1.0, everything else 0.8.
pub fn generate<S: AsRef<str>>(site_url: &str, routes: &[S]) -> String {
    let base = sanitize_site_url(site_url);
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");

    for route in routes {
        let route = route.as_ref();
        let priority = if route.is_empty() { "1.0" } else { "0.8" };
        let loc = escape_xml(&format!("{base}{route}"));
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{loc}</loc>");
        let _ = writeln!(xml, "    <changefreq>weekly</changefreq>");
        let _ = writeln!(xml, "    <priority>{priority}</priority>");
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>");
    xml
}

/// Produce the sitemap from the chosen source.
pub async fn render<S: AsRef<str>>(
    source: SitemapSource,
    gateway: &Gateway,
    site_url: &str,
    routes: &[S],
) -> Result<String, FetchError> {
    match source {
        SitemapSource::Generated => Ok(generate(site_url, routes)),
        SitemapSource::Backend => gateway.get_text(&Resource::Sitemap.path()).await,
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn root_only() {
        insta::assert_snapshot!(generate("https://prostory.ru/", DEFAULT_ROUTES), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url>
            <loc>https://prostory.ru</loc>
            <changefreq>weekly</changefreq>
            <priority>1.0</priority>
          </url>
        </urlset>
        "#);
    }

    #[test]
    fn section_pages_get_lower_priority() {
        let xml = generate("https://prostory.ru§", &["", "/lodges", "/news"]);
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 1);
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 2);
        assert!(xml.contains("<loc>https://prostory.ru/lodges</loc>"));
        assert!(!xml.contains('§'));
    }

    #[test]
    fn locations_are_escaped() {
        let xml = generate("https://prostory.ru", &["/search?a=1&b=<2>"]);
        assert!(xml.contains("<loc>https://prostory.ru/search?a=1&amp;b=&lt;2&gt;</loc>"));
    }

    #[test]
    fn source_parses() {
        assert_eq!("backend".parse::<SitemapSource>().unwrap(), SitemapSource::Backend);
        assert_eq!(SitemapSource::default(), SitemapSource::Generated);
    }
}
