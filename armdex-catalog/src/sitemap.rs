use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use armdex_core::{Catalog, category_route_segment, percent_encode_component};

/// Static pages listed in every sitemap, relative to the site root.
pub const STATIC_ROUTES: &[&str] = &["", "contribute", "finding-arm-apps"];

const CHANGE_FREQ: &str = "daily";
const PRIORITY: &str = "0.7";

/// Builds a sitemap from a catalog snapshot.
///
/// Item routes use the slug and category routes use
/// [`category_route_segment`], the same rules the category view accepts.
pub struct SitemapBuilder {
    site_url: String,
    static_routes: Vec<String>,
    lastmod: DateTime<Utc>,
}

impl SitemapBuilder {
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            static_routes: STATIC_ROUTES.iter().map(|r| r.to_string()).collect(),
            lastmod: Utc::now(),
        }
    }

    pub fn static_routes(mut self, routes: Vec<String>) -> Self {
        self.static_routes = routes;
        self
    }

    pub fn lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = lastmod;
        self
    }

    /// Absolute URLs in output order, duplicates removed.
    pub fn urls(&self, catalog: &Catalog) -> Vec<String> {
        let mut urls = Vec::new();

        for route in &self.static_routes {
            let route = route.trim_matches('/');
            if route.is_empty() {
                urls.push(self.site_url.clone());
            } else {
                urls.push(format!("{}/{}", self.site_url, route));
            }
        }

        for item in catalog {
            if item.slug.is_empty() {
                continue;
            }
            urls.push(format!(
                "{}/app/{}",
                self.site_url,
                percent_encode_component(&item.slug)
            ));
        }

        for item in catalog {
            if item.category.trim().is_empty() {
                continue;
            }
            urls.push(format!(
                "{}/category/{}",
                self.site_url,
                percent_encode_component(&category_route_segment(&item.category))
            ));
        }

        let mut seen = HashSet::new();
        urls.retain(|u| seen.insert(u.clone()));
        urls
    }

    /// Render the `urlset` document.
    pub fn render(&self, catalog: &Catalog) -> String {
        let lastmod = self.lastmod.to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        for url in self.urls(catalog) {
            xml.push_str("  <url>\n");
            write_tag(&mut xml, "loc", &url);
            write_tag(&mut xml, "lastmod", &lastmod);
            write_tag(&mut xml, "changefreq", CHANGE_FREQ);
            write_tag(&mut xml, "priority", PRIORITY);
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/sitemap_tests.rs"]
mod tests;
