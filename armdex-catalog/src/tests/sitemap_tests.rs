use armdex_core::Catalog;
use chrono::TimeZone;

use super::*;
use crate::test_support::item;

fn catalog() -> Catalog {
    let mut spaced = item("3", "My App", "Web Browsers");
    spaced.slug = "My App".to_string();
    Catalog::new(vec![
        item("1", "Zoom", "Comm"),
        item("2", "Slack", "Comm"),
        spaced,
    ])
}

#[test]
fn urls_cover_static_items_and_categories() {
    let builder = SitemapBuilder::new("https://windowsarm.org/");
    let urls = builder.urls(&catalog());
    assert_eq!(
        urls,
        [
            "https://windowsarm.org",
            "https://windowsarm.org/contribute",
            "https://windowsarm.org/finding-arm-apps",
            "https://windowsarm.org/app/zoom",
            "https://windowsarm.org/app/slack",
            "https://windowsarm.org/app/My%20App",
            "https://windowsarm.org/category/comm",
            "https://windowsarm.org/category/web-browsers",
        ]
    );
}

#[test]
fn duplicates_are_removed() {
    let builder =
        SitemapBuilder::new("https://a.example").static_routes(vec!["/app/zoom".to_string()]);
    let urls = builder.urls(&catalog());
    let zoom = urls.iter().filter(|u| u.ends_with("/app/zoom")).count();
    assert_eq!(zoom, 1);
}

#[test]
fn render_emits_one_entry_per_url() {
    let lastmod = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let builder = SitemapBuilder::new("https://a.example").lastmod(lastmod);
    let xml = builder.render(&catalog());

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(xml.matches("<url>").count(), 8);
    assert!(xml.contains("<lastmod>2025-03-01T12:00:00.000Z</lastmod>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
    assert!(xml.contains("<priority>0.7</priority>"));
}

#[test]
fn item_links_resolve_back_through_the_index() {
    use crate::detail::resolve;
    use crate::index::CatalogIndex;

    let catalog = catalog();
    let index = CatalogIndex::build(&catalog);
    for url in SitemapBuilder::new("https://a.example").urls(&catalog) {
        if let Some(slug) = url.strip_prefix("https://a.example/app/") {
            assert!(resolve(&index, slug).is_found(), "{url} did not resolve");
        }
    }
}

#[test]
fn escapes_markup() {
    assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
}

#[test]
fn percent_slug_link_resolves_to_its_item() {
    use crate::detail::resolve;
    use crate::index::CatalogIndex;

    let mut free = item("7", "Free Tool", "Tools");
    free.slug = "100%25-free".to_string();
    let catalog = Catalog::new(vec![free]);
    let index = CatalogIndex::build(&catalog);

    let urls = SitemapBuilder::new("https://a.example").urls(&catalog);
    let link = urls
        .iter()
        .find_map(|u| u.strip_prefix("https://a.example/app/"))
        .unwrap();
    assert_eq!(link, "100%2525-free");
    assert_eq!(resolve(&index, link).item().map(|i| i.id.as_str()), Some("7"));
}
