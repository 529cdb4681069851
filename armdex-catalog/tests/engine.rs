//! End-to-end flows over a file-backed catalog.

use std::path::Path;
use std::time::Duration;

use armdex_catalog::{
    CatalogClient, CatalogIndex, CatalogSource, CompositionMode, DetailView, ListingView,
    LoadErrorKind, Resolution, Status, SynthesisOptions, ViewSession, resolve,
};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "apps": [
    {"id": "1", "slug": "zoom", "name": "Zoom", "category": "Comm",
     "status": "Available via Emulation", "featured": false},
    {"id": "2", "slug": "figma", "name": "Figma", "category": "Design",
     "status": "Available Natively", "featured": true},
    {"id": "3", "slug": "My App", "name": "My App", "category": "Web Browsers",
     "status": "Foo"}
  ]
}"#;

fn write_catalog(dir: &Path, content: &str) -> CatalogClient {
    let path = dir.join("apps.json");
    std::fs::write(&path, content).unwrap();
    CatalogClient::new(CatalogSource::File(path), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn listing_search_and_category_scenarios() {
    let tmp = TempDir::new().unwrap();
    let client = write_catalog(tmp.path(), DOCUMENT);
    let catalog = client.load().await.unwrap();

    let names = |items: Vec<&armdex_catalog::CatalogItem>| -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    };

    let listing = ListingView::default();
    assert_eq!(names(listing.results(&catalog)), ["Figma", "Zoom", "My App"]);

    let mut search = ListingView::default();
    search.set_search("zo");
    assert_eq!(names(search.results(&catalog)), ["Zoom"]);

    let design = ListingView::scoped("Design", CompositionMode::Conjunctive);
    assert_eq!(names(design.results(&catalog)), ["Figma"]);
}

#[tokio::test]
async fn detail_resolution_scenarios() {
    let tmp = TempDir::new().unwrap();
    let client = write_catalog(tmp.path(), DOCUMENT);
    let catalog = client.load().await.unwrap();
    let index = CatalogIndex::build(&catalog);

    let found = resolve(&index, "My%20App");
    assert_eq!(found.item().map(|i| i.id.as_str()), Some("3"));
    assert_eq!(resolve(&index, "nonexistent-slug"), Resolution::NotFound);

    let options = SynthesisOptions {
        year: 2024,
        ..SynthesisOptions::default()
    };
    let view = DetailView::resolve(&index, "my app", &options);
    let item = view.item().unwrap();
    assert_eq!(item.status, Status::Unknown);
    let meta = view.metadata.unwrap();
    assert!(meta.title.contains("Compatibility Unknown"));
    assert!(meta.description.chars().count() <= 160);
}

#[tokio::test]
async fn session_tracks_failure_separately_from_empty() {
    let tmp = TempDir::new().unwrap();

    let empty = write_catalog(tmp.path(), r#"{"apps": []}"#);
    let mut session = ViewSession::new();
    let state = session.refresh(&empty).await;
    assert!(state.catalog().is_some_and(|c| c.is_empty()));

    let broken = write_catalog(tmp.path(), r#"{"apps": "nope"}"#);
    let state = session.refresh(&broken).await;
    assert_eq!(state.error().map(|e| e.kind()), Some(LoadErrorKind::Schema));
    assert!(state.displayed_items().is_empty());
}

#[tokio::test]
async fn missing_file_is_network_kind() {
    let tmp = TempDir::new().unwrap();
    let client = CatalogClient::new(
        CatalogSource::File(tmp.path().join("absent.json")),
        Duration::from_secs(5),
    )
    .unwrap();
    let err = client.load().await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Network);
}
