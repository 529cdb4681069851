use serde_json::json;

use super::*;

#[test]
fn full_record_is_read() {
    let item = CatalogItem::from_value(&json!({
        "id": "42",
        "slug": "Visual-Studio-Code",
        "name": "Visual Studio Code",
        "publisher": "Microsoft",
        "category": "Developer Tools",
        "status": "Available Natively",
        "directDownloadLink": "https://code.visualstudio.com/download",
        "storeLink": null,
        "about": "Code editor.",
        "highlights": ["Native ARM64 build", "Extensions"],
        "icon": "https://example.com/vscode.png",
        "lastUpdated": "2025-01-15",
        "featured": true
    }));

    assert_eq!(item.id, "42");
    assert_eq!(item.normalized_slug(), "visual-studio-code");
    assert_eq!(item.status, Status::AvailableNatively);
    assert!(item.has_download());
    assert!(!item.has_store());
    assert_eq!(item.highlights.len(), 2);
    assert!(item.featured);
    assert_eq!(item.last_updated_display().as_deref(), Some("January 15, 2025"));
}

#[test]
fn malformed_record_degrades_instead_of_failing() {
    let item = CatalogItem::from_value(&json!({
        "id": 7,
        "name": "Odd",
        "status": "Foo",
        "highlights": "not a list",
        "featured": "yes",
        "storeLink": "",
        "lastUpdated": "whenever"
    }));

    assert_eq!(item.id, "7");
    assert_eq!(item.status, Status::Unknown);
    assert!(item.highlights.is_empty());
    assert!(!item.featured);
    assert!(item.store_link.is_none());
    assert_eq!(item.slug, "");
    assert_eq!(item.last_updated_display().as_deref(), Some("whenever"));
}

#[test]
fn non_object_record_is_empty_item() {
    let item = CatalogItem::from_value(&json!("just a string"));
    assert_eq!(item, CatalogItem::default());
    assert_eq!(item.status, Status::Unknown);
}

#[test]
fn icon_fallback() {
    let item = CatalogItem::default();
    assert_eq!(item.icon_or_fallback(), FALLBACK_ICON);
    let item = CatalogItem {
        icon: "https://example.com/a.png".to_string(),
        ..Default::default()
    };
    assert_eq!(item.icon_or_fallback(), "https://example.com/a.png");
}

#[test]
fn summary_prefers_description() {
    let item = CatalogItem {
        about: Some("about".to_string()),
        remarks: Some("remarks".to_string()),
        ..Default::default()
    };
    assert_eq!(item.summary(), Some("about"));
    let item = CatalogItem {
        description: Some("desc".to_string()),
        ..item
    };
    assert_eq!(item.summary(), Some("desc"));
}

#[test]
fn deserialize_goes_through_permissive_path() {
    let item: CatalogItem =
        serde_json::from_str(r#"{"name":"Zoom","status":"Available via Emulation"}"#).unwrap();
    assert_eq!(item.name, "Zoom");
    assert_eq!(item.status, Status::AvailableViaEmulation);
}

#[test]
fn serializes_camel_case() {
    let item = CatalogItem {
        name: "Figma".to_string(),
        store_link: Some("ms-store://figma".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["storeLink"], "ms-store://figma");
    assert_eq!(value["status"], "Unknown");
    assert!(value.get("directDownloadLink").is_none());
}

#[test]
fn normalized_slug_does_not_decode() {
    let item = CatalogItem {
        slug: "100%25-Free".to_string(),
        ..Default::default()
    };
    assert_eq!(item.normalized_slug(), "100%25-free");
}
