//! Shared fixtures for unit tests.

use armdex_core::{Catalog, CatalogItem, Status};

pub(crate) fn item(id: &str, name: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

pub(crate) fn with_status(mut item: CatalogItem, status: Status) -> CatalogItem {
    item.status = status;
    item
}

pub(crate) fn featured(mut item: CatalogItem) -> CatalogItem {
    item.featured = true;
    item
}

/// `[Zoom (Comm), Figma (Design, featured)]`.
pub(crate) fn zoom_figma() -> Catalog {
    Catalog::new(vec![
        item("1", "Zoom", "Comm"),
        featured(item("2", "Figma", "Design")),
    ])
}

pub(crate) fn names<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<&'a str> {
    items.into_iter().map(|i| i.name.as_str()).collect()
}
