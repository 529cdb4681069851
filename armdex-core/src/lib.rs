//! Data model for the Windows ARM app directory.
//!
//! Defines the catalog item record, the closed compatibility [`Status`] set,
//! and the slug/route normalization rules shared by every consumer of the
//! catalog.

use serde::Serialize;

pub mod date;
pub mod item;
pub mod slug;
pub mod status;

pub use date::{display_last_updated, parse_last_updated};
pub use item::{CatalogItem, FALLBACK_ICON};
pub use slug::{
    category_matches_route, category_route_segment, normalize_slug, percent_decode,
    percent_encode_component,
};
pub use status::{Status, StatusParseError};

/// The full in-memory collection of items for one load cycle.
///
/// Order is the document order and is significant: it is the tie-breaker
/// for every presented list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }
}

impl From<Vec<CatalogItem>> for Catalog {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = CatalogItem;
    type IntoIter = std::vec::IntoIter<CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
