use std::borrow::Borrow;

use armdex_core::CatalogItem;

/// Order featured items first, keeping input order within each group.
///
/// Uses a stable sort, so applying it again is a no-op.
pub fn sort_featured_first<T: Borrow<CatalogItem>>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| !item.borrow().featured);
    items
}
