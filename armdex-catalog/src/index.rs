//! Lookup structures derived from one [`Catalog`] snapshot.

use std::collections::{HashMap, HashSet};

use armdex_core::{Catalog, CatalogItem, Status};

/// Two items whose slugs collide under case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConflict {
    /// The normalized (lower-cased) slug.
    pub slug: String,
    /// Id of the item the index resolves to (the later one).
    pub kept_id: String,
    /// Id of the item that can no longer be reached by slug.
    pub shadowed_id: String,
}

/// Slug, category and status indices over a borrowed catalog.
///
/// Always built whole from a catalog; rebuild it when the catalog is replaced.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex<'a> {
    by_slug: HashMap<String, &'a CatalogItem>,
    categories: Vec<String>,
    statuses: Vec<Status>,
    conflicts: Vec<SlugConflict>,
}

impl<'a> CatalogIndex<'a> {
    /// Build all indices in one pass.
    ///
    /// Duplicate slugs resolve to the item encountered last. Every such
    /// collision is recorded in [`CatalogIndex::conflicts`] and logged.
    /// Items without a slug are not reachable by slug.
    pub fn build(catalog: &'a Catalog) -> Self {
        let mut by_slug: HashMap<String, &'a CatalogItem> = HashMap::new();
        let mut categories = Vec::new();
        let mut seen_categories = HashSet::new();
        let mut statuses = Vec::new();
        let mut conflicts = Vec::new();

        for item in catalog {
            let slug = item.normalized_slug();
            if slug.is_empty() {
                log::debug!("Item '{}' ({}) has no slug; not indexed", item.name, item.id);
            } else if let Some(previous) = by_slug.insert(slug.clone(), item) {
                log::warn!(
                    "Duplicate slug '{}': item {} shadows item {}",
                    slug,
                    item.id,
                    previous.id
                );
                conflicts.push(SlugConflict {
                    slug,
                    kept_id: item.id.clone(),
                    shadowed_id: previous.id.clone(),
                });
            }

            if !item.category.is_empty() && seen_categories.insert(item.category.as_str()) {
                categories.push(item.category.clone());
            }

            if !statuses.contains(&item.status) {
                statuses.push(item.status);
            }
        }

        Self {
            by_slug,
            categories,
            statuses,
            conflicts,
        }
    }

    /// Look up an already-normalized slug.
    pub fn get(&self, normalized_slug: &str) -> Option<&'a CatalogItem> {
        self.by_slug.get(normalized_slug).copied()
    }

    /// Distinct categories in order of first occurrence.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct statuses in order of first occurrence.
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Slug collisions found while building.
    pub fn conflicts(&self) -> &[SlugConflict] {
        &self.conflicts
    }

    /// Number of reachable slugs.
    pub fn slug_count(&self) -> usize {
        self.by_slug.len()
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
