use armdex_core::{CatalogItem, normalize_slug};

use crate::index::CatalogIndex;

/// Outcome of resolving a slug route parameter.
///
/// `NotFound` is an ordinary outcome, not an error: callers render a
/// "not found" page with a way back to the listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a CatalogItem),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn item(self) -> Option<&'a CatalogItem> {
        match self {
            Self::Found(item) => Some(item),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Resolve a raw, possibly percent-encoded slug parameter.
///
/// The parameter is decoded and lower-cased, then looked up exactly; there
/// is no fuzzy or prefix matching.
pub fn resolve<'a>(index: &CatalogIndex<'a>, raw_slug: &str) -> Resolution<'a> {
    let slug = normalize_slug(raw_slug);
    if slug.is_empty() {
        return Resolution::NotFound;
    }
    match index.get(&slug) {
        Some(item) => Resolution::Found(item),
        None => {
            log::debug!("No catalog item for slug '{}'", slug);
            Resolution::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use armdex_core::Catalog;

    use super::*;
    use crate::test_support::item;

    fn catalog() -> Catalog {
        let mut spaced = item("1", "My App", "Tools");
        spaced.slug = "My App".to_string();
        Catalog::new(vec![spaced, item("2", "Figma", "Design")])
    }

    #[test]
    fn percent_encoded_and_case_insensitive() {
        let catalog = catalog();
        let index = CatalogIndex::build(&catalog);
        let found = resolve(&index, "My%20App").item().map(|i| i.id.as_str());
        assert_eq!(found, Some("1"));
        assert!(resolve(&index, "my%20APP").is_found());
        assert!(resolve(&index, "FIGMA").is_found());
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = catalog();
        let index = CatalogIndex::build(&catalog);
        assert_eq!(resolve(&index, "nonexistent-slug"), Resolution::NotFound);
    }

    #[test]
    fn no_partial_matching() {
        let catalog = catalog();
        let index = CatalogIndex::build(&catalog);
        assert_eq!(resolve(&index, "fig"), Resolution::NotFound);
        assert_eq!(resolve(&index, ""), Resolution::NotFound);
    }
}
