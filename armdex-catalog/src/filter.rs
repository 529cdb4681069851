//! Search and filter predicates over catalog items.

use armdex_core::{CatalogItem, Status};

/// The full set of active filter values. `None` or an empty string means
/// "no filter" for that predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub text: Option<String>,
    pub category: Option<String>,
    pub status: Option<Status>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no predicate would reject anything.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty)
            && self.category.as_deref().is_none_or(str::is_empty)
            && self.status.is_none()
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.text.as_deref().is_none_or(|q| matches_text(item, q))
            && self
                .category
                .as_deref()
                .is_none_or(|c| matches_category(item, c))
            && self.status.is_none_or(|s| matches_status(item, s))
    }
}

/// Case-insensitive substring match against name or category.
pub fn matches_text(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.name.to_lowercase().contains(&query) || item.category.to_lowercase().contains(&query)
}

/// Exact, case-sensitive category equality.
pub fn matches_category(item: &CatalogItem, category: &str) -> bool {
    category.is_empty() || item.category == category
}

pub fn matches_status(item: &CatalogItem, status: Status) -> bool {
    item.status == status
}

/// Every item matching `criteria`, in input order. No pagination.
pub fn apply<'a, I>(items: I, criteria: &Criteria) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .filter(|item| criteria.matches(item))
        .collect()
}

/// One user-facing filter control and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterControl {
    Search(String),
    Category(Option<String>),
    Status(Option<Status>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlKind {
    Search,
    Category,
    Status,
}

/// How successive control changes combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompositionMode {
    /// All active controls narrow the result together.
    #[default]
    Conjunctive,
    /// Only the most recently changed control applies; earlier ones are
    /// ignored until touched again. Matches the legacy site.
    LastControlWins,
}

/// Canonical filter state for one view: a single [`Criteria`] record plus
/// the composition policy used to derive the effective criteria.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    criteria: Criteria,
    last: Option<ControlKind>,
    mode: CompositionMode,
}

impl FilterState {
    pub fn new(mode: CompositionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    pub fn update(&mut self, control: FilterControl) {
        let kind = match control {
            FilterControl::Search(text) => {
                self.criteria.text = (!text.is_empty()).then_some(text);
                ControlKind::Search
            }
            FilterControl::Category(category) => {
                self.criteria.category = category.filter(|c| !c.is_empty());
                ControlKind::Category
            }
            FilterControl::Status(status) => {
                self.criteria.status = status;
                ControlKind::Status
            }
        };
        self.last = Some(kind);
    }

    /// Every value the user has set, regardless of composition mode.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The criteria that actually apply under the composition mode.
    pub fn effective(&self) -> Criteria {
        match self.mode {
            CompositionMode::Conjunctive => self.criteria.clone(),
            CompositionMode::LastControlWins => match self.last {
                None => Criteria::default(),
                Some(ControlKind::Search) => Criteria {
                    text: self.criteria.text.clone(),
                    ..Criteria::default()
                },
                Some(ControlKind::Category) => Criteria {
                    category: self.criteria.category.clone(),
                    ..Criteria::default()
                },
                Some(ControlKind::Status) => Criteria {
                    status: self.criteria.status,
                    ..Criteria::default()
                },
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
