//! Per-view state: the load lifecycle, the listing filters, and the detail
//! lookup. Each view owns its own instances; nothing here is shared.

use armdex_core::{Catalog, CatalogItem, Status, category_matches_route, percent_decode};

use crate::detail::{Resolution, resolve};
use crate::error::LoadError;
use crate::filter::{self, CompositionMode, FilterControl, FilterState};
use crate::index::CatalogIndex;
use crate::loader::CatalogClient;
use crate::metadata::{ItemMetadata, SynthesisOptions, synthesize_with};
use crate::sort::sort_featured_first;

/// Where a view is in its load cycle.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Catalog),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Items to render. Loading and failed states both show nothing; use
    /// [`LoadState::is_loading`] and [`LoadState::error`] to tell them apart.
    pub fn displayed_items(&self) -> &[CatalogItem] {
        match self {
            Self::Loaded(catalog) => catalog.items(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Identifies one fetch started by a [`ViewSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Owns a view's catalog and guards it against out-of-order responses.
///
/// Every fetch takes a ticket; only the response for the newest ticket is
/// applied, so a slow response for a superseded route never overwrites
/// fresher state.
#[derive(Debug, Default)]
pub struct ViewSession {
    generation: u64,
    state: LoadState,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch. Any fetch still in flight becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns false (and drops the result) when the
    /// ticket has been superseded.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Catalog, LoadError>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Discarding stale catalog response (generation {}, current {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(catalog) => LoadState::Loaded(catalog),
            Err(e) => {
                log::error!("Error fetching catalog: {}", e);
                LoadState::Failed(e)
            }
        };
        true
    }

    /// Fetch with `client` and apply the result.
    pub async fn refresh(&mut self, client: &CatalogClient) -> &LoadState {
        let ticket = self.begin_fetch();
        let result = client.load().await;
        self.complete(ticket, result);
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn into_state(self) -> LoadState {
        self.state
    }
}

/// A listing page: the full catalog, or one category when scoped.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    /// Raw category route parameter, matched case-insensitively after decoding.
    scope: Option<String>,
    filters: FilterState,
}

impl ListingView {
    pub fn new(mode: CompositionMode) -> Self {
        Self {
            scope: None,
            filters: FilterState::new(mode),
        }
    }

    /// A category page. The scope always applies on top of the filters.
    pub fn scoped(category_param: impl Into<String>, mode: CompositionMode) -> Self {
        Self {
            scope: Some(category_param.into()),
            filters: FilterState::new(mode),
        }
    }

    /// Decoded category name for a scoped view.
    pub fn scope_title(&self) -> Option<String> {
        self.scope.as_deref().map(percent_decode)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.update(FilterControl::Search(text.into()));
    }

    /// Ignored on scoped views, whose category is fixed.
    pub fn set_category(&mut self, category: Option<String>) {
        if self.scope.is_some() {
            log::debug!("Category filter ignored on a category-scoped view");
            return;
        }
        self.filters.update(FilterControl::Category(category));
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.filters.update(FilterControl::Status(status));
    }

    fn in_scope(&self, item: &CatalogItem) -> bool {
        self.scope
            .as_deref()
            .is_none_or(|param| category_matches_route(&item.category, param))
    }

    /// Items in scope, before any filter control applies.
    pub fn scoped_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
        catalog.iter().filter(|item| self.in_scope(item)).collect()
    }

    /// Distinct statuses among in-scope items, in first-occurrence order.
    pub fn available_statuses(&self, catalog: &Catalog) -> Vec<Status> {
        let mut statuses = Vec::new();
        for item in self.scoped_items(catalog) {
            if !statuses.contains(&item.status) {
                statuses.push(item.status);
            }
        }
        statuses
    }

    /// The list to present: scope, then effective filters, then
    /// featured-first ordering.
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
        let matched = filter::apply(self.scoped_items(catalog), &self.filters.effective());
        sort_featured_first(matched)
    }
}

/// A single-item page.
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    pub resolution: Resolution<'a>,
    pub metadata: Option<ItemMetadata>,
}

impl<'a> DetailView<'a> {
    pub fn resolve(
        index: &CatalogIndex<'a>,
        raw_slug: &str,
        options: &SynthesisOptions,
    ) -> Self {
        let resolution = resolve(index, raw_slug);
        let metadata = resolution.item().map(|item| synthesize_with(item, options));
        Self {
            resolution,
            metadata,
        }
    }

    pub fn item(&self) -> Option<&'a CatalogItem> {
        self.resolution.item()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
