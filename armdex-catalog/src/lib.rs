//! Catalog query and presentation engine for the Windows ARM app directory.
//!
//! Loads the catalog document, builds lookup indices, evaluates search and
//! filter criteria, orders results featured-first, resolves single items by
//! slug, and synthesizes page metadata. Also hosts the collaborators that
//! consume the same catalog: sitemap generation and new-app submissions.

pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod metadata;
pub mod sitemap;
pub mod sort;
pub mod submission;
pub mod view;

pub use armdex_core::{Catalog, CatalogItem, Status};
pub use config::{ConfigSource, ConfigSources, DirectoryConfig, TrackerConfig, config_path};
pub use detail::{Resolution, resolve};
pub use error::{ConfigError, LoadError, LoadErrorKind, SubmitError};
pub use filter::{CompositionMode, Criteria, FilterControl, FilterState, apply};
pub use index::{CatalogIndex, SlugConflict};
pub use loader::{CatalogClient, CatalogSource, parse_catalog};
pub use metadata::{
    ItemMetadata, PageMetadata, StatusDescriptor, StructuredRecord, SynthesisOptions,
    category_page_metadata, descriptor, synthesize, synthesize_with,
};
pub use sitemap::SitemapBuilder;
pub use sort::sort_featured_first;
pub use submission::{IssueRequest, IssueTracker, Submission};
pub use view::{DetailView, FetchTicket, ListingView, LoadState, ViewSession};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
