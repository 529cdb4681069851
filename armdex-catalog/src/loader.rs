use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use armdex_core::{Catalog, CatalogItem};

use crate::config::DirectoryConfig;
use crate::error::LoadError;

/// Name of the top-level array field holding the item records.
pub const ITEMS_FIELD: &str = "apps";

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An `http://` or `https://` URL.
    Remote(String),
    /// A local JSON file (`file://` URLs and bare paths).
    File(PathBuf),
}

impl CatalogSource {
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(trimmed.to_string())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and decodes the catalog document.
///
/// Each call to [`CatalogClient::load`] produces a fresh, complete
/// [`Catalog`]; there is no caching and no incremental update.
pub struct CatalogClient {
    http: reqwest::Client,
    source: CatalogSource,
}

impl CatalogClient {
    pub fn new(source: CatalogSource, timeout: Duration) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("armdex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, source })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self, LoadError> {
        Self::new(CatalogSource::parse(&config.data_url), config.timeout)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Fetch the document and decode it into a [`Catalog`].
    pub async fn load(&self) -> Result<Catalog, LoadError> {
        log::debug!("Fetching catalog from {}", self.source);

        let bytes = match &self.source {
            CatalogSource::Remote(url) => self.fetch_remote(url).await?,
            CatalogSource::File(path) => tokio::fs::read(path).await?,
        };

        let catalog = parse_catalog(&bytes)?;
        log::debug!("Loaded {} catalog items", catalog.len());
        Ok(catalog)
    }

    /// Like [`CatalogClient::load`], but a failure is logged and shows up as
    /// an empty catalog.
    pub async fn load_or_empty(&self) -> Catalog {
        match self.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Error fetching catalog from {}: {}", self.source, e);
                Catalog::default()
            }
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Decode a catalog document.
///
/// Only the top-level shape is validated: an object whose `apps` field is an
/// array. Individual records are never rejected; see
/// [`CatalogItem::from_value`].
pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog, LoadError> {
    let doc: Value = serde_json::from_slice(bytes)?;

    let Some(obj) = doc.as_object() else {
        return Err(LoadError::schema("top-level value is not an object"));
    };
    let Some(entries) = obj.get(ITEMS_FIELD) else {
        return Err(LoadError::schema(format!(
            "\"{ITEMS_FIELD}\" property is missing"
        )));
    };
    let Some(entries) = entries.as_array() else {
        return Err(LoadError::schema(format!(
            "\"{ITEMS_FIELD}\" property is not an array"
        )));
    };

    Ok(entries.iter().map(CatalogItem::from_value).collect())
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
