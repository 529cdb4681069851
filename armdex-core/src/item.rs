//! The catalog item record and its permissive construction from raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::date::display_last_updated;
use crate::status::Status;

/// Image substituted by consumers when an item's icon is missing or fails to load.
pub const FALLBACK_ICON: &str = "/defaultappicon.jpg";

/// One software entry and its ARM compatibility metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub publisher: String,
    pub category: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_download_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short free-text note shown on listing cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub highlights: Vec<String>,
    pub icon: String,
    /// Raw timestamp string as found in the document; never used for ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub featured: bool,
}

impl CatalogItem {
    /// Build an item from one raw catalog record.
    ///
    /// Never fails. Missing or mistyped fields fall back to empty values,
    /// numbers are stringified, empty link strings count as absent, and the
    /// status is normalized onto the closed [`Status`] set.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let text = |key: &str| -> Option<String> {
            match obj.get(key)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            }
        };
        let non_empty = |key: &str| text(key).filter(|s| !s.trim().is_empty());

        let highlights = match obj.get("highlights") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|h| h.as_str())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id: text("id").unwrap_or_default(),
            slug: text("slug").unwrap_or_default(),
            name: text("name").unwrap_or_default(),
            publisher: text("publisher").unwrap_or_default(),
            category: text("category").unwrap_or_default(),
            status: Status::normalize(obj.get("status").and_then(Value::as_str)),
            direct_download_link: non_empty("directDownloadLink"),
            store_link: non_empty("storeLink"),
            about: non_empty("about"),
            description: non_empty("description"),
            remarks: non_empty("remarks"),
            highlights,
            icon: text("icon").unwrap_or_default(),
            last_updated: non_empty("lastUpdated"),
            featured: obj.get("featured").and_then(Value::as_bool).unwrap_or(false),
        }
    }

    /// Lower-cased slug used as the lookup key. The stored slug is never
    /// percent-decoded; only route parameters are.
    pub fn normalized_slug(&self) -> String {
        self.slug.to_lowercase()
    }

    /// The icon URL, or [`FALLBACK_ICON`] when none is set.
    pub fn icon_or_fallback(&self) -> &str {
        if self.icon.trim().is_empty() {
            FALLBACK_ICON
        } else {
            &self.icon
        }
    }

    /// Longest available free text: description, then about, then remarks.
    pub fn summary(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.about.as_deref())
            .or(self.remarks.as_deref())
    }

    pub fn has_download(&self) -> bool {
        self.direct_download_link.is_some()
    }

    pub fn has_store(&self) -> bool {
        self.store_link.is_some()
    }

    /// `lastUpdated` formatted for display, if present.
    pub fn last_updated_display(&self) -> Option<String> {
        self.last_updated.as_deref().map(display_last_updated)
    }
}

impl<'de> Deserialize<'de> for CatalogItem {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
