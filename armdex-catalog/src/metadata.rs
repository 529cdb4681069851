//! Human-readable and machine-readable page metadata derived from one item.
//!
//! Everything here is a pure function of its inputs. The only clock read is
//! the current year in [`SynthesisOptions::default`]; pass explicit options
//! for reproducible output.

use chrono::Datelike;
use serde::Serialize;

use armdex_core::{CatalogItem, Status, percent_encode_component};

/// Maximum description length in characters, including [`ELLIPSIS`].
pub const DESCRIPTION_LIMIT: usize = 160;
/// Appended to a truncated description.
pub const ELLIPSIS: &str = "...";
pub const DEFAULT_SITE_NAME: &str = "Windows ARM Apps";

const PLATFORM_NAME: &str = "Windows ARM";
const OPERATING_SYSTEM: &str = "Windows 11 on ARM64";

/// Fixed per-status wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub status_label: &'static str,
    /// Continues a sentence that starts with the item name.
    pub detail_text: &'static str,
    pub compatibility_phrase: &'static str,
}

pub fn descriptor(status: Status) -> StatusDescriptor {
    match status {
        Status::AvailableNatively => StatusDescriptor {
            status_label: "Available Natively",
            detail_text: "runs natively on ARM64 processors for full performance and battery life.",
            compatibility_phrase: "native ARM64 support",
        },
        Status::AvailableViaEmulation => StatusDescriptor {
            status_label: "Available via Emulation",
            detail_text: "runs on Windows ARM through x64 emulation, which may reduce performance.",
            compatibility_phrase: "x64 emulation on ARM",
        },
        Status::NotAvailable => StatusDescriptor {
            status_label: "Not Available",
            detail_text: "is not currently available for Windows ARM devices.",
            compatibility_phrase: "no Windows ARM support",
        },
        Status::Unknown => StatusDescriptor {
            status_label: "Compatibility Unknown",
            detail_text: "has not yet been verified on Windows ARM devices.",
            compatibility_phrase: "Windows ARM compatibility",
        },
    }
}

/// Inputs to synthesis that do not come from the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub year: i32,
    pub site_name: String,
    /// When set, the structured record carries the item's canonical URL.
    pub site_url: Option<String>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            year: chrono::Local::now().year(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_url: None,
        }
    }
}

/// Title, description and keywords for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Page metadata for an item, plus its embedded structured record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub structured: StructuredRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

/// schema.org `SoftwareApplication` record.
///
/// Built from the same strings as [`ItemMetadata`] so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub keywords: String,
    pub operating_system: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feature_list: Vec<String>,
}

/// Synthesize metadata using the current year and default site name.
pub fn synthesize(item: &CatalogItem) -> ItemMetadata {
    synthesize_with(item, &SynthesisOptions::default())
}

pub fn synthesize_with(item: &CatalogItem, options: &SynthesisOptions) -> ItemMetadata {
    let desc = descriptor(item.status);
    let title = item_title(item, &desc, options);
    let description = item_description(item, &desc);
    let keywords = item_keywords(item, &desc);

    let structured = StructuredRecord {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: item.name.clone(),
        headline: title.clone(),
        description: description.clone(),
        keywords: keywords.join(", "),
        operating_system: OPERATING_SYSTEM,
        application_category: non_empty(&item.category),
        publisher: non_empty(&item.publisher).map(|name| Organization {
            kind: "Organization",
            name,
        }),
        url: options.site_url.as_ref().and_then(|site| {
            (!item.slug.is_empty()).then(|| {
                format!(
                    "{}/app/{}",
                    site.trim_end_matches('/'),
                    percent_encode_component(&item.slug)
                )
            })
        }),
        image: non_empty(&item.icon),
        download_url: item.direct_download_link.clone(),
        install_url: item.store_link.clone(),
        date_modified: item.last_updated.clone(),
        feature_list: item.highlights.clone(),
    };

    ItemMetadata {
        title,
        description,
        keywords,
        structured,
    }
}

fn item_title(item: &CatalogItem, desc: &StatusDescriptor, options: &SynthesisOptions) -> String {
    format!(
        "{} on {}: {} ({}) | {}",
        item.name, PLATFORM_NAME, desc.status_label, options.year, options.site_name
    )
}

fn item_description(item: &CatalogItem, desc: &StatusDescriptor) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "Is {} compatible with {}? {}.",
        item.name, PLATFORM_NAME, desc.status_label
    ));
    parts.push(format!("{} {}", item.name, desc.detail_text));

    if let Some(text) = item.description.as_deref().or(item.about.as_deref()) {
        parts.push(sentence(text));
    }

    match (item.publisher.trim(), item.category.trim()) {
        ("", "") => {}
        (publisher, "") => parts.push(format!("Published by {publisher}.")),
        ("", category) => parts.push(format!("Listed under {category}.")),
        (publisher, category) => {
            parts.push(format!("Published by {publisher} and listed under {category}."))
        }
    }

    if item.has_store() {
        parts.push("Available from the Microsoft Store.".to_string());
    }
    if item.has_download() {
        parts.push("Direct download available from the publisher.".to_string());
    }

    if let Some(first) = item.highlights.iter().find(|h| !h.trim().is_empty()) {
        parts.push(format!("Highlight: {}", sentence(first)));
    }

    truncate_description(&parts.join(" "))
}

fn item_keywords(item: &CatalogItem, desc: &StatusDescriptor) -> Vec<String> {
    let name = item.name.trim();
    let category = item.category.trim();
    let candidates = [
        name.to_string(),
        if name.is_empty() {
            String::new()
        } else {
            format!("{name} {PLATFORM_NAME}")
        },
        if name.is_empty() {
            String::new()
        } else {
            format!("{name} ARM64")
        },
        category.to_string(),
        item.publisher.trim().to_string(),
        desc.compatibility_phrase.to_string(),
        desc.status_label.to_string(),
        if category.is_empty() {
            String::new()
        } else {
            format!("{category} apps for {PLATFORM_NAME}")
        },
        PLATFORM_NAME.to_string(),
        "ARM64".to_string(),
    ];
    dedup_keywords(candidates)
}

/// Drop empty entries and case-insensitive repeats, keeping first occurrences.
fn dedup_keywords(candidates: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .collect()
}

/// Cut `text` so that it is at most [`DESCRIPTION_LIMIT`] characters long,
/// ellipsis included.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let keep = DESCRIPTION_LIMIT - ELLIPSIS.chars().count();
    let cut: String = text.chars().take(keep).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Page metadata for a category listing.
pub fn category_page_metadata(category: &str) -> PageMetadata {
    PageMetadata {
        title: format!("{category} Apps for {PLATFORM_NAME}"),
        description: format!(
            "Explore our curated collection of {} applications compatible with Windows ARM64 devices.",
            category.to_lowercase()
        ),
        keywords: dedup_keywords([
            PLATFORM_NAME.to_string(),
            "ARM64".to_string(),
            category.to_string(),
            "applications".to_string(),
            "directory".to_string(),
        ]),
    }
}

fn sentence(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
