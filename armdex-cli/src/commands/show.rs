use armdex_catalog::{CatalogIndex, CatalogItem, DetailView, ItemMetadata, SynthesisOptions};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{Context, colored_status, load_catalog, log_not_found};
use crate::error::CliError;

pub(crate) fn run_show(ctx: &Context, slug: &str, meta: bool, json: bool) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let index = CatalogIndex::build(&catalog);
    let options = SynthesisOptions {
        site_url: Some(ctx.config.site_url.clone()),
        ..SynthesisOptions::default()
    };
    let view = DetailView::resolve(&index, slug, &options);

    let Some(item) = view.item() else {
        if json {
            println!("null");
        } else {
            log_not_found("app", slug);
        }
        return Ok(());
    };

    if json {
        let mut value = serde_json::to_value(item)?;
        if let Some(metadata) = view.metadata.as_ref().filter(|_| meta) {
            let mut wrapped = serde_json::Map::new();
            wrapped.insert("item".to_string(), value);
            wrapped.insert("metadata".to_string(), serde_json::to_value(metadata)?);
            value = serde_json::Value::Object(wrapped);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    log_item(item);
    if let Some(metadata) = view.metadata.as_ref().filter(|_| meta) {
        log_metadata(metadata)?;
    }
    Ok(())
}

fn log_field(label: &str, value: &str) {
    log::info!(
        "  {} {}",
        format!("{}:", label).if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
}

fn log_item(item: &CatalogItem) {
    log::info!("{}", item.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    log_field("Status", &colored_status(item.status));
    if !item.publisher.is_empty() {
        log_field("Publisher", &item.publisher);
    }
    if !item.category.is_empty() {
        log_field("Category", &item.category);
    }
    if let Some(updated) = item.last_updated_display() {
        log_field("Last updated", &updated);
    }
    if let Some(link) = &item.store_link {
        log_field("Store", link);
    }
    if let Some(link) = &item.direct_download_link {
        log_field("Download", link);
    }
    log_field("Icon", item.icon_or_fallback());

    if let Some(summary) = item.summary() {
        log::info!("");
        log::info!("  {}", summary);
    }
    if !item.highlights.is_empty() {
        log::info!("");
        log::info!("  {}", "Highlights".if_supports_color(Stdout, |t| t.bold()));
        for highlight in &item.highlights {
            log::info!("    - {}", highlight);
        }
    }
}

fn log_metadata(metadata: &ItemMetadata) -> Result<(), CliError> {
    log::info!("");
    log::info!("{}", "Page metadata".if_supports_color(Stdout, |t| t.bold()));
    log_field("Title", &metadata.title);
    log_field("Description", &metadata.description);
    log_field("Keywords", &metadata.keywords.join(", "));
    log::info!("");
    log::info!("{}", serde_json::to_string_pretty(&metadata.structured)?);
    Ok(())
}
