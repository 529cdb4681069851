use armdex_catalog::{Catalog, CatalogItem, CompositionMode, ListingView};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{Context, colored_status, load_catalog, log_not_found};
use crate::cli_types::FilterArgs;
use crate::error::CliError;

/// Build a listing from command-line filters.
///
/// In legacy mode only the last control applied survives; controls are
/// applied as category, status, then search.
pub(crate) fn build_view(
    scope: Option<&str>,
    category: Option<String>,
    filters: &FilterArgs,
) -> ListingView {
    let mode = if filters.legacy_filters {
        CompositionMode::LastControlWins
    } else {
        CompositionMode::Conjunctive
    };
    let mut view = match scope {
        Some(name) => ListingView::scoped(name, mode),
        None => ListingView::new(mode),
    };
    if category.is_some() {
        view.set_category(category);
    }
    if filters.status.is_some() {
        view.set_status(filters.status);
    }
    if let Some(text) = &filters.search {
        view.set_search(text.clone());
    }
    view
}

pub(crate) fn run_list(
    ctx: &Context,
    category: Option<String>,
    filters: FilterArgs,
) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let view = build_view(None, category, &filters);
    render(&catalog, &view, &filters, "Windows ARM apps")
}

pub(crate) fn run_category(ctx: &Context, name: &str, filters: FilterArgs) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let view = build_view(Some(name), None, &filters);

    if view.scoped_items(&catalog).is_empty() && !filters.json {
        log_not_found("category", name);
        return Ok(());
    }

    let title = view.scope_title().unwrap_or_else(|| name.to_string());
    render(&catalog, &view, &filters, &title)
}

fn render(
    catalog: &Catalog,
    view: &ListingView,
    filters: &FilterArgs,
    title: &str,
) -> Result<(), CliError> {
    let results = view.results(catalog);

    if filters.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    log::info!(
        "{} {}",
        title.if_supports_color(Stdout, |t| t.bold()),
        format!("({} of {})", results.len(), view.scoped_items(catalog).len())
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    if results.is_empty() {
        log::info!("No apps match the current filters.");
        return Ok(());
    }

    for item in results {
        log_item_line(item);
    }
    Ok(())
}

fn log_item_line(item: &CatalogItem) {
    let star = if item.featured {
        format!(" {}", "*".if_supports_color(Stdout, |t| t.yellow()))
    } else {
        String::new()
    };
    log::info!(
        "  {}{} [{}] {}",
        item.name.if_supports_color(Stdout, |t| t.bold()),
        star,
        item.category.if_supports_color(Stdout, |t| t.cyan()),
        colored_status(item.status),
    );
    log::debug!("    slug: {}", item.slug);
}
