use armdex_catalog::CatalogIndex;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{Context, colored_status, load_catalog};
use crate::error::CliError;

/// Show the categories and statuses a listing can be filtered by.
pub(crate) fn run_facets(ctx: &Context) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let index = CatalogIndex::build(&catalog);

    log::info!(
        "{} {}",
        "Categories".if_supports_color(Stdout, |t| t.bold()),
        format!("({})", index.categories().len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for category in index.categories() {
        let count = catalog.iter().filter(|i| &i.category == category).count();
        log::info!("  {} {}", category, format!("[{}]", count).if_supports_color(Stdout, |t| t.dimmed()));
    }

    log::info!("");
    log::info!("{}", "Statuses".if_supports_color(Stdout, |t| t.bold()));
    for status in index.statuses() {
        let count = catalog.iter().filter(|i| i.status == *status).count();
        log::info!(
            "  {} {}",
            colored_status(*status),
            format!("[{}]", count).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Report slugs shared by more than one item. Lookups keep the later item.
pub(crate) fn run_conflicts(ctx: &Context) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let index = CatalogIndex::build(&catalog);

    if index.conflicts().is_empty() {
        log::info!(
            "{} {} slugs are unique",
            "OK".if_supports_color(Stdout, |t| t.green()),
            index.slug_count(),
        );
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{} slug conflicts", index.conflicts().len())
            .if_supports_color(Stdout, |t| t.yellow()),
    );
    for conflict in index.conflicts() {
        log::info!(
            "  {} kept id {}, shadowed id {}",
            conflict.slug.if_supports_color(Stdout, |t| t.bold()),
            conflict.kept_id,
            conflict.shadowed_id,
        );
    }
    Ok(())
}
