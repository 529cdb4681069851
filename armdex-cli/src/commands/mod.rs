pub(crate) mod config;
pub(crate) mod facets;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod sitemap;
pub(crate) mod submit;

use armdex_catalog::{Catalog, CatalogClient, DirectoryConfig, LoadState, Status, ViewSession};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::spinner::LoadingSpinner;

/// Settings every command runs with.
pub(crate) struct Context {
    pub config: DirectoryConfig,
    pub quiet: bool,
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))
}

/// Fetch the catalog behind a spinner.
pub(crate) fn load_catalog(ctx: &Context) -> Result<Catalog, CliError> {
    let client = CatalogClient::from_config(&ctx.config)?;
    let rt = runtime()?;

    let spinner = LoadingSpinner::start(
        format!("Loading catalog from {}", client.source()),
        ctx.quiet,
    );
    let mut session = ViewSession::new();
    rt.block_on(session.refresh(&client));
    spinner.finish();

    match session.into_state() {
        LoadState::Loaded(catalog) => {
            log::debug!("Loaded {} items", catalog.len());
            Ok(catalog)
        }
        LoadState::Failed(e) => Err(e.into()),
        LoadState::Loading => Err(CliError::runtime("catalog fetch did not complete")),
    }
}

/// Message for a slug or category that matched nothing.
pub(crate) fn log_not_found(what: &str, value: &str) {
    log::info!(
        "{} {}",
        format!("No {} matches", what).if_supports_color(Stdout, |t| t.yellow()),
        format!("\"{}\"", value).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "Run {} to browse the full directory.",
        "armdex list".if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Status display name, coloured by availability.
pub(crate) fn colored_status(status: Status) -> String {
    let name = status.display_name();
    match status {
        Status::AvailableNatively => name.if_supports_color(Stdout, |t| t.green()).to_string(),
        Status::AvailableViaEmulation => {
            name.if_supports_color(Stdout, |t| t.yellow()).to_string()
        }
        Status::NotAvailable => name.if_supports_color(Stdout, |t| t.red()).to_string(),
        Status::Unknown => name.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
    }
}
