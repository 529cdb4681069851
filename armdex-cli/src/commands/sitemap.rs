use std::path::PathBuf;

use armdex_catalog::SitemapBuilder;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{Context, load_catalog};
use crate::error::CliError;

pub(crate) fn run_sitemap(
    ctx: &Context,
    output: Option<PathBuf>,
    site_url: Option<String>,
) -> Result<(), CliError> {
    let catalog = load_catalog(ctx)?;
    let site_url = site_url.unwrap_or_else(|| ctx.config.site_url.clone());
    let builder = SitemapBuilder::new(&site_url);
    let xml = builder.render(&catalog);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &xml)?;
            log::info!(
                "Wrote {} URLs to {}",
                builder.urls(&catalog).len(),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => print!("{}", xml),
    }
    Ok(())
}
