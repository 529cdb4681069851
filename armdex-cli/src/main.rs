//! armdex CLI
//!
//! Command-line interface for the Windows ARM app compatibility directory.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;
use log::LevelFilter;

use armdex_catalog::DirectoryConfig;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Context;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    let level = if cli.command.emits_json() && !cli.verbose {
        LevelFilter::Error
    } else {
        logging::level_for(cli.quiet, cli.verbose)
    };
    if let Err(e) = logging::init(level, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = DirectoryConfig::load()?.with_overrides(cli.data_url.clone(), None);
    let ctx = Context {
        config,
        quiet: cli.quiet || cli.command.emits_json(),
    };

    match cli.command {
        Commands::List { category, filters } => {
            commands::list::run_list(&ctx, category, filters)
        }
        Commands::Category { name, filters } => {
            commands::list::run_category(&ctx, &name, filters)
        }
        Commands::Show { slug, meta, json } => commands::show::run_show(&ctx, &slug, meta, json),
        Commands::Facets => commands::facets::run_facets(&ctx),
        Commands::Conflicts => commands::facets::run_conflicts(&ctx),
        Commands::Sitemap { output, site_url } => {
            commands::sitemap::run_sitemap(&ctx, output, site_url)
        }
        Commands::Submit { form, dry_run } => commands::submit::run_submit(&ctx, form, dry_run),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&ctx, cli.data_url.as_deref());
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(&ctx),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}
