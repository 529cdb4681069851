use armdex_catalog::config::save_to_file;
use armdex_catalog::{ConfigSource, config_path};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::Context;
use crate::error::CliError;

fn mask_value(s: &str) -> String {
    match s.get(..4) {
        Some(prefix) if s.len() > 8 => format!("{}****", prefix),
        _ => "****".to_string(),
    }
}

/// Show the resolved settings and where each comes from.
pub(crate) fn run_config_show(ctx: &Context, data_url_override: Option<&str>) {
    let path = config_path();
    let sources = armdex_catalog::config::config_sources(data_url_override);
    let config = &ctx.config;

    log::info!(
        "{}",
        "armdex configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let timeout = format!("{}s", config.timeout.as_secs());
    let tracker = format!("{}/{}", config.tracker.owner, config.tracker.repo);
    let token = config.tracker.token.as_deref().map(mask_value);

    let fields: [(&str, Option<&str>, &ConfigSource); 5] = [
        ("data_url", Some(config.data_url.as_str()), &sources.data_url),
        ("site_url", Some(config.site_url.as_str()), &sources.site_url),
        ("timeout", Some(timeout.as_str()), &sources.timeout),
        ("tracker", Some(tracker.as_str()), &sources.tracker),
        ("token", token.as_deref(), &sources.token),
    ];

    for (name, value, source) in fields {
        let source_str = format!("({})", source);
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            match value {
                Some(v) => v.to_string(),
                None => "not set".if_supports_color(Stdout, |t| t.yellow()).to_string(),
            },
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Write the resolved settings (minus the token) to the config file.
pub(crate) fn run_config_init(ctx: &Context) -> Result<(), CliError> {
    let Some(path) = config_path() else {
        return Err(armdex_catalog::ConfigError::NoConfigDir.into());
    };
    save_to_file(&ctx.config, &path)?;
    log::info!(
        "Saved configuration to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    match config_path() {
        Some(p) => println!("{}", p.display()),
        None => log::error!("Could not determine config directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_tokens() {
        assert_eq!(mask_value("ghp_abcdefghijkl"), "ghp_****");
        assert_eq!(mask_value("short"), "****");
    }
}
