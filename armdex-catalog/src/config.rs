use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Catalog document fetched when nothing else is configured.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/amalik99/windows-arm-apps-directory/refs/heads/main/data/apps.json";
/// Public site root used for sitemap URLs.
pub const DEFAULT_SITE_URL: &str = "https://windowsarm.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRACKER_OWNER: &str = "amalik99";
pub const DEFAULT_TRACKER_REPO: &str = "windows-arm-apps-directory";

pub const ENV_DATA_URL: &str = "ARMDEX_DATA_URL";
pub const ENV_SITE_URL: &str = "ARMDEX_SITE_URL";
pub const ENV_TIMEOUT: &str = "ARMDEX_TIMEOUT_SECS";
pub const ENV_GITHUB_TOKEN: &str = "ARMDEX_GITHUB_TOKEN";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub data_url: String,
    pub site_url: String,
    pub timeout: Duration,
    pub tracker: TrackerConfig,
}

/// Where submissions are filed.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line.
    CommandLine,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct ConfigSources {
    pub data_url: ConfigSource,
    pub site_url: ConfigSource,
    pub timeout: ConfigSource,
    pub tracker: ConfigSource,
    pub token: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct CatalogSection {
    pub data_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct SiteSection {
    pub url: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct TrackerSection {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub token: Option<String>,
}

impl DirectoryConfig {
    /// Load configuration from the environment and the config file.
    ///
    /// Priority: env vars > config file > built-in defaults. Command-line
    /// values are layered on afterwards with [`DirectoryConfig::with_overrides`].
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => read_config_file(&path)?,
            None => None,
        };
        Self::resolve(file.as_ref(), &|key| std::env::var(key).ok())
    }

    /// Resolve settings from an optional parsed file and an env lookup.
    pub fn resolve(
        file: Option<&ConfigFile>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let catalog = file.and_then(|f| f.catalog.as_ref());
        let site = file.and_then(|f| f.site.as_ref());
        let tracker = file.and_then(|f| f.tracker.as_ref());

        let data_url = env(ENV_DATA_URL)
            .filter(|v| !v.is_empty())
            .or_else(|| catalog.and_then(|c| c.data_url.clone()))
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());

        let site_url = env(ENV_SITE_URL)
            .filter(|v| !v.is_empty())
            .or_else(|| site.and_then(|s| s.url.clone()))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let timeout_secs = match env(ENV_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_TIMEOUT,
                message: e.to_string(),
            })?,
            None => catalog
                .and_then(|c| c.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout",
                message: "must be at least one second".to_string(),
            });
        }

        let token = env(ENV_GITHUB_TOKEN)
            .filter(|v| !v.is_empty())
            .or_else(|| tracker.and_then(|t| t.token.clone()));

        Ok(Self {
            data_url,
            site_url: site_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            tracker: TrackerConfig {
                owner: tracker
                    .and_then(|t| t.owner.clone())
                    .unwrap_or_else(|| DEFAULT_TRACKER_OWNER.to_string()),
                repo: tracker
                    .and_then(|t| t.repo.clone())
                    .unwrap_or_else(|| DEFAULT_TRACKER_REPO.to_string()),
                token,
            },
        })
    }

    /// Apply explicit values (e.g., from CLI args).
    pub fn with_overrides(mut self, data_url: Option<String>, site_url: Option<String>) -> Self {
        if let Some(url) = data_url {
            self.data_url = url;
        }
        if let Some(url) = site_url {
            self.site_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tracker: TrackerConfig {
                owner: DEFAULT_TRACKER_OWNER.to_string(),
                repo: DEFAULT_TRACKER_REPO.to_string(),
                token: None,
            },
        }
    }
}

/// Return the path to the config file: `~/.config/armdex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("armdex").join("config.toml"))
}

/// Parse a config file. A missing file is not an error.
pub fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Write a config file containing the values that differ from the defaults.
///
/// The token is never persisted; it belongs in the environment.
pub fn save_to_file(config: &DirectoryConfig, path: &Path) -> Result<(), ConfigError> {
    let file = ConfigFile {
        catalog: Some(CatalogSection {
            data_url: (config.data_url != DEFAULT_DATA_URL).then(|| config.data_url.clone()),
            timeout_secs: (config.timeout.as_secs() != DEFAULT_TIMEOUT_SECS)
                .then(|| config.timeout.as_secs()),
        }),
        site: (config.site_url != DEFAULT_SITE_URL).then(|| SiteSection {
            url: Some(config.site_url.clone()),
        }),
        tracker: (config.tracker.owner != DEFAULT_TRACKER_OWNER
            || config.tracker.repo != DEFAULT_TRACKER_REPO)
            .then(|| TrackerSection {
                owner: Some(config.tracker.owner.clone()),
                repo: Some(config.tracker.repo.clone()),
                token: None,
            }),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(&file)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where each setting is coming from.
///
/// `data_url_override` is the command-line value, if any.
pub fn config_sources(data_url_override: Option<&str>) -> ConfigSources {
    let file = config_path()
        .and_then(|p| read_config_file(&p).ok())
        .flatten();
    let catalog = file.as_ref().and_then(|f| f.catalog.as_ref());
    let env_set = |key: &str| std::env::var(key).is_ok_and(|v| !v.trim().is_empty());

    let data_url = if data_url_override.is_some() {
        ConfigSource::CommandLine
    } else if env_set(ENV_DATA_URL) {
        ConfigSource::EnvVar(ENV_DATA_URL)
    } else if catalog.and_then(|c| c.data_url.as_ref()).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let site_url = if env_set(ENV_SITE_URL) {
        ConfigSource::EnvVar(ENV_SITE_URL)
    } else if file
        .as_ref()
        .and_then(|f| f.site.as_ref())
        .and_then(|s| s.url.as_ref())
        .is_some()
    {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let timeout = if env_set(ENV_TIMEOUT) {
        ConfigSource::EnvVar(ENV_TIMEOUT)
    } else if catalog.and_then(|c| c.timeout_secs).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let tracker = if file
        .as_ref()
        .and_then(|f| f.tracker.as_ref())
        .is_some_and(|t| t.owner.is_some() || t.repo.is_some())
    {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let token = if env_set(ENV_GITHUB_TOKEN) {
        ConfigSource::EnvVar(ENV_GITHUB_TOKEN)
    } else if file
        .as_ref()
        .and_then(|f| f.tracker.as_ref())
        .and_then(|t| t.token.as_ref())
        .is_some()
    {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Missing
    };

    ConfigSources {
        data_url,
        site_url,
        timeout,
        tracker,
        token,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
