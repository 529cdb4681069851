/// Errors that can occur while loading the catalog document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid catalog structure: {0}")]
    Schema(String),
}

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Transport failure or non-2xx response.
    Network,
    /// The document arrived but its top-level shape is wrong.
    Schema,
}

impl LoadError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Network(_) | Self::HttpStatus { .. } | Self::Io(_) => LoadErrorKind::Network,
            Self::Decode(_) | Self::Schema(_) => LoadErrorKind::Schema,
        }
    }
}

/// Errors from the issue-tracker submission collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("No issue tracker token configured (set ARMDEX_GITHUB_TOKEN)")]
    MissingToken,

    #[error("Issue tracker rejected the submission (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Errors from reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}
