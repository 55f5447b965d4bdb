use thiserror::Error;

// ─── Link pipeline errors ────────────────────────────────────────────────────

/// Terminal failure of a single per-URL pipeline.
///
/// None of these ever reach the chat channel. The hook logs them with the
/// offending URL and drops that URL's reply; sibling pipelines keep going.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{url} is not a valid URL")]
    InvalidUrl { url: String },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned 404 Not Found")]
    NotFound { url: String },

    #[error("failed to shorten {url}: {message}")]
    Shorten { url: String, message: String },
}

impl LinkError {
    /// The URL the failing pipeline was working on.
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url }
            | Self::Fetch { url, .. }
            | Self::NotFound { url }
            | Self::Shorten { url, .. } => url,
        }
    }

    /// `true` for failures that happened before extraction (network, 404, bad URL).
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::Shorten { .. })
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
