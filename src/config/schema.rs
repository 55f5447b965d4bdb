use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Desktop-browser identification sent with every fetch. Some sites serve
/// stripped pages (or refuse outright) when the agent looks automated.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_BITLY_ENDPOINT: &str = "https://api-ssl.bitly.com";

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub links: LinkConfig,

    #[serde(default)]
    pub shortener: ShortenerConfig,
}

// ── Link hook ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_max_redirects() -> usize {
    10
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}

// ── Shortener (bitly) ─────────────────────────────────────────────

/// Bitly credentials. Both must be set for shortening to kick in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_bitly_endpoint")]
    pub endpoint: String,
}

fn default_bitly_endpoint() -> String {
    DEFAULT_BITLY_ENDPOINT.into()
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            api_key: String::new(),
            endpoint: default_bitly_endpoint(),
        }
    }
}

impl ShortenerConfig {
    pub fn is_configured(&self) -> bool {
        !self.user.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}
