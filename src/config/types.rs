// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_PAGE: &str = "/create_task";

/// Where the autocomplete and tracking endpoints live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Inline completion section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Queries shorter than this (in characters) never hit the server
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    /// Treat East Asian ambiguous-width characters as two cells wide
    #[serde(default)]
    pub ambiguous_wide: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            enabled: true,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            ambiguous_wide: false,
        }
    }
}

/// Session time reporting section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Page name reported alongside the time spent
    #[serde(default = "default_page")]
    pub page: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            enabled: true,
            page: default_page(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_page() -> String {
    DEFAULT_PAGE.to_string()
}
