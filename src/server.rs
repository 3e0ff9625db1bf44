//! Task server endpoint
//!
//! Resolves endpoint paths against the configured base URL and builds the
//! shared HTTP client settings.

use std::time::Duration;

use reqwest::Url;

use crate::config::ServerConfig;
use crate::error::TaskhintError;

pub const AUTOCOMPLETE_PATH: &str = "autocomplete";
pub const TRACK_TIME_PATH: &str = "track-time";

/// Base URL plus per-request timeout for the task server
#[derive(Debug, Clone)]
pub struct ServerEndpoint {
    base: Url,
    timeout: Duration,
}

impl ServerEndpoint {
    /// Parse a base URL. Only http and https are accepted.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TaskhintError> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|_| TaskhintError::InvalidServerUrl(base_url.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(TaskhintError::InvalidServerUrl(base_url.to_string()));
        }

        // Url::join replaces the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base, timeout })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, TaskhintError> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL of an endpoint below the base
    pub fn url(&self, path: &str) -> Url {
        // Joining a relative path onto a validated http(s) base cannot fail
        self.base
            .join(path.trim_start_matches('/'))
            .unwrap_or_else(|_| self.base.clone())
    }

    /// HTTP client with this endpoint's timeout applied
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("taskhint/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> ServerEndpoint {
        ServerEndpoint::new(base, Duration::from_millis(500)).unwrap()
    }

    #[test]
    fn test_url_at_root() {
        let server = endpoint("http://127.0.0.1:5000");
        assert_eq!(
            server.url(AUTOCOMPLETE_PATH).as_str(),
            "http://127.0.0.1:5000/autocomplete"
        );
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let server = endpoint("https://tasks.example.com/pm");
        assert_eq!(
            server.url(TRACK_TIME_PATH).as_str(),
            "https://tasks.example.com/pm/track-time"
        );
        let server = endpoint("https://tasks.example.com/pm/");
        assert_eq!(
            server.url("/autocomplete").as_str(),
            "https://tasks.example.com/pm/autocomplete"
        );
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        let result = ServerEndpoint::new("ftp://example.com", Duration::from_secs(1));
        assert!(matches!(result, Err(TaskhintError::InvalidServerUrl(_))));
        let result = ServerEndpoint::new("mailto:someone@example.com", Duration::from_secs(1));
        assert!(matches!(result, Err(TaskhintError::InvalidServerUrl(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = ServerEndpoint::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(TaskhintError::InvalidServerUrl(_))));
    }

    #[test]
    fn test_from_config_applies_timeout() {
        let config = ServerConfig {
            base_url: "http://localhost:8000".to_string(),
            timeout_ms: 1234,
        };
        let server = ServerEndpoint::from_config(&config).unwrap();
        assert_eq!(server.timeout(), Duration::from_millis(1234));
        assert_eq!(server.base().as_str(), "http://localhost:8000/");
    }
}
