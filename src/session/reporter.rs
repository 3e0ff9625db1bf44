use reqwest::Url;
use thiserror::Error;

use super::timer::TimeReport;
use crate::server::{ServerEndpoint, TRACK_TIME_PATH};

/// Errors that can occur while reporting session time
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server rejected time report ({0})")]
    Rejected(u16),

    #[error("Could not start HTTP runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Posts session reports to `/track-time`
#[derive(Debug, Clone)]
pub struct SessionReporter {
    http: reqwest::Client,
    url: Url,
}

impl SessionReporter {
    pub fn new(server: &ServerEndpoint) -> Result<Self, TrackError> {
        let http = server
            .http_client()
            .map_err(|e| TrackError::Network(e.to_string()))?;
        Ok(Self {
            http,
            url: server.url(TRACK_TIME_PATH),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn send(&self, report: &TimeReport) -> Result<(), TrackError> {
        let response = self
            .http
            .post(self.url.clone())
            .json(report)
            .send()
            .await
            .map_err(|e| TrackError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackError::Rejected(status.as_u16()));
        }
        Ok(())
    }

    /// Send from synchronous code on a throwaway runtime
    ///
    /// Used on exit after the terminal has been restored.
    pub fn send_blocking(&self, report: &TimeReport) -> Result<(), TrackError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.send(report))
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod reporter_tests;
