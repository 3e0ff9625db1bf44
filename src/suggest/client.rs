//! HTTP client for the `/autocomplete` endpoint

use reqwest::Url;
use serde::Deserialize;

use super::source::{SuggestError, SuggestionSource};
use crate::server::{AUTOCOMPLETE_PATH, ServerEndpoint};

/// Body returned by `GET /autocomplete`
#[derive(Debug, Deserialize)]
struct AutocompleteBody {
    suggestions: Vec<String>,
}

/// Fetches completions from the task server
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    url: Url,
}

impl SuggestClient {
    pub fn new(server: &ServerEndpoint) -> Result<Self, SuggestError> {
        let http = server
            .http_client()
            .map_err(|e| SuggestError::Network(e.to_string()))?;
        Ok(Self {
            http,
            url: server.url(AUTOCOMPLETE_PATH),
        })
    }

    /// URL requested for `query`, with the query string encoded
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().clear().append_pair("query", query);
        url
    }

    /// Ask the server for completions of `query`
    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, SuggestError> {
        let response = self
            .http
            .get(self.request_url(query))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;
        parse_body(&bytes)
    }
}

impl SuggestionSource for SuggestClient {
    fn suggest(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<String>, SuggestError>> + Send {
        self.fetch(query)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Vec<String>, SuggestError> {
    serde_json::from_slice::<AutocompleteBody>(bytes)
        .map(|body| body.suggestions)
        .map_err(|e| SuggestError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
