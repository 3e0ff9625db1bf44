//! Suggestion source abstraction
//!
//! Defines the SuggestError type and the trait the worker fetches through.

use std::future::Future;

use thiserror::Error;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Connection, DNS, or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not `{"suggestions": [...]}`
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Anything that can turn a query into an ordered list of completions
///
/// The first element is treated as the top suggestion.
pub trait SuggestionSource: Send + Sync + 'static {
    fn suggest(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<String>, SuggestError>> + Send;
}
