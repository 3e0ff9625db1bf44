//! Suggestion Worker Thread
//!
//! Runs autocomplete fetches on a background thread so typing never waits on
//! the network. Requests arrive over a tokio channel; results go back to the
//! UI thread over a std channel that the event loop drains each tick.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::source::{SuggestError, SuggestionSource};

/// Request messages sent to the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Fetch completions for `query`
    Query {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Stop the worker after cancelling whatever is in flight
    Shutdown,
}

/// Result of one fetch, tagged with the request it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResponse {
    pub request_id: u64,
    pub query: String,
    pub result: Result<Vec<String>, SuggestError>,
}

/// Spawn the suggestion worker thread
///
/// Each new query cancels the previous in-flight fetch; the cancelled fetch
/// sends no response. Fetches that already finished may still be queued on
/// the response channel, so the receiver must compare request ids.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("taskhint-suggest".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(source), request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop<S: SuggestionSource>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let mut in_flight: Option<CancellationToken> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SuggestRequest::Query { query, request_id } => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                in_flight = Some(token.clone());
                tokio::spawn(fetch(
                    Arc::clone(&source),
                    query,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            SuggestRequest::Shutdown => break,
        }
    }

    if let Some(token) = in_flight {
        token.cancel();
    }
    log::debug!("Suggestion worker shutting down");
}

async fn fetch<S: SuggestionSource>(
    source: Arc<S>,
    query: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    let result = tokio::select! {
        biased;
        _ = cancel_token.cancelled() => {
            log::debug!("Cancelled suggestion request {} for {:?}", request_id, query);
            return;
        }
        result = source.suggest(&query) => result,
    };

    if let Err(e) = &result {
        log::debug!("Suggestion request {} failed: {}", request_id, e);
    }

    let response = SuggestResponse {
        request_id,
        query,
        result,
    };
    if response_tx.send(response).is_err() {
        // UI thread is gone, nothing left to update
        log::debug!("Dropping suggestion response {}: receiver closed", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
