//! Ghost text completion state
//!
//! Decides when to ask for suggestions, which responses may change what is
//! displayed, and what Tab does. Display and measurement go through injected
//! capabilities so none of this needs a terminal.

use super::measure::{CellMeasure, FontSpec, TextMeasure};
use super::remainder::compute_remainder;
use super::source::SuggestError;
use super::worker::{SuggestRequest, SuggestResponse};
use crate::config::AutocompleteConfig;

/// The input control the overlay draws into
pub trait OverlayHost {
    /// Current text of the input
    fn read_query(&self) -> String;
    /// Replace the input text (cursor moves to the end)
    fn write_query(&mut self, text: &str);
    /// Show `text` as ghost text after the typed query; empty hides it
    fn write_remainder(&mut self, text: &str);
    /// Column, in cells from the start of the text, where ghost text begins
    fn set_overlay_offset(&mut self, cells: u16);
}

/// What pressing the accept key did
///
/// Tab is consumed in both cases so it never moves focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The remainder was appended to the input
    Accepted(String),
    /// No remainder was displayed
    NothingToAccept,
}

/// Inline completion state for one input control
pub struct GhostCompletion<M: TextMeasure = CellMeasure> {
    measure: M,
    font: FontSpec,
    enabled: bool,
    min_query_chars: usize,
    remainder: String,
    /// Top suggestion the remainder was cut from
    top_suggestion: Option<String>,
    offset: u16,
    /// Last request id handed out, incremented for each new request
    request_id: u64,
    /// Request whose response may still change the remainder
    in_flight_request_id: Option<u64>,
    last_error: Option<SuggestError>,
}

impl GhostCompletion<CellMeasure> {
    pub fn from_config(config: &AutocompleteConfig) -> Self {
        Self::new(
            CellMeasure,
            FontSpec {
                ambiguous_wide: config.ambiguous_wide,
            },
            config.min_query_chars,
        )
        .with_enabled(config.enabled)
    }
}

impl<M: TextMeasure> GhostCompletion<M> {
    pub fn new(measure: M, font: FontSpec, min_query_chars: usize) -> Self {
        Self {
            measure,
            font,
            enabled: true,
            min_query_chars,
            remainder: String::new(),
            top_suggestion: None,
            offset: 0,
            request_id: 0,
            in_flight_request_id: None,
            last_error: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.in_flight_request_id
    }

    /// Error from the most recent failed fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&SuggestError> {
        self.last_error.as_ref()
    }

    /// Handle a keystroke that changed the input text
    ///
    /// Returns the request to send to the worker, if the query qualifies.
    /// Any earlier request is superseded either way.
    pub fn on_input(&mut self, host: &mut impl OverlayHost) -> Option<SuggestRequest> {
        self.reposition(host);

        let query = host.read_query();
        if !self.enabled || query.chars().count() < self.min_query_chars {
            self.clear(host);
            return None;
        }

        // Keep showing the old top suggestion while it still extends the text
        let carried = match &self.top_suggestion {
            Some(top) if top.starts_with(&query) => Some(top[query.len()..].to_string()),
            _ => None,
        };
        match carried {
            Some(remainder) => self.set_remainder(host, remainder),
            None => {
                self.top_suggestion = None;
                self.set_remainder(host, String::new());
            }
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        Some(SuggestRequest::Query {
            query,
            request_id: self.request_id,
        })
    }

    /// Apply a worker response. Returns false when it was stale and ignored.
    pub fn apply_response(
        &mut self,
        response: SuggestResponse,
        host: &mut impl OverlayHost,
    ) -> bool {
        if self.in_flight_request_id != Some(response.request_id) {
            log::debug!(
                "Ignoring stale suggestion response {} (current: {:?})",
                response.request_id,
                self.in_flight_request_id
            );
            return false;
        }
        self.in_flight_request_id = None;

        // Text can change without a keystroke reaching on_input (paste, write_query)
        if host.read_query() != response.query {
            log::debug!("Ignoring suggestions for {:?}: input changed", response.query);
            return false;
        }

        match response.result {
            Ok(suggestions) => {
                self.last_error = None;
                let remainder = compute_remainder(&response.query, &suggestions);
                self.top_suggestion = suggestions.into_iter().next();
                self.set_remainder(host, remainder);
            }
            Err(e) => {
                log::warn!("Suggestions for {:?} unavailable: {}", response.query, e);
                self.last_error = Some(e);
                self.top_suggestion = None;
                self.set_remainder(host, String::new());
            }
        }
        true
    }

    /// Handle the accept key (Tab)
    pub fn on_accept(&mut self, host: &mut impl OverlayHost) -> AcceptOutcome {
        if self.remainder.is_empty() {
            return AcceptOutcome::NothingToAccept;
        }

        let accepted = std::mem::take(&mut self.remainder);
        self.top_suggestion = None;
        let text = format!("{}{}", host.read_query(), accepted);
        host.write_query(&text);
        host.write_remainder("");
        self.in_flight_request_id = None;
        self.reposition(host);

        AcceptOutcome::Accepted(accepted)
    }

    /// Recompute where the ghost text starts from the current text width
    pub fn reposition(&mut self, host: &mut impl OverlayHost) {
        let query = host.read_query();
        self.offset = self.measure.measure_text_width(&query, &self.font);
        host.set_overlay_offset(self.offset);
    }

    /// Drop any displayed remainder and forget in-flight requests
    pub fn clear(&mut self, host: &mut impl OverlayHost) {
        self.in_flight_request_id = None;
        self.top_suggestion = None;
        self.set_remainder(host, String::new());
    }

    fn set_remainder(&mut self, host: &mut impl OverlayHost, remainder: String) {
        host.write_remainder(&remainder);
        self.remainder = remainder;
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
