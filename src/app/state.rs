use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::input::InputState;
use crate::suggest::{GhostCompletion, SuggestRequest, SuggestResponse};
use crate::timeline::Timeline;

/// Application state
pub struct App {
    pub input: InputState,
    pub ghost: GhostCompletion,
    pub timeline: Timeline,
    pub should_quit: bool,
    /// Title confirmed with Enter, printed after the terminal is restored
    pub submitted: Option<String>,
    /// Channel to send requests to the suggestion worker
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    /// Channel to receive responses from the suggestion worker
    response_rx: Option<Receiver<SuggestResponse>>,
}

impl App {
    /// Create a new App instance. Suggestions stay off until a worker is connected.
    pub fn new(config: &Config, timeline: Timeline) -> Self {
        Self {
            input: InputState::new(),
            ghost: GhostCompletion::from_config(&config.autocomplete),
            timeline,
            should_quit: false,
            submitted: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the channels of a running suggestion worker
    pub fn connect_worker(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply every response the worker has produced since the last tick
    ///
    /// Returns true if the ghost text may have changed.
    pub fn poll_suggestions(&mut self) -> bool {
        let Some(response_rx) = &self.response_rx else {
            return false;
        };

        let mut changed = false;
        loop {
            match response_rx.try_recv() {
                Ok(response) => {
                    changed |= self.ghost.apply_response(response, &mut self.input);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Suggestion worker stopped; autocomplete disabled");
                    self.response_rx = None;
                    self.request_tx = None;
                    break;
                }
            }
        }
        changed
    }

    /// Ask the worker to stop and drop the channels
    pub fn shutdown_worker(&mut self) {
        if let Some(request_tx) = self.request_tx.take() {
            let _ = request_tx.send(SuggestRequest::Shutdown);
        }
        self.response_rx = None;
    }

    /// Run the completion logic after the input text changed
    pub(super) fn on_text_changed(&mut self) {
        if let Some(request) = self.ghost.on_input(&mut self.input) {
            self.send_request(request);
        }
    }

    fn send_request(&mut self, request: SuggestRequest) {
        let Some(request_tx) = &self.request_tx else {
            self.ghost.clear(&mut self.input);
            return;
        };
        if request_tx.send(request).is_err() {
            log::warn!("Suggestion worker is gone; autocomplete disabled");
            self.request_tx = None;
            self.ghost.clear(&mut self.input);
        }
    }
}
