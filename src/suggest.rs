//! Inline autocomplete ("ghost text") for the task title input
//!
//! The overlay state machine lives in [`overlay`] and talks to the terminal
//! through the [`OverlayHost`] and [`TextMeasure`] capabilities. Network
//! calls happen on the [`worker`] thread; every request carries an id so the
//! overlay can drop responses that arrive out of order.

pub mod client;
pub mod measure;
pub mod overlay;
pub mod remainder;
pub mod source;
pub mod worker;

pub use client::SuggestClient;
pub use measure::{CellMeasure, FontSpec, TextMeasure};
pub use overlay::{AcceptOutcome, GhostCompletion, OverlayHost};
pub use remainder::compute_remainder;
pub use source::{SuggestError, SuggestionSource};
pub use worker::{SuggestRequest, SuggestResponse, spawn_worker};
