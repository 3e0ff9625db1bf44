//! Session time tracking
//!
//! Measures how long the task entry screen was open and reports it to the
//! server's `/track-time` endpoint when the app exits.

mod reporter;
mod timer;

pub use reporter::{SessionReporter, TrackError};
pub use timer::{SessionTimer, TimeReport};
