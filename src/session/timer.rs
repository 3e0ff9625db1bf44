use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Body posted to `/track-time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeReport {
    /// Milliseconds spent on the page
    pub time_spent: u64,
    pub page: String,
}

/// Wall-clock timer started when the screen opens
#[derive(Debug, Clone)]
pub struct SessionTimer {
    started: Instant,
    page: String,
}

impl SessionTimer {
    pub fn start(page: impl Into<String>) -> Self {
        Self::started_at(Instant::now(), page)
    }

    pub fn started_at(started: Instant, page: impl Into<String>) -> Self {
        Self {
            started,
            page: page.into(),
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis().min(u64::MAX as u128) as u64
    }

    /// Snapshot of the time spent so far
    pub fn report(&self) -> TimeReport {
        TimeReport {
            time_spent: self.elapsed_ms(),
            page: self.page.clone(),
        }
    }
}
