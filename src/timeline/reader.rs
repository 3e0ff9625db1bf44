use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TaskhintError;

/// One task as exported by the task server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`2024-05-01`) or date-time
    pub deadline: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Read task lists from disk
pub struct TaskReader;

impl TaskReader {
    /// Read a JSON array of tasks from `path`
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - Tasks in file order
    /// * `Err(TaskhintError)` - If the file is unreadable or not a task array
    pub fn read_tasks(path: &Path) -> Result<Vec<Task>, TaskhintError> {
        let contents = fs::read_to_string(path)?;
        Self::parse_tasks(&contents)
    }

    pub fn parse_tasks(json: &str) -> Result<Vec<Task>, TaskhintError> {
        serde_json::from_str(json).map_err(|e| TaskhintError::InvalidTasks(e.to_string()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
