use thiserror::Error;

/// Custom error types for taskhint
#[derive(Debug, Error)]
pub enum TaskhintError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid server URL '{0}'. Expected something like http://127.0.0.1:5000")]
    InvalidServerUrl(String),

    #[error("Invalid task file: {0}")]
    InvalidTasks(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
