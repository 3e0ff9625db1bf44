//! Configuration loading
//!
//! Reads `taskhint/config.toml` from the platform config directory. A missing
//! file is normal and yields defaults; a broken file also yields defaults but
//! carries a warning so the caller can log it.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, ServerConfig, TrackingConfig};

use crate::error::TaskhintError;

const CONFIG_DIR: &str = "taskhint";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the default config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a config file existed but could not be used
    pub warning: Option<String>,
}

/// Default location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults
pub fn load_config() -> ConfigResult {
    match default_config_path() {
        Some(path) => load_config_lenient(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load a config file, using defaults when it is missing or invalid
pub fn load_config_lenient(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match load_config_file(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{}; using defaults", e)),
        },
    }
}

/// Load a config file the user named explicitly. Any problem is an error.
pub fn load_config_file(path: &Path) -> Result<Config, TaskhintError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| TaskhintError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
