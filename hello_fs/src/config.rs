//! Hello filesystem configuration
//!
//! Configuration is a small JSON document. Every field has a default, so an
//! empty object (or no file at all) gives the classic hello filesystem.

use dir_listing::is_valid_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HELLO_CONFIG_NAME: &str = "hello_fs.json";

pub const DEFAULT_FILE_NAME: &str = "hello_from_rust";
pub const DEFAULT_CONTENTS: &str = "Hello rusty world!\n";

/// Errors related to loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for the hello filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloConfig {
    /// Name of the single file in the root directory
    pub file_name: String,
    /// Contents of that file
    pub contents: String,
    /// Seconds the kernel may cache attributes
    pub attr_timeout_secs: f64,
    /// Seconds the kernel may cache name lookups
    pub entry_timeout_secs: f64,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            contents: DEFAULT_CONTENTS.to_string(),
            attr_timeout_secs: 1.0,
            entry_timeout_secs: 1.0,
        }
    }
}

impl HelloConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_name(&self.file_name) {
            return Err(ConfigError::Invalid(format!(
                "File name {:?} is not a valid entry name",
                self.file_name
            )));
        }
        for (field, value) in [
            ("attr_timeout_secs", self.attr_timeout_secs),
            ("entry_timeout_secs", self.entry_timeout_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Loads `hello_fs.json` from `dir`
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_path = PathBuf::from(dir.as_ref()).join(HELLO_CONFIG_NAME);
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path.display().to_string()));
        }
        Self::load_from_path(config_path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data =
            fs::read_to_string(path.as_ref()).map_err(|err| ConfigError::Io(err.to_string()))?;
        let config: HelloConfig =
            serde_json::from_str(&data).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}
