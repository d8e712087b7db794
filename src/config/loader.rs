use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Defaults;

/// Errors from reading a JSON manifest or a flat defaults file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest or defaults file could not be opened or read.
    #[error("Cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.toml` defaults file is not a flat table of flag values.
    #[error("Invalid TOML defaults in '{path}': {source}")]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported config format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A defaults entry names no flag or has the wrong type.
    #[error("Rejected defaults: {message}")]
    RejectedDefaults { message: String },
}

impl Defaults {
    /// `<config dir>/<app>/defaults.toml`, with the current directory standing
    /// in when the platform has no config dir.
    pub fn config_path(app: &str) -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(app).join("defaults.toml")
    }

    /// Loads defaults from the app's default location.
    ///
    /// A missing file is not an error and yields empty defaults.
    pub fn load(app: &str) -> Result<Self, ConfigError> {
        let path = Self::config_path(app);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads defaults from a `.toml` or `.json` file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| ConfigError::InvalidToml {
                path: path.to_path_buf(),
                source: e,
            }),
            Some("json") => Self::from_json(&content),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidJson { source: e })
    }
}
