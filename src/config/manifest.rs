//! JSON manifest — declare a whole registry, or export it.

use std::fs;
use std::path::Path;

use crate::args::ArgSet;
use crate::config::loader::ConfigError;

impl ArgSet {
    /// Build a registry from a JSON manifest.
    ///
    /// ```json
    /// {
    ///   "name": "My App",
    ///   "args": {
    ///     "print": { "short": "p", "default": false },
    ///     "nums": { "short": "n", "type": "int" }
    ///   }
    /// }
    /// ```
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut set: ArgSet =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidJson { source: e })?;
        set.sync_names();
        Ok(set)
    }

    pub fn load_manifest(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Serialize the registry declaration. Parse state is not included.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidJson { source: e })
    }
}
