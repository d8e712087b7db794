use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::args::{ArgSet, FlagValue};
use crate::config::loader::ConfigError;

/// Flat key/value defaults, one entry per flag key.
///
/// ```toml
/// message = "hello"
/// nums = 3
/// print = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Defaults {
    pub values: IndexMap<String, FlagValue>,
}

impl Defaults {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ArgSet {
    /// Replace flag defaults with the values from a defaults file.
    ///
    /// Every key must name a declared flag and every value must match that
    /// flag's declared type. Nothing is changed when any entry is rejected.
    pub fn apply_defaults(&mut self, defaults: &Defaults) -> Result<(), ConfigError> {
        for (key, value) in &defaults.values {
            let def = self.get(key).ok_or_else(|| ConfigError::RejectedDefaults {
                message: format!("Unknown flag '{}' in defaults", key),
            })?;

            let declared = def.value_kind();
            if value.kind() != declared {
                return Err(ConfigError::RejectedDefaults {
                    message: format!(
                        "Default for flag '{}' must be {}, found {}",
                        key,
                        declared,
                        value.kind()
                    ),
                });
            }
        }

        for (key, value) in &defaults.values {
            if let Some(def) = self.args.get_mut(key) {
                def.default = Some(value.clone());
            }
        }
        tracing::debug!(count = defaults.values.len(), "applied flag defaults");
        Ok(())
    }
}
