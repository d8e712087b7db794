//! Typed reads. Unknown keys give the zero value instead of an error.

use std::path::PathBuf;

use crate::args::registry::ArgSet;
use crate::args::value::FlagValue;
use crate::error::ArgsError;

impl ArgSet {
    /// String form of the current value. Boolean flags read as "true"/"false".
    pub fn string(&self, key: &str) -> String {
        self.get(key)
            .map(|def| def.current().to_string())
            .unwrap_or_default()
    }

    pub fn int(&self, key: &str) -> i64 {
        self.get(key)
            .and_then(|def| def.current().as_int())
            .unwrap_or(0)
    }

    pub fn bool(&self, key: &str) -> bool {
        self.get(key)
            .and_then(|def| def.current().as_bool())
            .unwrap_or(false)
    }

    /// Current typed value, or `None` for an unknown key.
    pub fn value(&self, key: &str) -> Option<FlagValue> {
        self.get(key).map(|def| def.current())
    }

    /// True once the parser bound a value for the flag. Defaults don't count.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|def| def.was_set())
    }

    /// Same as [`ArgSet::is_set`].
    pub fn was_provided_by_user(&self, key: &str) -> bool {
        self.is_set(key)
    }

    /// True when the flag has a usable value: given on the command line or
    /// declared with a default.
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|def| def.was_set() || def.default.is_some())
    }

    /// Read the file whose path is the flag's string value.
    ///
    /// Unknown keys give an empty buffer. A read failure is returned, not
    /// retried.
    pub fn file_contents(&self, key: &str) -> Result<Vec<u8>, ArgsError> {
        if self.get(key).is_none() {
            return Ok(Vec::new());
        }

        let path = PathBuf::from(self.string(key));
        std::fs::read(&path).map_err(|source| ArgsError::FileRead {
            flag: key.to_string(),
            path,
            source,
        })
    }
}
