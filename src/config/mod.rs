//! Manifests and flat defaults files.

mod loader;
mod manifest;
mod types;

pub use loader::ConfigError;
pub use types::Defaults;
