//! Error types returned by registry validation, parsing and binding.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::args::FlagKind;
use crate::config::ConfigError;

/// Why a non-boolean flag ended up without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValueCause {
    /// The flag was the last token.
    EndOfInput,
    /// The next token starts with a dash and is treated as another flag.
    NextIsFlag,
}

impl fmt::Display for MissingValueCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingValueCause::EndOfInput => f.write_str("requires a value"),
            MissingValueCause::NextIsFlag => f.write_str("flag given but argument not set"),
        }
    }
}

/// Errors that can occur while validating, parsing or binding flags.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// Two or more flags share a short form or a name.
    #[error("Duplicate keys: {}", .conflicts.join("; "))]
    DuplicateKey { conflicts: Vec<String> },

    /// A flag declared neither a name nor a short form.
    #[error("Flag requires a name or a short form")]
    MissingFlagName,

    /// Required flags were not given on the command line.
    #[error("Missing required arguments: {}", .flags.join(", "))]
    MissingRequired { flags: Vec<String> },

    /// `-h` / `--help` was given. Usage has already been printed.
    #[error("Usage requested")]
    UsageRequested,

    /// A raw value could not be coerced to the flag's declared type.
    #[error("Value '{value}' for flag '{flag}' could not be converted to {expected}")]
    ValueConversion {
        flag: String,
        value: String,
        expected: FlagKind,
    },

    /// A non-boolean flag had no value and is not value-optional.
    #[error("Flag '{flag}' ({forms}) {cause}")]
    MissingValue {
        flag: String,
        forms: String,
        cause: MissingValueCause,
    },

    /// A binding setter takes a type other than `i64`, `bool` or `String`.
    #[error("Unsupported binding type '{type_name}' for flag '{key}'")]
    UnsupportedBindingType { key: String, type_name: String },

    /// A binding setter's type does not match the flag's declared type.
    #[error("Flag '{key}' is {flag_type} but its binding takes '{type_name}'")]
    BindingTypeMismatch {
        key: String,
        flag_type: FlagKind,
        type_name: String,
    },

    /// The explicit type of a flag disagrees with its default value.
    #[error("Flag '{flag}' is declared as {declared} but its default is {found}")]
    DefaultTypeMismatch {
        flag: String,
        declared: FlagKind,
        found: FlagKind,
    },

    /// Reading the file named by a flag failed.
    #[error("Failed to read file '{path}' given by flag '{flag}': {source}")]
    FileRead {
        flag: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ArgsError {
    /// True for the help termination signal, which is not a real failure.
    pub fn is_usage_request(&self) -> bool {
        matches!(self, ArgsError::UsageRequested)
    }

    /// True when usage text was already printed before this error was returned.
    pub fn usage_printed(&self) -> bool {
        matches!(
            self,
            ArgsError::UsageRequested | ArgsError::MissingRequired { .. }
        )
    }
}
