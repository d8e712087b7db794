//! Flag declaration and parsing.
//!
//! ```text
//! Declare → Validate → Tokenize → Match/Coerce → Required check → Bind
//! ```
//!
//! The registry ([`ArgSet`]) owns flag definitions and their parse state.
//! The parser mutates that state in place during a single forward pass, so
//! a registry must not be parsed from several threads at once.

mod accessors;
mod binding;
mod parser;
mod registry;
mod token;
mod usage;
mod value;

pub use binding::Bindings;
pub use parser::{parse, ParseReport};
pub use registry::{ArgSet, FlagArity, FlagDef, HELP_NAMES};
pub use token::{tokenize, FlagToken};
pub use usage::{DefaultUsage, UsageRenderer};
pub use value::{FlagKind, FlagValue};
