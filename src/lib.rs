//! Declarative command-line flags.
//!
//! Declare flags on an [`ArgSet`], parse a token sequence, then read typed
//! values back or bind them into a struct:
//!
//! ```
//! use argset::{ArgSet, FlagDef};
//!
//! let mut set = ArgSet::new("My App")
//!     .flag("message", FlagDef::new().with_short("m").with_default("COOL!"))
//!     .flag("print", FlagDef::new().with_short("p").with_default(false))
//!     .flag("nums", FlagDef::new().with_short("n").with_default(0));
//!
//! set.parse(["--message=test", "-p", "-n", "69"]).unwrap();
//!
//! assert_eq!(set.string("message"), "test");
//! assert!(set.bool("print"));
//! assert_eq!(set.int("nums"), 69);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod logging;

pub use args::{
    ArgSet, Bindings, DefaultUsage, FlagArity, FlagDef, FlagKind, FlagValue, ParseReport,
    UsageRenderer,
};
pub use config::{ConfigError, Defaults};
pub use error::{ArgsError, MissingValueCause};
