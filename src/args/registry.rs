//! Flag registry — the declared schema for every flag plus app metadata.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::args::usage::{DefaultUsage, UsageRenderer};
use crate::args::value::{FlagKind, FlagValue};
use crate::error::ArgsError;

/// Names that trigger the built-in help intercept.
pub const HELP_NAMES: [&str; 2] = ["h", "help"];

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., --print, -p).
    NoValue,
    /// Requires exactly one value (e.g., --nums 69).
    RequiresValue,
    /// Takes a value when one follows, silently skipped otherwise.
    OptionalValue,
}

/// Parse state of one flag. Never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
struct FlagState {
    value: Option<FlagValue>,
    was_set: bool,
}

/// A single flag definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagDef {
    /// Canonical name; mirrors the registry key once validated.
    #[serde(skip)]
    name: String,
    /// Short form without the dash (e.g., "p").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Long form without dashes. The name is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FlagValue>,
    /// Explicit type. Wins over the default's variant, but must agree with it.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FlagKind>,
    /// A missing value is not an error.
    #[serde(default, rename = "optional", skip_serializing_if = "std::ops::Not::not")]
    pub optional_value: bool,
    #[serde(skip)]
    state: FlagState,
}

impl FlagDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<FlagValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_kind(mut self, kind: FlagKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn value_optional(mut self) -> Self {
        self.optional_value = true;
        self
    }

    /// Canonical name. Empty until the flag is inserted into an [`ArgSet`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type: explicit kind, else the default's variant, else string.
    pub fn value_kind(&self) -> FlagKind {
        self.kind
            .or_else(|| self.default.as_ref().map(FlagValue::kind))
            .unwrap_or(FlagKind::String)
    }

    pub fn is_bool(&self) -> bool {
        self.value_kind() == FlagKind::Bool
    }

    pub fn arity(&self) -> FlagArity {
        if self.is_bool() {
            FlagArity::NoValue
        } else if self.optional_value {
            FlagArity::OptionalValue
        } else {
            FlagArity::RequiresValue
        }
    }

    /// Long-form token: explicit long form, or the name.
    pub fn long_form(&self) -> Option<&str> {
        self.long
            .as_deref()
            .or(Some(self.name.as_str()))
            .filter(|s| !s.is_empty())
    }

    fn short_form(&self) -> Option<&str> {
        self.short.as_deref().filter(|s| !s.is_empty())
    }

    /// Check if a tokenized flag name refers to this definition.
    ///
    /// Exact match against the short form, the name or the long form.
    pub fn matches(&self, name: &str) -> bool {
        self.short_form() == Some(name)
            || (!self.name.is_empty() && self.name == name)
            || self.long.as_deref() == Some(name)
    }

    /// Dash-prefixed forms for messages, e.g. `-p, --print`.
    pub fn forms(&self) -> String {
        let mut forms = Vec::new();
        if let Some(short) = self.short_form() {
            forms.push(format!("-{short}"));
        }
        if let Some(long) = self.long_form() {
            forms.push(format!("--{long}"));
        }
        forms.join(", ")
    }

    fn claims_help(&self) -> bool {
        HELP_NAMES.iter().any(|&h| {
            self.name == h || self.short_form() == Some(h) || self.long.as_deref() == Some(h)
        })
    }

    fn check_default(&self) -> Result<(), ArgsError> {
        match (self.kind, &self.default) {
            (Some(declared), Some(default)) if default.kind() != declared => {
                Err(ArgsError::DefaultTypeMismatch {
                    flag: self.name.clone(),
                    declared,
                    found: default.kind(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Current value: the parsed value, else the default, else the zero value.
    pub fn current(&self) -> FlagValue {
        self.state
            .value
            .clone()
            .or_else(|| self.default.clone())
            .unwrap_or_else(|| FlagValue::zero(self.value_kind()))
    }

    /// True once the parser bound a value from the command line.
    pub fn was_set(&self) -> bool {
        self.state.was_set
    }

    pub(crate) fn bind(&mut self, value: FlagValue) {
        self.state.value = Some(value);
        self.state.was_set = true;
    }

    pub(crate) fn reset(&mut self) {
        self.state = FlagState::default();
    }
}

/// The full set of declared flags plus metadata used for usage text.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ArgSet {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,
    /// Flags keyed by canonical name, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub args: IndexMap<String, FlagDef>,
    /// A user flag owns `h`/`help`, so the help intercept is off.
    #[serde(skip)]
    custom_help: bool,
    #[serde(skip)]
    renderer: Option<Arc<dyn UsageRenderer>>,
}

impl fmt::Debug for ArgSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgSet")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("author", &self.author)
            .field("about", &self.about)
            .field("args", &self.args)
            .field("custom_help", &self.custom_help)
            .field("custom_renderer", &self.renderer.is_some())
            .finish()
    }
}

impl ArgSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    /// Replace the usage renderer used for help and missing-required output.
    pub fn with_renderer(mut self, renderer: impl UsageRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Declare a flag under its canonical name.
    pub fn flag(mut self, name: impl Into<String>, def: FlagDef) -> Self {
        self.insert(name, def);
        self
    }

    /// Declare or replace a flag under its canonical name.
    pub fn insert(&mut self, name: impl Into<String>, mut def: FlagDef) {
        let name = name.into();
        def.name = name.clone();
        self.args.insert(name, def);
    }

    /// Merge another registry's flags into this one.
    ///
    /// Incoming flags replace same-named ones; metadata of `self` is kept.
    pub fn import(&mut self, other: ArgSet) {
        for (name, def) in other.args {
            self.insert(name, def);
        }
    }

    /// Copy registry keys into each flag's name. Needed after deserializing.
    pub(crate) fn sync_names(&mut self) {
        for (name, def) in self.args.iter_mut() {
            def.name = name.clone();
        }
    }

    pub fn get(&self, key: &str) -> Option<&FlagDef> {
        self.args.get(key)
    }

    /// Whether a user flag took over `h`/`help`. Only meaningful after validation.
    pub fn has_custom_help(&self) -> bool {
        self.custom_help
    }

    /// Validate the registry.
    ///
    /// Checks, in declaration order:
    /// - every flag has a name or a short form
    /// - explicit types agree with defaults
    /// - short forms and names are unique across both namespaces
    ///
    /// All collisions are collected before failing. Long forms that differ
    /// from the name are not checked.
    pub fn validate(&mut self) -> Result<(), ArgsError> {
        let mut defined: HashMap<String, String> = HashMap::new();
        let mut conflicts = Vec::new();
        self.custom_help = false;

        for (key, def) in self.args.iter_mut() {
            def.name = key.clone();

            let short = def.short_form().map(str::to_string);
            if key.is_empty() && short.is_none() {
                return Err(ArgsError::MissingFlagName);
            }
            def.check_default()?;

            let tokens: Vec<String> = short
                .into_iter()
                .chain(Some(key.clone()).filter(|k| !k.is_empty()))
                .collect();

            let mut collided = false;
            for token in &tokens {
                if let Some(owner) = defined.get(token) {
                    conflicts.push(format!("flag {} already used in arg {}", token, owner));
                    collided = true;
                }
            }
            if collided {
                continue;
            }

            for token in tokens {
                defined.insert(token, key.clone());
            }
            if def.claims_help() {
                self.custom_help = true;
            }
        }

        if !conflicts.is_empty() {
            tracing::debug!(count = conflicts.len(), "flag registry has duplicate keys");
            return Err(ArgsError::DuplicateKey { conflicts });
        }
        Ok(())
    }

    /// Find the flag a tokenized name refers to. First match in declaration order.
    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut FlagDef> {
        self.args.values_mut().find(|def| def.matches(name))
    }

    /// Names of required flags that were not set, in declaration order.
    pub fn missing_required(&self) -> Vec<String> {
        self.args
            .iter()
            .filter(|(_, def)| def.required && !def.was_set())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Clear parse state on every flag.
    pub fn reset(&mut self) {
        for def in self.args.values_mut() {
            def.reset();
        }
    }

    /// Render usage text with the configured renderer.
    pub fn usage(&self) -> String {
        match &self.renderer {
            Some(renderer) => renderer.render(self),
            None => DefaultUsage.render(self),
        }
    }

    pub fn print_usage(&self) {
        println!("{}", self.usage());
    }

    /// One `name=value was_set=bool` line per flag.
    pub fn dump(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|(name, def)| format!("{}={} was_set={}", name, def.current(), def.was_set()))
            .collect()
    }
}
