//! Struct binding — write parsed flag values into a caller's record.
//!
//! A [`Bindings`] table pairs flag keys with field setters:
//!
//! ```
//! use argset::{ArgSet, Bindings, FlagDef};
//!
//! #[derive(Default)]
//! struct Settings {
//!     port: i64,
//!     verbose: bool,
//! }
//!
//! let mut set = ArgSet::new("demo")
//!     .flag("port", FlagDef::new().with_short("p").with_default(8080))
//!     .flag("verbose", FlagDef::new().with_short("v").with_default(false));
//!
//! let bindings = Bindings::new()
//!     .field("port", |s: &mut Settings, v: i64| s.port = v)
//!     .field("verbose", |s: &mut Settings, v: bool| s.verbose = v);
//!
//! let mut settings = Settings::default();
//! set.parse_into(["-p", "9000", "-v"], &bindings, &mut settings).unwrap();
//! assert_eq!(settings.port, 9000);
//! assert!(settings.verbose);
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::args::registry::ArgSet;
use crate::args::value::FlagKind;
use crate::error::ArgsError;

type Read = fn(&ArgSet, &str) -> Result<Box<dyn Any>, ArgsError>;
type Assign<T> = Box<dyn Fn(&mut T, Box<dyn Any>)>;

struct FieldBinding<T> {
    key: String,
    type_name: &'static str,
    read: Read,
    assign: Assign<T>,
}

/// Table of `(flag key, field setter)` pairs for a destination type `T`.
///
/// Setters take `i64`, `bool` or `String`, matching a flag declared as
/// `int`, `bool` or `string`. Any other argument type is reported as
/// [`ArgsError::UnsupportedBindingType`], a type that disagrees with the flag
/// as [`ArgsError::BindingTypeMismatch`].
pub struct Bindings<T> {
    fields: Vec<FieldBinding<T>>,
}

impl<T> Bindings<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Bind the flag `key` to a field through `setter`.
    pub fn field<F, S>(mut self, key: &str, setter: S) -> Self
    where
        F: Any,
        S: Fn(&mut T, F) + 'static,
    {
        let assign = move |dest: &mut T, value: Box<dyn Any>| {
            // `read_field::<F>` produced the box, so the downcast holds.
            if let Ok(value) = value.downcast::<F>() {
                setter(dest, *value);
            }
        };
        self.fields.push(FieldBinding {
            key: key.to_string(),
            type_name: type_name::<F>(),
            read: read_field::<F>,
            assign: Box::new(assign),
        });
        self
    }

    /// Write every bound flag's current value into `dest`.
    ///
    /// All values are read and type-checked before the first setter runs, so
    /// `dest` is untouched on error. Keys that are not in `set` are skipped.
    /// Returns the number of fields written.
    pub fn bind(&self, set: &ArgSet, dest: &mut T) -> Result<usize, ArgsError> {
        let mut resolved = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if set.get(&field.key).is_none() {
                tracing::debug!(key = %field.key, "no flag for binding, skipping");
                continue;
            }
            resolved.push((field, (field.read)(set, &field.key)?));
        }

        let written = resolved.len();
        for (field, value) in resolved {
            (field.assign)(dest, value);
        }
        Ok(written)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Bindings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|b| (b.key.as_str(), b.type_name)))
            .finish()
    }
}

/// Flag type a setter argument type binds to.
fn kind_of<F: Any>() -> Option<FlagKind> {
    let id = TypeId::of::<F>();
    if id == TypeId::of::<i64>() {
        Some(FlagKind::Int)
    } else if id == TypeId::of::<bool>() {
        Some(FlagKind::Bool)
    } else if id == TypeId::of::<String>() {
        Some(FlagKind::String)
    } else {
        None
    }
}

/// Read a flag through the accessor matching `F`, checked against the
/// flag's declared type.
fn read_field<F: Any>(set: &ArgSet, key: &str) -> Result<Box<dyn Any>, ArgsError> {
    let Some(kind) = kind_of::<F>() else {
        return Err(ArgsError::UnsupportedBindingType {
            key: key.to_string(),
            type_name: type_name::<F>().to_string(),
        });
    };

    let declared = set
        .get(key)
        .map(|def| def.value_kind())
        .unwrap_or(FlagKind::String);
    if declared != kind {
        return Err(ArgsError::BindingTypeMismatch {
            key: key.to_string(),
            flag_type: declared,
            type_name: type_name::<F>().to_string(),
        });
    }

    let value: Box<dyn Any> = match kind {
        FlagKind::Int => Box::new(set.int(key)),
        FlagKind::Bool => Box::new(set.bool(key)),
        FlagKind::String => Box::new(set.string(key)),
    };
    Ok(value)
}
