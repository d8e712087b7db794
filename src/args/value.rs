//! Flag values — the declared type of a flag and its typed runtime value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ArgsError;

/// Declared type of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Presence flag; never takes a separate value token.
    Bool,
    /// Base-10 signed integer.
    Int,
    /// Any string. Fallback when neither a type nor a default is given.
    String,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Bool => f.write_str("bool"),
            FlagKind::Int => f.write_str("int"),
            FlagKind::String => f.write_str("string"),
        }
    }
}

/// A typed flag value.
///
/// Serialized untagged, so a manifest can write `"default": false`,
/// `"default": 8080` or `"default": "COOL!"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FlagValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Str(_) => FlagKind::String,
        }
    }

    /// Zero value for a kind: `false`, `0` or `""`.
    pub fn zero(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Bool => FlagValue::Bool(false),
            FlagKind::Int => FlagValue::Int(0),
            FlagKind::String => FlagValue::Str(String::new()),
        }
    }

    /// Coerce a raw command-line string into `kind`.
    ///
    /// `flag` is only used to name the offending flag in the error.
    pub fn coerce(raw: &str, kind: FlagKind, flag: &str) -> Result<Self, ArgsError> {
        let failed = || ArgsError::ValueConversion {
            flag: flag.to_string(),
            value: raw.to_string(),
            expected: kind,
        };

        match kind {
            FlagKind::Bool => raw.parse::<bool>().map(FlagValue::Bool).map_err(|_| failed()),
            FlagKind::Int => raw.parse::<i64>().map(FlagValue::Int).map_err(|_| failed()),
            FlagKind::String => Ok(FlagValue::Str(raw.to_string())),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(i) => write!(f, "{}", i),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<i32> for FlagValue {
    fn from(value: i32) -> Self {
        FlagValue::Int(i64::from(value))
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(
            FlagValue::coerce("69", FlagKind::Int, "nums").unwrap(),
            FlagValue::Int(69)
        );
        assert_eq!(
            FlagValue::coerce("-12", FlagKind::Int, "nums").unwrap(),
            FlagValue::Int(-12)
        );
    }

    #[test]
    fn test_coerce_int_failure_names_flag() {
        let err = FlagValue::coerce("sixty", FlagKind::Int, "nums").unwrap_err();
        match err {
            ArgsError::ValueConversion {
                flag,
                value,
                expected,
            } => {
                assert_eq!(flag, "nums");
                assert_eq!(value, "sixty");
                assert_eq!(expected, FlagKind::Int);
            }
            other => panic!("Expected ValueConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_coerce_string_keeps_raw() {
        assert_eq!(
            FlagValue::coerce("", FlagKind::String, "message").unwrap(),
            FlagValue::Str(String::new())
        );
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(FlagValue::zero(FlagKind::Bool), FlagValue::Bool(false));
        assert_eq!(FlagValue::zero(FlagKind::Int), FlagValue::Int(0));
        assert_eq!(FlagValue::zero(FlagKind::String).to_string(), "");
    }

    #[test]
    fn test_untagged_json_shapes() {
        let values: Vec<FlagValue> = serde_json::from_str(r#"[true, 8080, "COOL!"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FlagValue::Bool(true),
                FlagValue::Int(8080),
                FlagValue::Str("COOL!".into())
            ]
        );
    }
}
