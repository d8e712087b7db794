//! Flag tokenizer — raw argument string → dashes, name, optional inline value.

use regex::Regex;
use std::sync::LazyLock;

// -x, --name, --name=value. The name cannot start with a dash so the dash run
// is always taken whole.
static FLAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(-+)([A-Za-z0-9_][A-Za-z0-9_-]*)(?:=(.*))?$")
        .expect("static regex must compile")
});

/// A raw argument that has the shape of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagToken<'a> {
    /// Number of leading dashes.
    pub dashes: usize,
    /// Name after the dashes, without any `=value` suffix.
    pub name: &'a str,
    /// Inline value from `--name=value`. `Some("")` for `--name=`.
    pub value: Option<&'a str>,
}

/// Split a raw argument into its flag parts.
///
/// Returns `None` for anything that is not flag-shaped (positional values,
/// a lone `-`, `--`, names with other punctuation).
pub fn tokenize(raw: &str) -> Option<FlagToken<'_>> {
    let caps = FLAG_PATTERN.captures(raw)?;
    let dashes = caps.get(1)?.as_str().len();
    let name = caps.get(2)?.as_str();
    let value = caps.get(3).map(|m| m.as_str());

    Some(FlagToken {
        dashes,
        name,
        value,
    })
}
