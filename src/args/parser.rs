//! Matching engine — raw tokens → values bound into the registry.

use crate::args::binding::Bindings;
use crate::args::registry::{ArgSet, FlagArity, HELP_NAMES};
use crate::args::token::tokenize;
use crate::args::value::FlagValue;
use crate::error::{ArgsError, MissingValueCause};

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Tokens that were not flag-shaped or did not match any flag, in order.
    /// Values consumed by a flag are not listed.
    pub ignored: Vec<String>,
}

/// Parse `tokens` into `set`.
///
/// The registry is validated first. The walk is a single forward pass: a
/// non-boolean flag without an inline value takes the next token as its
/// value unless that token starts with a dash.
pub fn parse(set: &mut ArgSet, tokens: &[String]) -> Result<ParseReport, ArgsError> {
    set.validate()?;

    let mut ignored = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let raw = &tokens[index];
        index += 1;

        let Some(token) = tokenize(raw) else {
            tracing::trace!(token = %raw, "not a flag, skipping");
            ignored.push(raw.clone());
            continue;
        };

        if HELP_NAMES.contains(&token.name) && !set.has_custom_help() {
            set.print_usage();
            return Err(ArgsError::UsageRequested);
        }

        let Some(def) = set.find_mut(token.name) else {
            tracing::debug!(token = %raw, "unknown flag, ignoring");
            ignored.push(raw.clone());
            continue;
        };

        let arity = def.arity();
        if arity == FlagArity::NoValue {
            // Presence alone is the value; an inline `=value` is dropped.
            def.bind(FlagValue::Bool(true));
            continue;
        }

        let raw_value = match token.value {
            Some(value) => value,
            None => {
                let cause = match tokens.get(index) {
                    Some(next) if !next.starts_with('-') => {
                        index += 1;
                        let value = FlagValue::coerce(next, def.value_kind(), def.name())?;
                        def.bind(value);
                        continue;
                    }
                    Some(_) => MissingValueCause::NextIsFlag,
                    None => MissingValueCause::EndOfInput,
                };
                if arity == FlagArity::OptionalValue {
                    tracing::trace!(flag = %def.name(), "optional value not given");
                    continue;
                }
                return Err(ArgsError::MissingValue {
                    flag: def.name().to_string(),
                    forms: def.forms(),
                    cause,
                });
            }
        };

        let value = FlagValue::coerce(raw_value, def.value_kind(), def.name())?;
        def.bind(value);
    }

    let missing = set.missing_required();
    if !missing.is_empty() {
        println!("Missing required arguments: {}", missing.join(", "));
        set.print_usage();
        return Err(ArgsError::MissingRequired { flags: missing });
    }

    for line in set.dump() {
        tracing::trace!("{}", line);
    }

    Ok(ParseReport { ignored })
}

impl ArgSet {
    /// Parse a token sequence. The program name must already be stripped.
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<ParseReport, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        parse(self, &tokens)
    }

    /// Parse the process arguments, skipping the program path.
    pub fn parse_env(&mut self) -> Result<ParseReport, ArgsError> {
        self.parse(std::env::args().skip(1))
    }

    /// Parse, then write bound flags into `dest` before returning.
    pub fn parse_into<I, S, T>(
        &mut self,
        tokens: I,
        bindings: &Bindings<T>,
        dest: &mut T,
    ) -> Result<ParseReport, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let report = self.parse(tokens)?;
        bindings.bind(self, dest)?;
        Ok(report)
    }
}
