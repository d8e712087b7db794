//! Usage text rendering.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::args::registry::ArgSet;

/// Renders human-readable usage text for a registry.
///
/// Invoked automatically when help is requested or required flags are
/// missing. Plug in a custom one with [`ArgSet::with_renderer`].
pub trait UsageRenderer: Send + Sync {
    fn render(&self, set: &ArgSet) -> String;
}

/// Default renderer: header, then one entry per flag with its forms and help.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUsage;

impl UsageRenderer for DefaultUsage {
    fn render(&self, set: &ArgSet) -> String {
        let mut usage = String::new();

        let mut header = set.name.as_str().blue().to_string();
        if !set.version.is_empty() {
            header.push(' ');
            header.push_str(&set.version);
        }
        let _ = writeln!(usage, "{}", header);
        if !set.author.is_empty() {
            let _ = writeln!(usage, "{}", set.author);
        }
        if !set.about.is_empty() {
            let _ = writeln!(usage, "  {}", set.about);
        }

        let _ = writeln!(usage);
        let _ = writeln!(usage, "Usage: {} [option]", set.name);
        if set.args.is_empty() {
            return usage;
        }

        let _ = writeln!(usage);
        let _ = writeln!(usage, "Options:");
        for (name, def) in &set.args {
            let mut line = format!("    {}: {}", name.as_str().blue(), def.forms());
            if def.required {
                line.push_str(" (required)");
            }
            if let Some(default) = &def.default {
                let _ = write!(line, " [default: {}]", default);
            }
            let _ = writeln!(usage, "{}", line);
            if !def.help.is_empty() {
                let _ = writeln!(usage, "\t{}", def.help);
            }
        }
        usage
    }
}
