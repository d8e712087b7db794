use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use argset::{ArgSet, ArgsError, Bindings, Defaults, FlagDef};

#[derive(Debug, Default)]
struct Settings {
    message: String,
    print: bool,
    nums: i64,
}

fn declare() -> ArgSet {
    ArgSet::new("argset")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_about("Parses a few demo flags and prints what it got")
        .flag(
            "print",
            FlagDef::new()
                .with_short("p")
                .with_help("Allows the cool message to be printed")
                .with_default(false),
        )
        .flag(
            "message",
            FlagDef::new()
                .with_short("m")
                .with_help("Sets a cool message")
                .with_default("COOL!"),
        )
        .flag(
            "nums",
            FlagDef::new()
                .with_short("n")
                .with_help("A really fun number")
                .with_default(0),
        )
        .flag(
            "file",
            FlagDef::new()
                .with_short("f")
                .with_help("Report the size of this file"),
        )
        .flag(
            "defaults",
            FlagDef::new().with_help("Flat TOML or JSON file with flag defaults"),
        )
}

fn bindings() -> Bindings<Settings> {
    Bindings::new()
        .field("message", |s: &mut Settings, v: String| s.message = v)
        .field("print", |s: &mut Settings, v: bool| s.print = v)
        .field("nums", |s: &mut Settings, v: i64| s.nums = v)
}

fn run(tokens: Vec<String>) -> anyhow::Result<()> {
    let mut set = declare();
    let bindings = bindings();
    let mut settings = Settings::default();

    let report = set.parse_into(tokens.iter().cloned(), &bindings, &mut settings)?;

    if set.was_provided_by_user("defaults") {
        let path = set.string("defaults");
        let defaults = Defaults::load_from(Path::new(&path))
            .with_context(|| format!("loading defaults from '{}'", path))?;
        set.apply_defaults(&defaults)?;
        set.reset();
        set.parse_into(tokens.iter().cloned(), &bindings, &mut settings)?;
    }

    for token in &report.ignored {
        tracing::warn!("ignoring argument '{}'", token);
    }

    println!("message={}", settings.message);
    println!("print={}", settings.print);
    println!("nums={}", settings.nums);

    if set.was_provided_by_user("file") {
        let contents = set.file_contents("file")?;
        println!("file_bytes={}", contents.len());
    }

    Ok(())
}

fn main() -> ExitCode {
    argset::logging::init_tracing();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ArgsError>() {
            Some(args_err) if args_err.is_usage_request() => ExitCode::SUCCESS,
            Some(args_err) if args_err.usage_printed() => ExitCode::FAILURE,
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
