//! Integration tests for struct binding.

use argset::{ArgSet, ArgsError, Bindings, FlagDef, FlagKind};

#[derive(Debug, Default, PartialEq)]
struct Settings {
    message: String,
    print: bool,
    nums: i64,
    untouched: String,
}

fn app() -> ArgSet {
    ArgSet::new("My App")
        .flag("print", FlagDef::new().with_short("p").with_default(false))
        .flag("message", FlagDef::new().with_short("m").with_default("COOL!"))
        .flag("nums", FlagDef::new().with_short("n").with_default(0))
}

fn bindings() -> Bindings<Settings> {
    Bindings::new()
        .field("message", |s: &mut Settings, v: String| s.message = v)
        .field("print", |s: &mut Settings, v: bool| s.print = v)
        .field("nums", |s: &mut Settings, v: i64| s.nums = v)
}

#[test]
fn bound_fields_match_accessors() {
    let mut set = app();
    set.parse(["--message=test", "-p", "-n", "69"]).unwrap();

    let mut settings = Settings::default();
    let written = bindings().bind(&set, &mut settings).unwrap();

    assert_eq!(written, 3);
    assert_eq!(settings.message, set.string("message"));
    assert_eq!(settings.print, set.bool("print"));
    assert_eq!(settings.nums, set.int("nums"));
    assert_eq!(settings.nums, 69);
}

#[test]
fn defaults_are_bound_when_flags_absent() {
    let mut set = app();
    let mut settings = Settings::default();
    set.parse_into(Vec::<String>::new(), &bindings(), &mut settings)
        .unwrap();

    assert_eq!(settings.message, "COOL!");
    assert!(!settings.print);
    assert_eq!(settings.nums, 0);
}

#[test]
fn unknown_key_leaves_field_untouched() {
    let set = app();
    let bindings = Bindings::new()
        .field("nums", |s: &mut Settings, v: i64| s.nums = v)
        .field("missing", |s: &mut Settings, v: String| s.untouched = v);

    let mut settings = Settings {
        untouched: "keep me".into(),
        ..Settings::default()
    };
    let written = bindings.bind(&set, &mut settings).unwrap();

    assert_eq!(written, 1);
    assert_eq!(settings.untouched, "keep me");
}

#[test]
fn unsupported_field_type_is_an_error() {
    #[derive(Default)]
    struct Ratio {
        value: f64,
    }

    let set = ArgSet::new("t").flag("ratio", FlagDef::new().with_default("0.5"));
    let bindings = Bindings::new().field("ratio", |r: &mut Ratio, v: f64| r.value = v);

    let mut ratio = Ratio::default();
    let err = bindings.bind(&set, &mut ratio).unwrap_err();

    match err {
        ArgsError::UnsupportedBindingType { key, type_name } => {
            assert_eq!(key, "ratio");
            assert_eq!(type_name, "f64");
        }
        other => panic!("Expected UnsupportedBindingType, got {other:?}"),
    }
    assert_eq!(ratio.value, 0.0);
}

#[test]
fn setter_type_must_match_flag_type() {
    #[derive(Default)]
    struct Server {
        port: i64,
    }

    let mut set = ArgSet::new("t").flag("port", FlagDef::new().with_default("8080"));
    set.parse(["--port", "9000"]).unwrap();

    let bindings = Bindings::new().field("port", |s: &mut Server, v: i64| s.port = v);
    let mut server = Server { port: 42 };
    let err = bindings.bind(&set, &mut server).unwrap_err();

    match &err {
        ArgsError::BindingTypeMismatch {
            key,
            flag_type,
            type_name,
        } => {
            assert_eq!(key, "port");
            assert_eq!(*flag_type, FlagKind::String);
            assert_eq!(type_name, "i64");
        }
        other => panic!("Expected BindingTypeMismatch, got {other:?}"),
    }
    assert!(err.to_string().contains("port"));
    assert_eq!(server.port, 42);
}

#[test]
fn bool_setter_on_int_flag_is_a_mismatch() {
    let set = app();
    let bindings = Bindings::new().field("nums", |s: &mut Settings, v: bool| s.print = v);

    let mut settings = Settings::default();
    assert!(matches!(
        bindings.bind(&set, &mut settings),
        Err(ArgsError::BindingTypeMismatch { .. })
    ));
}

#[test]
fn failed_bind_leaves_destination_untouched() {
    let mut set = app();
    set.parse(["-m", "changed", "-n", "5"]).unwrap();

    let bindings = bindings().field("message", |_: &mut Settings, _: u8| {});
    let mut settings = Settings {
        message: "before".into(),
        nums: 1,
        ..Settings::default()
    };
    let err = bindings.bind(&set, &mut settings).unwrap_err();

    assert!(matches!(err, ArgsError::UnsupportedBindingType { .. }));
    assert_eq!(settings.message, "before");
    assert_eq!(settings.nums, 1);
    assert!(!settings.print);
}

#[test]
fn parse_into_does_not_bind_on_failure() {
    let mut set = app();
    let mut settings = Settings::default();
    let result = set.parse_into(["-n", "nope"], &bindings(), &mut settings);

    assert!(result.is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn bindings_debug_lists_keys() {
    let bindings = bindings();
    assert_eq!(bindings.len(), 3);
    assert!(!bindings.is_empty());

    let debug = format!("{:?}", bindings);
    assert!(debug.contains("message"));
    assert!(debug.contains("i64"));
}
