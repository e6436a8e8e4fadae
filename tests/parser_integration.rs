//! ValueParser wiring converters and checkers together

use argcheck::checker::{between, dir_exists, file_exists, gt, len_between, one_of};
use argcheck::convert::{choice, parse, path, split};
use argcheck::prelude::*;
use std::path::PathBuf;
use std::thread;
#[cfg(feature = "tracing")]
use tracing_test::traced_test;

#[test]
fn port_list() {
    let ports = ValueParser::new(split(parse::<u16>(), ",").unwrap().trim())
        .named("--ports")
        .check(|ports: &Vec<u16>| {
            CheckResult::from_bool(!ports.is_empty(), || "at least one port is required".to_string())
        })
        .check(|ports: &Vec<u16>| {
            ports
                .iter()
                .map(|p| gt(1023u16).check(p))
                .find(CheckResult::is_failure)
                .unwrap_or_default()
        });

    assert_eq!(ports.parse("8080, 8443").unwrap(), vec![8080, 8443]);

    let err = ports.parse("").unwrap_err();
    assert_eq!(err.argument(), "--ports");
    assert_eq!(
        err.to_string(),
        "invalid value '' for --ports: at least one port is required"
    );

    assert_eq!(
        ports.parse("8080,80").unwrap_err().to_string(),
        "invalid value '8080,80' for --ports: 80 is not greater than 1023"
    );
}

#[test]
fn conversion_errors_are_reported_before_checks() {
    let level = ValueParser::new(parse::<u8>())
        .named("--level")
        .check(between(1u8, 9));

    assert_eq!(level.parse("5").unwrap(), 5);
    match level.parse("high") {
        Err(ParseError::Conversion { argument, source }) => {
            assert_eq!(argument, "--level");
            assert!(matches!(source, ConvertError::Invalid { .. }));
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert!(matches!(
        level.parse("10"),
        Err(ParseError::Rejected { .. })
    ));
}

#[test]
fn path_must_be_existing_file_or_directory() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.txt");
    std::fs::write(&present, "").unwrap();

    let target: ValueParser<PathBuf> = ValueParser::new(path())
        .named("--target")
        .check(file_exists().or(dir_exists()));

    assert_eq!(target.parse(present.to_str().unwrap()).unwrap(), present);
    assert!(target.parse(dir.path().to_str().unwrap()).is_ok());

    let missing = dir.path().join("missing");
    let message = match target.parse(missing.to_str().unwrap()) {
        Err(ParseError::Rejected { message, .. }) => message,
        other => panic!("unexpected: {:?}", other),
    };
    assert!(message.starts_with("Resolve one of the following problems:\n  - file '"));
    assert_eq!(message.lines().count(), 3);
}

#[test]
fn string_values_with_choice_and_length() {
    let user = ValueParser::new(|s: &str| Ok::<_, ConvertError>(s.to_string()))
        .named("--user")
        .check(len_between(3, 8));
    assert!(user.parse("ab").is_err());
    assert_eq!(user.parse("alice").unwrap(), "alice");

    let color = ValueParser::new(choice([("red", 1), ("green", 2), ("blue", 3)]))
        .check(one_of([1, 3]));
    assert_eq!(color.parse("blue").unwrap(), 3);
    assert_eq!(
        color.parse("green").unwrap_err().to_string(),
        "invalid value 'green' for value: 2 is not one of: 1, 3"
    );
}

#[test]
fn parsers_are_shareable_across_threads() {
    let p = ValueParser::new(parse::<i32>()).check(gt(0));

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let p = p.clone();
            thread::spawn(move || p.parse(&n.to_string()))
        })
        .collect();

    for (n, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap().unwrap(), n);
    }
}

#[cfg(feature = "tracing")]
#[test]
#[traced_test]
fn rejections_are_logged() {
    let p = ValueParser::new(parse::<i32>()).named("--jobs").check(gt(0));

    assert!(p.parse("4").is_ok());
    assert!(!logs_contain("argument rejected"));

    assert!(p.parse("0").is_err());
    assert!(logs_contain("argument rejected"));
    assert!(logs_contain("--jobs"));
}
