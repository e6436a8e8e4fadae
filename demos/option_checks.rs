//! Option checks example - what a small CLI's argument validation looks like
//!
//! Run with `cargo run --example option_checks -- <port> <level> <include-dirs>`.

use argcheck::checker::{dir_exists, ge, lt, not, one_of, starts_with};
use argcheck::convert::{choice, parse, path, split};
use argcheck::prelude::*;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

struct Options {
    port: u16,
    level: Level,
    includes: Vec<PathBuf>,
}

fn port_parser() -> ValueParser<u16> {
    // Unprivileged ports, or one of the standard web ports
    ValueParser::new(parse::<u16>())
        .named("port")
        .check(ge(1024u16).and(lt(49152u16)).or(one_of([80u16, 443])))
}

fn level_parser() -> ValueParser<Level> {
    ValueParser::new(
        choice([
            ("error", Level::Error),
            ("warn", Level::Warn),
            ("info", Level::Info),
            ("debug", Level::Debug),
        ])
        .ignore_case(),
    )
    .named("level")
}

fn includes_parser() -> Result<ValueParser<Vec<PathBuf>>, BuildError> {
    let no_parent_refs = not(starts_with("..")?, "include paths must not escape the project");
    Ok(ValueParser::new(split(path(), ",")?.trim().skip_empty())
        .named("include-dirs")
        .check(|dirs: &Vec<PathBuf>| {
            CheckResult::from_bool(!dirs.is_empty(), || "at least one directory".to_string())
        })
        .check(move |dirs: &Vec<PathBuf>| {
            dirs.iter()
                .map(|d| no_parent_refs.check(&*d.to_string_lossy()))
                .chain(dirs.iter().map(|d| dir_exists().check(d)))
                .find(CheckResult::is_failure)
                .unwrap_or_default()
        }))
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let [port, level, includes] = args else {
        return Err("usage: option_checks <port> <level> <include-dirs>".to_string());
    };

    let includes_parser = includes_parser().map_err(|e| e.to_string())?;
    let port = port_parser().parse(port).map_err(|e| e.to_string())?;
    let level = level_parser().parse(level).map_err(|e| e.to_string())?;
    let includes = includes_parser.parse(includes).map_err(|e| e.to_string())?;

    Ok(Options {
        port,
        level,
        includes,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Option checks ===\n");

    // A few canned inputs first
    let port = port_parser();
    for input in ["8080", "443", "22", "http"] {
        match port.parse(input) {
            Ok(value) => println!("port {:>6} -> {}", input, value),
            Err(err) => println!("port {:>6} -> error: {}", input, err),
        }
    }

    println!();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return;
    }
    match parse_options(&args) {
        Ok(options) => println!(
            "listening on {} at level {:?}, including {:?}",
            options.port, options.level, options.includes
        ),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    }
}
