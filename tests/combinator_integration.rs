//! End-to-end behavior of the AND / OR combinators over real leaf checkers

use argcheck::checker::*;
use argcheck::testing::{always_fail, always_succeed, CountingChecker};
use argcheck::{assert_failure, assert_failure_message, assert_success, BuildError, CheckResult};
use std::path::PathBuf;

#[test]
fn range_via_and() {
    let digit = ge(0).and(lt(10));

    assert_failure!(digit.check(&-1));
    assert_success!(digit.check(&0));
    assert_success!(digit.check(&9));
    assert_failure_message!(digit.check(&10), "10 is not less than 10");
}

#[test]
fn outside_range_via_or() {
    let outside = le(0).or(gt(10));

    assert_success!(outside.check(&-1));
    assert_success!(outside.check(&11));
    assert_failure_message!(
        outside.check(&5),
        "Resolve one of the following problems:\n  - 5 is not less than or equal to 0\n  - 5 is not greater than 10"
    );
}

#[test]
fn and_short_circuits_on_first_failure() {
    let first = CountingChecker::passing();
    let second = CountingChecker::failing("second failed");
    let third = CountingChecker::failing("third failed");

    let p: AllOf<str> = first.clone().and(second.clone()).and(third.clone());
    assert_failure_message!(p.check("x"), "second failed");

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
    assert_eq!(third.calls(), 0);
}

#[test]
fn or_short_circuits_on_first_success() {
    let first = CountingChecker::failing("nope");
    let second = CountingChecker::passing();
    let third = CountingChecker::passing();

    let p: AnyOf<str> = any_of([first.clone().boxed(), second.clone().boxed(), third.clone().boxed()]);
    assert_success!(p.check("x"));

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
    assert_eq!(third.calls(), 0);
}

#[test]
fn or_of_ands_keeps_groups_opaque() {
    // (a && b) || (c && d)
    let p: AnyOf<i32> = always_fail("a").and(always_succeed()).or(always_succeed().and(always_fail("d")));

    assert_eq!(p.len(), 2);
    assert!(p.children().iter().all(|c| matches!(c, Checker::All(_))));
    assert_eq!(
        p.check(&0),
        CheckResult::failure("Resolve one of the following problems:\n  - a\n  - d")
    );
}

#[test]
fn nested_or_messages_are_indented() {
    let inner: AnyOf<i32> = always_fail("x").or(always_fail("y"));
    let outer = all_of([always_succeed().into_checker(), inner.into_checker()]);
    let p = outer.or(always_fail("z"));

    assert_failure_message!(
        p.check(&0),
        "Resolve one of the following problems:\n  \
         - Resolve one of the following problems:\n      \
         - x\n      \
         - y\n  \
         - z"
    );
}

#[test]
fn string_checks_compose() {
    let name = not_blank()
        .and(len_max(16))
        .and(matches("^[a-z][a-z0-9_]*$").unwrap());

    assert_success!(name.check("user_01"));
    assert_failure_message!(name.check("   "), "value must not be blank");
    assert_failure_message!(
        name.check("9lives"),
        "'9lives' does not match pattern '^[a-z][a-z0-9_]*$'"
    );
    assert_failure!(name.check("a".repeat(17).as_str()));
}

#[test]
fn extension_or_prefix_ignoring_case() {
    let archive = ends_with(".tar.gz")
        .unwrap()
        .ignore_case()
        .or(ends_with(".zip").unwrap().ignore_case());

    assert_success!(archive.check("BACKUP.ZIP"));
    assert_success!(archive.check(&String::from("site.Tar.Gz")));
    assert_failure!(archive.check("notes.txt"));
}

#[test]
fn filesystem_checks_compose() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("config.toml");
    std::fs::write(&existing, "x = 1").unwrap();

    let config = file_exists().and(ends_with(".toml").unwrap());
    assert_success!(config.check(existing.to_str().unwrap()));

    let output: AnyOf<PathBuf> = path_absent().or(dir_exists());
    assert_success!(output.check(&dir.path().join("new")));
    assert_success!(output.check(&dir.path().to_path_buf()));
    assert_failure!(output.check(&existing));
}

#[test]
fn membership_and_negation() {
    let level = one_of(["debug", "info", "warn"]).and(ne("warn"));
    assert_success!(level.check(&"info"));
    assert_failure_message!(level.check(&"warn"), "value must not be warn");

    let odd = satisfies(|n: &i32| n % 2 == 0, "must be even").not("must be odd");
    assert_success!(odd.check(&3));
    assert_failure_message!(odd.check(&4), "must be odd");
}

#[test]
fn missing_entries_are_build_errors() {
    assert!(matches!(
        AnyOf::<i32>::try_new(None::<Vec<Option<Checker<i32>>>>),
        Err(BuildError::MissingList)
    ));
    assert!(matches!(
        AllOf::<i32>::try_pair(None, Some(gt(0).boxed())),
        Err(BuildError::MissingChecker { index: 0 })
    ));
    assert!(matches!(
        AllOf::<i32>::try_pair(Some(gt(0).boxed()), None),
        Err(BuildError::MissingChecker { index: 1 })
    ));
}

#[test]
fn empty_combinators_succeed() {
    assert_success!(all_of::<i32, _>([]).check(&0));
    assert_success!(any_of::<i32, _>([]).check(&0));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Free,
    Pro,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[test]
fn glob_import_keeps_std_eq_usable() {
    fn same<T: Eq>(a: T, b: T) -> bool {
        a == b
    }

    let pro: EqualTo<Tier> = eq(Tier::Pro);
    assert_success!(pro.check(&Tier::Pro));
    assert_failure_message!(pro.check(&Tier::Free), "Free is not equal to Pro");
    assert!(same(Tier::Free, Tier::Free));
}
