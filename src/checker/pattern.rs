//! Regular expression checker
//!
//! The `regex` engine runs in time linear in the input, so there is no match
//! timeout to configure.

use regex::{Regex, RegexBuilder};

use super::combinators::ValueChecker;
use super::string::StringComparison;
use crate::error::BuildError;
use crate::CheckResult;

/// Checker that a string matches a regular expression.
///
/// The pattern is searched for anywhere in the value; anchor it with `^...$`
/// to require a full match.
#[derive(Clone, Debug)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Wrap an already compiled expression.
    pub fn new(regex: Regex) -> Self {
        Matches { regex }
    }

    /// The compiled expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl<S: AsRef<str> + ?Sized> ValueChecker<S> for Matches {
    fn check(&self, value: &S) -> CheckResult {
        let value = value.as_ref();
        CheckResult::from_bool(self.regex.is_match(value), || {
            format!(
                "'{}' does not match pattern '{}'",
                value,
                self.regex.as_str()
            )
        })
    }
}

/// Compile `pattern` into a checker.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let semver = matches(r"^\d+\.\d+\.\d+$").unwrap();
/// assert!(semver.check("1.2.3").is_success());
/// assert!(semver.check("1.2").is_failure());
/// assert!(matches("(").is_err());
/// ```
pub fn matches(pattern: &str) -> Result<Matches, BuildError> {
    Ok(Matches::new(Regex::new(pattern)?))
}

/// Compile `pattern` with the given case handling.
pub fn matches_with(pattern: &str, comparison: StringComparison) -> Result<Matches, BuildError> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(comparison == StringComparison::IgnoreCase)
        .build()?;
    Ok(Matches::new(regex))
}
