//! String checkers
//!
//! Every checker here accepts any `AsRef<str>` value, so the same checker
//! works on `str`, `String` and `&str`.

use std::borrow::Cow;

use super::combinators::ValueChecker;
use crate::error::BuildError;
use crate::CheckResult;

/// How strings are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringComparison {
    /// Exact, character by character
    #[default]
    Ordinal,
    /// Unicode lowercase folding before comparing
    IgnoreCase,
}

impl StringComparison {
    /// Fold `s` according to this comparison.
    pub fn fold<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            StringComparison::Ordinal => Cow::Borrowed(s),
            StringComparison::IgnoreCase => Cow::Owned(s.to_lowercase()),
        }
    }

    /// Whether `left` and `right` are equal under this comparison.
    pub fn equals(self, left: &str, right: &str) -> bool {
        self.fold(left) == self.fold(right)
    }

    fn note(self) -> &'static str {
        match self {
            StringComparison::Ordinal => "",
            StringComparison::IgnoreCase => " (ignoring case)",
        }
    }
}

// Generates a substring-style checker that rejects an empty needle.
macro_rules! needle_checker {
    ($(#[$meta:meta])* $name:ident, $what:literal, $verb:literal, $method:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            needle: String,
            comparison: StringComparison,
        }

        impl $name {
            #[doc = concat!("Create the checker; fails if the ", $what, " is empty.")]
            pub fn new(needle: impl Into<String>) -> Result<Self, BuildError> {
                let needle = needle.into();
                if needle.is_empty() {
                    return Err(BuildError::EmptyArgument { what: $what });
                }
                Ok($name {
                    needle,
                    comparison: StringComparison::Ordinal,
                })
            }

            /// Compare ignoring case.
            pub fn ignore_case(self) -> Self {
                self.comparison(StringComparison::IgnoreCase)
            }

            /// Set the comparison mode.
            pub fn comparison(mut self, comparison: StringComparison) -> Self {
                self.comparison = comparison;
                self
            }
        }

        impl<S: AsRef<str> + ?Sized> ValueChecker<S> for $name {
            fn check(&self, value: &S) -> CheckResult {
                let value = value.as_ref();
                let haystack = self.comparison.fold(value);
                let needle = self.comparison.fold(&self.needle);
                CheckResult::from_bool(haystack.$method(&*needle), || {
                    format!(
                        "'{}' does not {} '{}'{}",
                        value,
                        $verb,
                        self.needle,
                        self.comparison.note()
                    )
                })
            }
        }
    };
}

needle_checker!(
    /// Checker that a string starts with a prefix.
    StartsWith,
    "prefix",
    "start with",
    starts_with
);

needle_checker!(
    /// Checker that a string ends with a suffix.
    EndsWith,
    "suffix",
    "end with",
    ends_with
);

needle_checker!(
    /// Checker that a string contains a substring.
    Contains,
    "substring",
    "contain",
    contains
);

/// Create a checker that passes strings starting with `prefix`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = starts_with("http").unwrap();
/// assert!(p.check("https://example.com").is_success());
/// assert!(p.check("ftp://example.com").is_failure());
/// assert!(starts_with("").is_err());
/// ```
pub fn starts_with(prefix: impl Into<String>) -> Result<StartsWith, BuildError> {
    StartsWith::new(prefix)
}

/// Create a checker that passes strings ending with `suffix`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = ends_with(".TOML").unwrap().ignore_case();
/// assert!(p.check("config.toml").is_success());
/// ```
pub fn ends_with(suffix: impl Into<String>) -> Result<EndsWith, BuildError> {
    EndsWith::new(suffix)
}

/// Create a checker that passes strings containing `needle`.
pub fn contains(needle: impl Into<String>) -> Result<Contains, BuildError> {
    Contains::new(needle)
}

/// Checker that a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl<S: AsRef<str> + ?Sized> ValueChecker<S> for NotEmpty {
    #[inline]
    fn check(&self, value: &S) -> CheckResult {
        CheckResult::from_bool(!value.as_ref().is_empty(), || {
            "value must not be empty".to_string()
        })
    }
}

/// Create a checker that rejects the empty string.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Checker that a string has a non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl<S: AsRef<str> + ?Sized> ValueChecker<S> for NotBlank {
    #[inline]
    fn check(&self, value: &S) -> CheckResult {
        CheckResult::from_bool(!value.as_ref().trim().is_empty(), || {
            "value must not be blank".to_string()
        })
    }
}

/// Create a checker that rejects empty and all-whitespace strings.
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Checker that a string's length in characters is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    fn describe(&self) -> String {
        if self.min == self.max {
            format!("exactly {}", self.min)
        } else if self.max == usize::MAX {
            format!("at least {}", self.min)
        } else if self.min == 0 {
            format!("at most {}", self.max)
        } else {
            format!("between {} and {}", self.min, self.max)
        }
    }
}

impl<S: AsRef<str> + ?Sized> ValueChecker<S> for LenBetween {
    fn check(&self, value: &S) -> CheckResult {
        let value = value.as_ref();
        let len = value.chars().count();
        CheckResult::from_bool(len >= self.min && len <= self.max, || {
            format!(
                "'{}' must be {} characters long (got {})",
                value,
                self.describe(),
                len
            )
        })
    }
}

/// Create a checker for `min <= chars <= max`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = len_between(3, 10);
/// assert!(p.check("abc").is_success());
/// assert_eq!(
///     p.check("ab").error_message(),
///     Some("'ab' must be between 3 and 10 characters long (got 2)")
/// );
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a checker for at least `min` characters.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a checker for at most `max` characters.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a checker for exactly `len` characters.
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}
