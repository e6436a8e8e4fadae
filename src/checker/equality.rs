//! Equality and membership checkers

use std::fmt;

use super::combinators::ValueChecker;
use crate::CheckResult;

/// Decides whether two values are equal for the equality checkers.
pub trait Equality<T: ?Sized>: Send + Sync {
    /// Whether `left` equals `right`.
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// The type's own `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<T: PartialEq + ?Sized> Equality<T> for NaturalEq {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checker for equality with an expected value.
#[derive(Clone, Copy, Debug)]
pub struct EqualTo<T, E = NaturalEq> {
    expected: T,
    equality: E,
}

impl<T, E> EqualTo<T, E> {
    /// Use `equality` instead of the current one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::checker::*;
    ///
    /// let level = eq("info".to_string())
    ///     .with_equality(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    /// assert!(level.check(&"INFO".to_string()).is_success());
    /// ```
    pub fn with_equality<D: Equality<T>>(self, equality: D) -> EqualTo<T, D> {
        EqualTo {
            expected: self.expected,
            equality,
        }
    }
}

impl<T, E> ValueChecker<T> for EqualTo<T, E>
where
    T: fmt::Display + Send + Sync,
    E: Equality<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        CheckResult::from_bool(self.equality.equals(value, &self.expected), || {
            format!("{} is not equal to {}", value, self.expected)
        })
    }
}

/// Create a checker that passes values equal to `expected`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// assert!(eq(5).check(&5).is_success());
/// assert_eq!(eq(5).check(&4).error_message(), Some("4 is not equal to 5"));
/// ```
pub fn eq<T>(expected: T) -> EqualTo<T> {
    EqualTo {
        expected,
        equality: NaturalEq,
    }
}

/// Checker for inequality with a forbidden value.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T, E = NaturalEq> {
    forbidden: T,
    equality: E,
}

impl<T, E> Ne<T, E> {
    /// Use `equality` instead of the current one.
    pub fn with_equality<D: Equality<T>>(self, equality: D) -> Ne<T, D> {
        Ne {
            forbidden: self.forbidden,
            equality,
        }
    }
}

impl<T, E> ValueChecker<T> for Ne<T, E>
where
    T: fmt::Display + Send + Sync,
    E: Equality<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        CheckResult::from_bool(!self.equality.equals(value, &self.forbidden), || {
            format!("value must not be {}", self.forbidden)
        })
    }
}

/// Create a checker that rejects values equal to `forbidden`.
pub fn ne<T>(forbidden: T) -> Ne<T> {
    Ne {
        forbidden,
        equality: NaturalEq,
    }
}

/// Checker for membership in an allowed set.
///
/// An empty set accepts nothing.
#[derive(Clone, Debug)]
pub struct OneOf<T, E = NaturalEq> {
    allowed: Vec<T>,
    equality: E,
}

impl<T, E> OneOf<T, E> {
    /// Use `equality` instead of the current one.
    pub fn with_equality<D: Equality<T>>(self, equality: D) -> OneOf<T, D> {
        OneOf {
            allowed: self.allowed,
            equality,
        }
    }

    /// The allowed values.
    pub fn allowed(&self) -> &[T] {
        &self.allowed
    }
}

impl<T, E> ValueChecker<T> for OneOf<T, E>
where
    T: fmt::Display + Send + Sync,
    E: Equality<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        let found = self
            .allowed
            .iter()
            .any(|allowed| self.equality.equals(value, allowed));
        CheckResult::from_bool(found, || {
            format!("{} is not one of: {}", value, join(&self.allowed))
        })
    }
}

/// Create a checker that passes values found in `allowed`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = one_of([1, 5, 10]);
/// assert!(p.check(&5).is_success());
/// assert_eq!(p.check(&7).error_message(), Some("7 is not one of: 1, 5, 10"));
/// ```
pub fn one_of<T, I>(allowed: I) -> OneOf<T>
where
    I: IntoIterator<Item = T>,
{
    OneOf {
        allowed: allowed.into_iter().collect(),
        equality: NaturalEq,
    }
}

/// Checker for exclusion from a forbidden set.
#[derive(Clone, Debug)]
pub struct NoneOf<T, E = NaturalEq> {
    forbidden: Vec<T>,
    equality: E,
}

impl<T, E> NoneOf<T, E> {
    /// Use `equality` instead of the current one.
    pub fn with_equality<D: Equality<T>>(self, equality: D) -> NoneOf<T, D> {
        NoneOf {
            forbidden: self.forbidden,
            equality,
        }
    }
}

impl<T, E> ValueChecker<T> for NoneOf<T, E>
where
    T: fmt::Display + Send + Sync,
    E: Equality<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        let found = self
            .forbidden
            .iter()
            .any(|forbidden| self.equality.equals(value, forbidden));
        CheckResult::from_bool(!found, || {
            format!("{} is not allowed (excluded: {})", value, join(&self.forbidden))
        })
    }
}

/// Create a checker that rejects values found in `forbidden`.
pub fn none_of<T, I>(forbidden: I) -> NoneOf<T>
where
    I: IntoIterator<Item = T>,
{
    NoneOf {
        forbidden: forbidden.into_iter().collect(),
        equality: NaturalEq,
    }
}
