//! Closure-backed and inverting checkers

use std::fmt;

use super::combinators::ValueChecker;
use crate::CheckResult;

/// Checker backed by a boolean predicate and a fixed message.
#[derive(Clone)]
pub struct Satisfies<F> {
    predicate: F,
    message: String,
}

impl<F> fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> ValueChecker<T> for Satisfies<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> CheckResult {
        CheckResult::from_bool((self.predicate)(value), || self.message.clone())
    }
}

/// Create a checker from a predicate, failing with `message`.
///
/// For messages that depend on the value, use a closure returning
/// [`CheckResult`] directly.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let even = satisfies(|n: &u32| n % 2 == 0, "must be even");
/// assert!(even.check(&4).is_success());
/// assert_eq!(even.check(&3).error_message(), Some("must be even"));
/// ```
pub fn satisfies<T, F>(predicate: F, message: impl Into<String>) -> Satisfies<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    Satisfies {
        predicate,
        message: message.into(),
    }
}

/// NOT combinator - passes when the inner checker fails.
#[derive(Clone, Debug)]
pub struct Not<C> {
    inner: C,
    message: String,
}

impl<C> Not<C> {
    /// Invert `inner`, failing with `message` when it passes.
    pub fn new(inner: C, message: impl Into<String>) -> Self {
        Not {
            inner,
            message: message.into(),
        }
    }
}

impl<T: ?Sized, C: ValueChecker<T>> ValueChecker<T> for Not<C> {
    #[inline]
    fn check(&self, value: &T) -> CheckResult {
        match self.inner.check(value) {
            CheckResult::Success => CheckResult::Failure(self.message.clone()),
            CheckResult::Failure(_) => CheckResult::Success,
        }
    }
}

/// Invert `inner`, failing with `message` when it passes.
pub fn not<C>(inner: C, message: impl Into<String>) -> Not<C> {
    Not::new(inner, message)
}
