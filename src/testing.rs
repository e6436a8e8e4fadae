//! Testing utilities for checkers
//!
//! Stub checkers with fixed outcomes, a call-counting checker for verifying
//! short-circuit behavior, and assertion macros for [`CheckResult`].
//!
//! # Examples
//!
//! ```rust
//! use argcheck::checker::*;
//! use argcheck::testing::CountingChecker;
//!
//! let first = CountingChecker::failing("first");
//! let second = CountingChecker::failing("second");
//! let both: AllOf<i32> = first.clone().and(second.clone());
//!
//! assert!(both.check(&0).is_failure());
//! assert_eq!(first.calls(), 1);
//! assert_eq!(second.calls(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::checker::ValueChecker;
use crate::CheckResult;

/// Checker that returns the same result for every value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant(CheckResult);

impl<T: ?Sized> ValueChecker<T> for Constant {
    #[inline]
    fn check(&self, _value: &T) -> CheckResult {
        self.0.clone()
    }
}

/// A checker that accepts everything.
pub fn always_succeed() -> Constant {
    Constant(CheckResult::Success)
}

/// A checker that rejects everything with `message`.
pub fn always_fail(message: impl Into<String>) -> Constant {
    Constant(CheckResult::failure(message))
}

/// Checker with a fixed result that counts how often it runs.
///
/// Clones share the counter, so keep a clone to inspect after moving one
/// into a combinator.
#[derive(Clone, Debug)]
pub struct CountingChecker {
    result: CheckResult,
    calls: Arc<AtomicUsize>,
}

impl CountingChecker {
    /// A counting checker that accepts everything.
    pub fn passing() -> Self {
        Self::returning(CheckResult::Success)
    }

    /// A counting checker that rejects everything with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::returning(CheckResult::failure(message))
    }

    /// A counting checker that always returns `result`.
    pub fn returning(result: CheckResult) -> Self {
        CountingChecker {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times any clone of this checker has been run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: ?Sized> ValueChecker<T> for CountingChecker {
    fn check(&self, _value: &T) -> CheckResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Assert that a check passed.
///
/// # Example
///
/// ```rust
/// use argcheck::{CheckResult, assert_success};
///
/// assert_success!(CheckResult::success());
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        match $result {
            $crate::CheckResult::Success => {}
            $crate::CheckResult::Failure(message) => {
                panic!("Expected Success, got Failure: {:?}", message);
            }
        }
    };
}

/// Assert that a check failed.
///
/// # Example
///
/// ```rust
/// use argcheck::{CheckResult, assert_failure};
///
/// assert_failure!(CheckResult::failure("nope"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        match $result {
            $crate::CheckResult::Failure(_) => {}
            $crate::CheckResult::Success => {
                panic!("Expected Failure, got Success");
            }
        }
    };
}

/// Assert that a check failed with a specific message.
///
/// # Example
///
/// ```rust
/// use argcheck::{CheckResult, assert_failure_message};
///
/// assert_failure_message!(CheckResult::failure("too short"), "too short");
/// ```
#[macro_export]
macro_rules! assert_failure_message {
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::CheckResult::Failure(message) => {
                assert_eq!(message.as_str(), $expected);
            }
            $crate::CheckResult::Success => {
                panic!("Expected Failure with message {:?}, got Success", $expected);
            }
        }
    };
}
