//! Outcome of a single value check
//!
//! [`CheckResult`] is what every [`ValueChecker`](crate::checker::ValueChecker)
//! returns. A rejected value is not an error in the Rust sense: it is an
//! ordinary `Failure` carrying the message the option framework shows to the
//! user.
//!
//! # Examples
//!
//! ```
//! use argcheck::CheckResult;
//!
//! let ok = CheckResult::success();
//! let bad = CheckResult::failure("port must be below 65536");
//!
//! assert!(ok.is_success());
//! assert_eq!(bad.error_message(), Some("port must be below 65536"));
//! ```

use std::fmt;

/// Either success, or failure with a user-facing message.
///
/// Equality is structural: two failures are equal when their messages are.
///
/// # Examples
///
/// ```
/// use argcheck::CheckResult;
///
/// let r = CheckResult::from_bool(3 > 5, || "3 is not greater than 5".to_string());
/// assert_eq!(r, CheckResult::failure("3 is not greater than 5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckResult {
    /// The value passed the check
    #[default]
    Success,
    /// The value was rejected, with the reason
    Failure(String),
}

impl CheckResult {
    /// Create a successful result
    #[inline]
    pub fn success() -> Self {
        CheckResult::Success
    }

    /// Create a failed result with the given message
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::CheckResult;
    ///
    /// let r = CheckResult::failure("must not be empty");
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        CheckResult::Failure(message.into())
    }

    /// Build a result from a condition, producing the message only on failure
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::CheckResult;
    ///
    /// let value = 7;
    /// let r = CheckResult::from_bool(value % 2 == 0, || format!("{} is odd", value));
    /// assert_eq!(r.error_message(), Some("7 is odd"));
    /// ```
    #[inline]
    pub fn from_bool<F>(condition: bool, message: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition {
            CheckResult::Success
        } else {
            CheckResult::Failure(message())
        }
    }

    /// Convert a `Result`, using the error's `Display` output as the message
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::CheckResult;
    ///
    /// let r = CheckResult::from_result("12x".parse::<u8>().map(|_| ()));
    /// assert_eq!(r.error_message(), Some("invalid digit found in string"));
    /// ```
    pub fn from_result<E: fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => CheckResult::Success,
            Err(error) => CheckResult::Failure(error.to_string()),
        }
    }

    /// Convert into a `Result`, keeping the message as the error
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::CheckResult;
    ///
    /// assert_eq!(CheckResult::success().into_result(), Ok(()));
    /// assert_eq!(
    ///     CheckResult::failure("nope").into_result(),
    ///     Err("nope".to_string())
    /// );
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), String> {
        match self {
            CheckResult::Success => Ok(()),
            CheckResult::Failure(message) => Err(message),
        }
    }

    /// Check if the value passed
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success)
    }

    /// Check if the value was rejected
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckResult::Failure(_))
    }

    /// The failure message, if any
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CheckResult::Success => None,
            CheckResult::Failure(message) => Some(message),
        }
    }

    /// Run another check only if this one succeeded
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::CheckResult;
    ///
    /// let r = CheckResult::failure("first").and_then(|| CheckResult::failure("second"));
    /// assert_eq!(r, CheckResult::failure("first"));
    /// ```
    #[inline]
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> CheckResult,
    {
        match self {
            CheckResult::Success => next(),
            failure => failure,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Success => f.write_str("success"),
            CheckResult::Failure(message) => f.write_str(message),
        }
    }
}

impl From<CheckResult> for Result<(), String> {
    fn from(result: CheckResult) -> Self {
        result.into_result()
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for CheckResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(CheckResult::Success),
            any::<String>().prop_map(CheckResult::Failure),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_message() {
        let r = CheckResult::success();
        assert!(r.is_success());
        assert!(!r.is_failure());
        assert_eq!(r.error_message(), None);
    }

    #[test]
    fn failure_keeps_message() {
        let r = CheckResult::failure("too long");
        assert!(r.is_failure());
        assert_eq!(r.error_message(), Some("too long"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(CheckResult::failure("a"), CheckResult::failure("a"));
        assert_ne!(CheckResult::failure("a"), CheckResult::failure("b"));
        assert_ne!(CheckResult::failure(""), CheckResult::success());
    }

    #[test]
    fn from_bool_builds_message_lazily() {
        let mut called = false;
        let r = CheckResult::from_bool(true, || {
            called = true;
            "unused".to_string()
        });
        assert!(r.is_success());
        assert!(!called);
    }

    #[test]
    fn and_then_skips_after_failure() {
        let r = CheckResult::failure("first").and_then(|| panic!("must not run"));
        assert_eq!(r, CheckResult::failure("first"));

        let r = CheckResult::success().and_then(|| CheckResult::failure("second"));
        assert_eq!(r, CheckResult::failure("second"));
    }

    #[test]
    fn display() {
        assert_eq!(CheckResult::success().to_string(), "success");
        assert_eq!(CheckResult::failure("bad port").to_string(), "bad port");
    }

    #[test]
    fn into_result_roundtrip() {
        let r: Result<(), String> = CheckResult::failure("x").into();
        assert_eq!(r, Err("x".to_string()));
        assert_eq!(
            CheckResult::from_result(Err::<(), _>("y")),
            CheckResult::failure("y")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let r = CheckResult::failure("bad");
        let json = serde_json::to_string(&r).unwrap();
        let back: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
