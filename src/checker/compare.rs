//! Ordering checkers
//!
//! Threshold and range checks over any ordered value. Each checker uses
//! [`NaturalOrder`] (the type's `PartialOrd`) unless given another
//! [`Comparer`] with `with_comparer`.

use std::cmp::Ordering;
use std::fmt;

use super::combinators::ValueChecker;
use crate::CheckResult;

/// Orders two values for the comparison checkers.
///
/// `None` means the values are incomparable (for example a NaN), which
/// fails every comparison.
pub trait Comparer<T: ?Sized>: Send + Sync {
    /// Compare `left` to `right`.
    fn compare(&self, left: &T, right: &T) -> Option<Ordering>;
}

/// The type's own `PartialOrd` ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

// Blanket impl for total-order closures
impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        Some(self(left, right))
    }
}

/// Which side of the limit a value must fall on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// value > limit
    GreaterThan,
    /// value >= limit
    GreaterOrEqual,
    /// value < limit
    LessThan,
    /// value <= limit
    LessOrEqual,
}

impl Bound {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Bound::GreaterThan => ordering == Ordering::Greater,
            Bound::GreaterOrEqual => ordering != Ordering::Less,
            Bound::LessThan => ordering == Ordering::Less,
            Bound::LessOrEqual => ordering != Ordering::Greater,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Bound::GreaterThan => "greater than",
            Bound::GreaterOrEqual => "greater than or equal to",
            Bound::LessThan => "less than",
            Bound::LessOrEqual => "less than or equal to",
        }
    }
}

/// Checker comparing a value against a fixed limit.
#[derive(Clone, Copy, Debug)]
pub struct Compare<T, C = NaturalOrder> {
    bound: Bound,
    limit: T,
    comparer: C,
}

impl<T> Compare<T> {
    /// Create a comparison using the natural ordering.
    pub fn new(bound: Bound, limit: T) -> Self {
        Compare {
            bound,
            limit,
            comparer: NaturalOrder,
        }
    }
}

impl<T, C> Compare<T, C> {
    /// Use `comparer` instead of the current ordering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::checker::*;
    ///
    /// // Compare by length rather than lexically
    /// let longer = gt("abc".to_string())
    ///     .with_comparer(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// assert!(longer.check(&"abcd".to_string()).is_success());
    /// assert!(longer.check(&"zzz".to_string()).is_failure());
    /// ```
    pub fn with_comparer<D>(self, comparer: D) -> Compare<T, D>
    where
        D: Comparer<T>,
    {
        Compare {
            bound: self.bound,
            limit: self.limit,
            comparer,
        }
    }

    /// The limit values are compared against.
    pub fn limit(&self) -> &T {
        &self.limit
    }

    /// The side of the limit values must fall on.
    pub fn bound(&self) -> Bound {
        self.bound
    }
}

impl<T, C> ValueChecker<T> for Compare<T, C>
where
    T: fmt::Display + Send + Sync,
    C: Comparer<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        let accepted = self
            .comparer
            .compare(value, &self.limit)
            .is_some_and(|ordering| self.bound.accepts(ordering));
        CheckResult::from_bool(accepted, || {
            format!("{} is not {} {}", value, self.bound.describe(), self.limit)
        })
    }
}

/// Create a checker that passes values greater than `limit`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// assert!(gt(5).check(&6).is_success());
/// assert!(gt(5).check(&5).is_failure());
/// ```
pub fn gt<T>(limit: T) -> Compare<T> {
    Compare::new(Bound::GreaterThan, limit)
}

/// Create a checker that passes values greater than or equal to `limit`.
pub fn ge<T>(limit: T) -> Compare<T> {
    Compare::new(Bound::GreaterOrEqual, limit)
}

/// Create a checker that passes values less than `limit`.
pub fn lt<T>(limit: T) -> Compare<T> {
    Compare::new(Bound::LessThan, limit)
}

/// Create a checker that passes values less than or equal to `limit`.
pub fn le<T>(limit: T) -> Compare<T> {
    Compare::new(Bound::LessOrEqual, limit)
}

/// Values greater than zero.
pub fn positive<T: Default>() -> Compare<T> {
    gt(T::default())
}

/// Values less than zero.
pub fn negative<T: Default>() -> Compare<T> {
    lt(T::default())
}

/// Values greater than or equal to zero.
pub fn non_negative<T: Default>() -> Compare<T> {
    ge(T::default())
}

/// Checker for a value in an inclusive range.
///
/// A range with `min > max` accepts nothing.
#[derive(Clone, Copy, Debug)]
pub struct Between<T, C = NaturalOrder> {
    min: T,
    max: T,
    comparer: C,
}

impl<T, C> Between<T, C> {
    /// Use `comparer` instead of the current ordering.
    pub fn with_comparer<D>(self, comparer: D) -> Between<T, D>
    where
        D: Comparer<T>,
    {
        Between {
            min: self.min,
            max: self.max,
            comparer,
        }
    }
}

impl<T, C> ValueChecker<T> for Between<T, C>
where
    T: fmt::Display + Send + Sync,
    C: Comparer<T>,
{
    fn check(&self, value: &T) -> CheckResult {
        let above_min = self
            .comparer
            .compare(value, &self.min)
            .is_some_and(|o| o != Ordering::Less);
        let below_max = self
            .comparer
            .compare(value, &self.max)
            .is_some_and(|o| o != Ordering::Greater);
        CheckResult::from_bool(above_min && below_max, || {
            format!("{} is not between {} and {}", value, self.min, self.max)
        })
    }
}

/// Create a checker for `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = between(0, 100);
/// assert!(p.check(&0).is_success());
/// assert!(p.check(&100).is_success());
/// assert_eq!(p.check(&101).error_message(), Some("101 is not between 0 and 100"));
/// ```
pub fn between<T>(min: T, max: T) -> Between<T> {
    Between {
        min,
        max,
        comparer: NaturalOrder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckerExt;

    #[test]
    fn test_gt() {
        assert!(gt(5).check(&6).is_success());
        assert!(gt(5).check(&5).is_failure());
        assert!(gt(5).check(&4).is_failure());
    }

    #[test]
    fn test_ge() {
        assert!(ge(5).check(&6).is_success());
        assert!(ge(5).check(&5).is_success());
        assert!(ge(5).check(&4).is_failure());
    }

    #[test]
    fn test_lt() {
        assert!(lt(5).check(&4).is_success());
        assert!(lt(5).check(&5).is_failure());
        assert!(lt(5).check(&6).is_failure());
    }

    #[test]
    fn test_le() {
        assert!(le(5).check(&4).is_success());
        assert!(le(5).check(&5).is_success());
        assert!(le(5).check(&6).is_failure());
    }

    #[test]
    fn messages_name_value_and_limit() {
        assert_eq!(
            ge(0).check(&-1).error_message(),
            Some("-1 is not greater than or equal to 0")
        );
        assert_eq!(
            le(1.5).check(&2.0).error_message(),
            Some("2 is not less than or equal to 1.5")
        );
    }

    #[test]
    fn test_sign_helpers() {
        assert!(positive::<i32>().check(&1).is_success());
        assert!(positive::<i32>().check(&0).is_failure());
        assert!(negative::<i64>().check(&-1).is_success());
        assert!(negative::<i64>().check(&0).is_failure());
        assert!(non_negative::<i8>().check(&0).is_success());
        assert!(non_negative::<i8>().check(&-1).is_failure());
    }

    #[test]
    fn test_between() {
        let p = between(0, 100);
        assert!(p.check(&0).is_success());
        assert!(p.check(&50).is_success());
        assert!(p.check(&100).is_success());
        assert!(p.check(&-1).is_failure());
        assert!(p.check(&101).is_failure());
    }

    #[test]
    fn inverted_range_accepts_nothing() {
        let p = between(10, 0);
        assert!(p.check(&5).is_failure());
        assert!(p.check(&0).is_failure());
    }

    #[test]
    fn nan_fails_every_comparison() {
        assert!(gt(0.0_f64).check(&f64::NAN).is_failure());
        assert!(le(0.0_f64).check(&f64::NAN).is_failure());
        assert!(between(0.0_f64, 1.0_f64).check(&f64::NAN).is_failure());
    }

    #[test]
    fn custom_comparer_reverses_order() {
        let p = gt(5).with_comparer(|a: &i32, b: &i32| b.cmp(a));
        assert!(p.check(&4).is_success());
        assert!(p.check(&6).is_failure());

        let r = between(1, 3).with_comparer(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert!(r.check(&-2).is_success());
        assert!(r.check(&-4).is_failure());
    }

    #[test]
    fn range_via_and() {
        let p = ge(0).and(lt(10));
        assert!(p.check(&-1).is_failure());
        assert!(p.check(&0).is_success());
        assert!(p.check(&9).is_success());
        assert!(p.check(&10).is_failure());
    }

    #[test]
    fn outside_range_via_or() {
        let p = le(0).or(gt(10));
        assert!(p.check(&-1).is_success());
        assert!(p.check(&5).is_failure());
        assert!(p.check(&11).is_success());
    }

    #[test]
    fn with_floats() {
        let p = between(0.0_f64, 1.0_f64);
        assert!(p.check(&0.5).is_success());
        assert!(p.check(&-0.1).is_failure());
        assert!(p.check(&1.1).is_failure());
    }
}
