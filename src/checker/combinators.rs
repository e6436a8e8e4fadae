//! Core checker trait and logical combinators
//!
//! [`AllOf`] and [`AnyOf`] keep a flat child list: combining an `AllOf` into
//! another `AllOf` splices its children in place instead of nesting a wrapper,
//! and likewise for `AnyOf`. Opposite-kind nesting (an `AnyOf` inside an
//! `AllOf`) is kept as a single opaque child so it keeps its own
//! short-circuit and message semantics.

use std::fmt;
use std::sync::Arc;

use crate::error::BuildError;
use crate::CheckResult;

/// Header line of the message an [`AnyOf`] reports when every child fails.
pub const ANY_OF_HEADER: &str = "Resolve one of the following problems:";

/// A reusable check over values of type `T`.
///
/// Implementations capture their configuration at construction and must not
/// mutate caller-visible state when checking.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let port = ge(1).and(le(65535));
/// assert!(port.check(&8080).is_success());
/// assert!(port.check(&0).is_failure());
/// ```
pub trait ValueChecker<T: ?Sized>: Send + Sync {
    /// Check the value.
    fn check(&self, value: &T) -> CheckResult;

    /// Convert into a [`Checker`] node.
    ///
    /// Leaves wrap themselves in [`Checker::Leaf`]; combinators return their
    /// own variant so they can be flattened.
    fn into_checker(self) -> Checker<T>
    where
        Self: Sized + 'static,
    {
        Checker::Leaf(LeafChecker(Arc::new(self)))
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> ValueChecker<T> for F
where
    F: Fn(&T) -> CheckResult + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> CheckResult {
        self(value)
    }
}

/// A shared, type-erased leaf.
///
/// Only built through [`ValueChecker::into_checker`] or [`Checker::leaf`], so
/// an `AllOf` or `AnyOf` never ends up hidden inside one.
pub struct LeafChecker<T: ?Sized>(Arc<dyn ValueChecker<T>>);

impl<T: ?Sized> Clone for LeafChecker<T> {
    fn clone(&self) -> Self {
        LeafChecker(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for LeafChecker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Leaf")
    }
}

impl<T: ?Sized> ValueChecker<T> for LeafChecker<T> {
    #[inline]
    fn check(&self, value: &T) -> CheckResult {
        self.0.check(value)
    }

    fn into_checker(self) -> Checker<T>
    where
        Self: Sized + 'static,
    {
        Checker::Leaf(self)
    }
}

/// A type-erased checker node.
///
/// Cloning is cheap: leaves are shared behind an `Arc`.
pub enum Checker<T: ?Sized> {
    /// Any single checker that is not a combinator
    Leaf(LeafChecker<T>),
    /// Every child must pass
    All(AllOf<T>),
    /// At least one child must pass
    Any(AnyOf<T>),
}

impl<T: ?Sized> Clone for Checker<T> {
    fn clone(&self) -> Self {
        match self {
            Checker::Leaf(leaf) => Checker::Leaf(leaf.clone()),
            Checker::All(all) => Checker::All(all.clone()),
            Checker::Any(any) => Checker::Any(any.clone()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Checker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checker::Leaf(leaf) => leaf.fmt(f),
            Checker::All(all) => all.fmt(f),
            Checker::Any(any) => any.fmt(f),
        }
    }
}

impl<T: ?Sized> Checker<T> {
    /// Wrap any checker, keeping `AllOf` / `AnyOf` as their own variants.
    pub fn leaf<C>(checker: C) -> Self
    where
        C: ValueChecker<T> + 'static,
    {
        checker.into_checker()
    }
}

impl<T: ?Sized> ValueChecker<T> for Checker<T> {
    #[inline]
    fn check(&self, value: &T) -> CheckResult {
        match self {
            Checker::Leaf(leaf) => leaf.check(value),
            Checker::All(all) => all.check(value),
            Checker::Any(any) => any.check(value),
        }
    }

    fn into_checker(self) -> Checker<T>
    where
        Self: Sized + 'static,
    {
        self
    }
}

impl<T: ?Sized> From<AllOf<T>> for Checker<T> {
    fn from(all: AllOf<T>) -> Self {
        Checker::All(all)
    }
}

impl<T: ?Sized> From<AnyOf<T>> for Checker<T> {
    fn from(any: AnyOf<T>) -> Self {
        Checker::Any(any)
    }
}

#[derive(Clone, Copy)]
enum Kind {
    All,
    Any,
}

/// Splice same-kind children into one list, preserving order.
fn flatten<T: ?Sized>(kind: Kind, items: Vec<Checker<T>>) -> Vec<Checker<T>> {
    let len = items
        .iter()
        .map(|item| match (kind, item) {
            (Kind::All, Checker::All(inner)) => inner.children.len(),
            (Kind::Any, Checker::Any(inner)) => inner.children.len(),
            _ => 1,
        })
        .sum();

    let mut children = Vec::with_capacity(len);
    for item in items {
        match (kind, item) {
            (Kind::All, Checker::All(inner)) => children.extend(inner.children),
            (Kind::Any, Checker::Any(inner)) => children.extend(inner.children),
            (_, other) => children.push(other),
        }
    }
    children
}

fn collect_present<T: ?Sized, I>(checkers: Option<I>) -> Result<Vec<Checker<T>>, BuildError>
where
    I: IntoIterator<Item = Option<Checker<T>>>,
{
    checkers
        .ok_or(BuildError::MissingList)?
        .into_iter()
        .enumerate()
        .map(|(index, checker)| checker.ok_or(BuildError::MissingChecker { index }))
        .collect()
}

/// AND combinator - every child must pass.
///
/// Reports the first failing child's message, in child order, and does not
/// evaluate the remaining children. An empty `AllOf` always succeeds.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let digit = ge(0).and(lt(10));
/// assert!(digit.check(&9).is_success());
/// assert_eq!(
///     digit.check(&10).error_message(),
///     Some("10 is not less than 10")
/// );
/// ```
pub struct AllOf<T: ?Sized> {
    children: Vec<Checker<T>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Build from a list of checkers, flattening nested `AllOf` nodes.
    pub fn new<I>(checkers: I) -> Self
    where
        I: IntoIterator<Item = Checker<T>>,
    {
        AllOf {
            children: flatten(Kind::All, checkers.into_iter().collect()),
        }
    }

    /// Combine two checkers.
    pub fn pair<A, B>(first: A, second: B) -> Self
    where
        A: ValueChecker<T> + 'static,
        B: ValueChecker<T> + 'static,
    {
        Self::new([first.into_checker(), second.into_checker()])
    }

    /// Build from a list whose entries may be missing.
    ///
    /// Fails with [`BuildError::MissingList`] when the list itself is absent
    /// and [`BuildError::MissingChecker`] for the first absent entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::checker::*;
    /// use argcheck::BuildError;
    ///
    /// let err = AllOf::<i32>::try_new(Some([Some(gt(0).into_checker()), None]));
    /// assert!(matches!(err, Err(BuildError::MissingChecker { index: 1 })));
    /// ```
    pub fn try_new<I>(checkers: Option<I>) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Option<Checker<T>>>,
    {
        Ok(Self::new(collect_present(checkers)?))
    }

    /// Combine two checkers that may be missing.
    pub fn try_pair(
        first: Option<Checker<T>>,
        second: Option<Checker<T>>,
    ) -> Result<Self, BuildError> {
        Self::try_new(Some([first, second]))
    }

    /// The flattened children, in evaluation order.
    pub fn children(&self) -> &[Checker<T>] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> ValueChecker<T> for AllOf<T> {
    fn check(&self, value: &T) -> CheckResult {
        for (_index, child) in self.children.iter().enumerate() {
            let result = child.check(value);
            if result.is_failure() {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    index = _index,
                    children = self.children.len(),
                    reason = %result,
                    "all-of check rejected value"
                );
                return result;
            }
        }
        CheckResult::Success
    }

    fn into_checker(self) -> Checker<T>
    where
        Self: Sized + 'static,
    {
        Checker::All(self)
    }
}

impl<T: ?Sized> Clone for AllOf<T> {
    fn clone(&self) -> Self {
        AllOf {
            children: self.children.clone(),
        }
    }
}

impl<T: ?Sized> Default for AllOf<T> {
    fn default() -> Self {
        AllOf {
            children: Vec::new(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllOf").field(&self.children).finish()
    }
}

impl<T: ?Sized> FromIterator<Checker<T>> for AllOf<T> {
    fn from_iter<I: IntoIterator<Item = Checker<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// OR combinator - at least one child must pass.
///
/// Stops at the first passing child. When every child fails, the message
/// lists each child's reason under [`ANY_OF_HEADER`], in child order. An
/// empty `AnyOf` always succeeds.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let outside = le(0).or(gt(10));
/// assert!(outside.check(&-1).is_success());
/// assert_eq!(
///     outside.check(&5).error_message(),
///     Some("Resolve one of the following problems:\n  - 5 is not less than or equal to 0\n  - 5 is not greater than 10")
/// );
/// ```
pub struct AnyOf<T: ?Sized> {
    children: Vec<Checker<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    /// Build from a list of checkers, flattening nested `AnyOf` nodes.
    pub fn new<I>(checkers: I) -> Self
    where
        I: IntoIterator<Item = Checker<T>>,
    {
        AnyOf {
            children: flatten(Kind::Any, checkers.into_iter().collect()),
        }
    }

    /// Combine two checkers.
    pub fn pair<A, B>(first: A, second: B) -> Self
    where
        A: ValueChecker<T> + 'static,
        B: ValueChecker<T> + 'static,
    {
        Self::new([first.into_checker(), second.into_checker()])
    }

    /// Build from a list whose entries may be missing.
    ///
    /// See [`AllOf::try_new`].
    pub fn try_new<I>(checkers: Option<I>) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Option<Checker<T>>>,
    {
        Ok(Self::new(collect_present(checkers)?))
    }

    /// Combine two checkers that may be missing.
    pub fn try_pair(
        first: Option<Checker<T>>,
        second: Option<Checker<T>>,
    ) -> Result<Self, BuildError> {
        Self::try_new(Some([first, second]))
    }

    /// The flattened children, in evaluation order.
    pub fn children(&self) -> &[Checker<T>] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

fn aggregate(messages: &[String]) -> String {
    let mut out = String::from(ANY_OF_HEADER);
    for message in messages {
        out.push_str("\n  - ");
        for (i, line) in message.split('\n').enumerate() {
            if i > 0 {
                out.push_str("\n    ");
            }
            out.push_str(line);
        }
    }
    out
}

impl<T: ?Sized> ValueChecker<T> for AnyOf<T> {
    fn check(&self, value: &T) -> CheckResult {
        if self.children.is_empty() {
            return CheckResult::Success;
        }

        let mut messages = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match child.check(value) {
                CheckResult::Success => return CheckResult::Success,
                CheckResult::Failure(message) => messages.push(message),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            children = self.children.len(),
            "no any-of alternative accepted value"
        );
        CheckResult::Failure(aggregate(&messages))
    }

    fn into_checker(self) -> Checker<T>
    where
        Self: Sized + 'static,
    {
        Checker::Any(self)
    }
}

impl<T: ?Sized> Clone for AnyOf<T> {
    fn clone(&self) -> Self {
        AnyOf {
            children: self.children.clone(),
        }
    }
}

impl<T: ?Sized> Default for AnyOf<T> {
    fn default() -> Self {
        AnyOf {
            children: Vec::new(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyOf").field(&self.children).finish()
    }
}

impl<T: ?Sized> FromIterator<Checker<T>> for AnyOf<T> {
    fn from_iter<I: IntoIterator<Item = Checker<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Combine two checkers with AND logic.
pub fn and<T, A, B>(first: A, second: B) -> AllOf<T>
where
    T: ?Sized,
    A: ValueChecker<T> + 'static,
    B: ValueChecker<T> + 'static,
{
    AllOf::pair(first, second)
}

/// Combine two checkers with OR logic.
pub fn or<T, A, B>(first: A, second: B) -> AnyOf<T>
where
    T: ?Sized,
    A: ValueChecker<T> + 'static,
    B: ValueChecker<T> + 'static,
{
    AnyOf::pair(first, second)
}

/// Combine a list of checkers with AND logic.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = all_of([gt(0).into_checker(), lt(100).into_checker(), ne(50).into_checker()]);
/// assert!(p.check(&10).is_success());
/// assert!(p.check(&50).is_failure());
/// ```
pub fn all_of<T, I>(checkers: I) -> AllOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = Checker<T>>,
{
    AllOf::new(checkers)
}

/// Combine a list of checkers with OR logic.
pub fn any_of<T, I>(checkers: I) -> AnyOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = Checker<T>>,
{
    AnyOf::new(checkers)
}

/// Extension trait for combining checkers.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
///
/// let p = gt(0).and(lt(100)).not("value must be outside 1..=99");
/// assert!(p.check(&-5).is_success());
/// assert!(p.check(&50).is_failure());
/// ```
pub trait CheckerExt<T: ?Sized>: ValueChecker<T> + Sized + 'static {
    /// Combine with AND logic.
    fn and<C: ValueChecker<T> + 'static>(self, other: C) -> AllOf<T> {
        AllOf::pair(self, other)
    }

    /// Combine with OR logic.
    fn or<C: ValueChecker<T> + 'static>(self, other: C) -> AnyOf<T> {
        AnyOf::pair(self, other)
    }

    /// Invert, failing with `message` when the inner checker passes.
    fn not(self, message: impl Into<String>) -> super::Not<Self> {
        super::Not::new(self, message)
    }

    /// Erase the concrete type.
    fn boxed(self) -> Checker<T> {
        self.into_checker()
    }
}

impl<T: ?Sized, C: ValueChecker<T> + 'static> CheckerExt<T> for C {}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::testing::always_fail;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn failed_any_of_is_traced() {
        let p: AnyOf<str> = always_fail("A").or(always_fail("B"));
        assert!(p.check("x").is_failure());
        assert!(logs_contain("no any-of alternative accepted value"));
    }
}
