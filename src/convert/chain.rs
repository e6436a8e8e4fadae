//! Two-stage converter pipelines

use std::fmt;
use std::marker::PhantomData;

use super::ValueConverter;
use crate::error::ConvertError;

/// Converter feeding another converter's output into a fallible stage.
///
/// Created by [`ConverterExt::then`].
pub struct Then<A, F, T> {
    first: A,
    next: F,
    _marker: PhantomData<fn() -> T>,
}

impl<A, F, T, U> ValueConverter<U> for Then<A, F, T>
where
    A: ValueConverter<T>,
    F: Fn(T) -> Result<U, ConvertError> + Send + Sync,
{
    fn convert(&self, input: &str) -> Result<U, ConvertError> {
        (self.next)(self.first.convert(input)?)
    }
}

impl<A: Clone, F: Clone, T> Clone for Then<A, F, T> {
    fn clone(&self) -> Self {
        Then {
            first: self.first.clone(),
            next: self.next.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A: fmt::Debug, F, T> fmt::Debug for Then<A, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Then")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

/// Converter mapping another converter's output.
///
/// Created by [`ConverterExt::map`].
pub struct Map<A, F, T> {
    first: A,
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<A, F, T, U> ValueConverter<U> for Map<A, F, T>
where
    A: ValueConverter<T>,
    F: Fn(T) -> U + Send + Sync,
{
    fn convert(&self, input: &str) -> Result<U, ConvertError> {
        self.first.convert(input).map(&self.f)
    }
}

impl<A: Clone, F: Clone, T> Clone for Map<A, F, T> {
    fn clone(&self) -> Self {
        Map {
            first: self.first.clone(),
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A: fmt::Debug, F, T> fmt::Debug for Map<A, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

/// Extension trait for pipelining converters.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
/// use argcheck::ConvertError;
///
/// let even = parse::<u32>().then(|n: u32| {
///     if n % 2 == 0 {
///         Ok(n)
///     } else {
///         Err(ConvertError::custom(format!("{} is odd", n)))
///     }
/// });
/// assert_eq!(even.convert("8").unwrap(), 8);
/// assert_eq!(even.convert("7").unwrap_err().to_string(), "7 is odd");
/// ```
pub trait ConverterExt<T>: ValueConverter<T> + Sized {
    /// Pass the converted value through a fallible stage.
    fn then<U, F>(self, next: F) -> Then<Self, F, T>
    where
        F: Fn(T) -> Result<U, ConvertError> + Send + Sync,
    {
        Then {
            first: self,
            next,
            _marker: PhantomData,
        }
    }

    /// Transform the converted value.
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        F: Fn(T) -> U + Send + Sync,
    {
        Map {
            first: self,
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, C: ValueConverter<T>> ConverterExt<T> for C {}
