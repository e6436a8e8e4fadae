//! `FromStr` and boolean converters

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use super::ValueConverter;
use crate::error::ConvertError;

/// Converter using the target type's `FromStr` implementation.
pub struct Parse<T> {
    expected: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Parse<T> {
    /// Override the type name used in error messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::convert::*;
    ///
    /// let err = parse::<u16>().named("port number").convert("http").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "'http' is not a valid port number: invalid digit found in string"
    /// );
    /// ```
    pub fn named(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl<T> Clone for Parse<T> {
    fn clone(&self) -> Self {
        Parse {
            expected: self.expected.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Parse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parse")
            .field("expected", &self.expected)
            .finish()
    }
}

impl<T> ValueConverter<T> for Parse<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn convert(&self, input: &str) -> Result<T, ConvertError> {
        input.parse::<T>().map_err(|e| ConvertError::Invalid {
            input: input.to_string(),
            expected: self.expected.to_string(),
            reason: e.to_string(),
        })
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    match full.find('<') {
        Some(_) => full,
        None => full.rsplit("::").next().unwrap_or(full),
    }
}

/// Create a converter for any `FromStr` type.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
/// use std::net::IpAddr;
///
/// assert_eq!(parse::<i32>().convert("-7").unwrap(), -7);
/// assert!(parse::<IpAddr>().convert("10.0.0.1").is_ok());
/// assert!(parse::<u8>().convert("256").is_err());
/// ```
pub fn parse<T>() -> Parse<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    Parse {
        expected: Cow::Borrowed(short_type_name::<T>()),
        _marker: PhantomData,
    }
}

const TRUE_WORDS: &[&str] = &["true", "yes", "y", "on", "1"];
const FALSE_WORDS: &[&str] = &["false", "no", "n", "off", "0"];

/// Converter for common boolean spellings, ignoring ASCII case.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolConverter;

impl ValueConverter<bool> for BoolConverter {
    fn convert(&self, input: &str) -> Result<bool, ConvertError> {
        let matches = |words: &[&str]| words.iter().any(|w| w.eq_ignore_ascii_case(input));
        if matches(TRUE_WORDS) {
            Ok(true)
        } else if matches(FALSE_WORDS) {
            Ok(false)
        } else {
            Err(ConvertError::Invalid {
                input: input.to_string(),
                expected: "boolean".to_string(),
                reason: "expected one of true/false, yes/no, y/n, on/off, 1/0".to_string(),
            })
        }
    }
}

/// Create a boolean converter.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
///
/// assert_eq!(boolean().convert("Yes").unwrap(), true);
/// assert_eq!(boolean().convert("off").unwrap(), false);
/// assert!(boolean().convert("maybe").is_err());
/// ```
pub fn boolean() -> BoolConverter {
    BoolConverter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        assert_eq!(parse::<u16>().convert("8080").unwrap(), 8080);
        assert_eq!(parse::<f64>().convert("2.5").unwrap(), 2.5);
    }

    #[test]
    fn error_names_type() {
        let err = parse::<u8>().convert("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'x' is not a valid u8: invalid digit found in string"
        );
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<std::net::IpAddr>(), "IpAddr");
    }

    #[test]
    fn booleans() {
        for word in ["true", "TRUE", "y", "On", "1"] {
            assert!(boolean().convert(word).unwrap(), "{}", word);
        }
        for word in ["false", "No", "N", "OFF", "0"] {
            assert!(!boolean().convert(word).unwrap(), "{}", word);
        }
        assert!(matches!(
            boolean().convert(""),
            Err(ConvertError::Invalid { .. })
        ));
    }
}
