//! Named-choice converter for enum-like options

use super::ValueConverter;
use crate::checker::StringComparison;
use crate::error::ConvertError;

/// Converter mapping a fixed set of names to values.
///
/// When two entries share a name, the first one wins.
#[derive(Clone, Debug)]
pub struct Choice<T> {
    variants: Vec<(String, T)>,
    comparison: StringComparison,
}

impl<T> Choice<T> {
    /// Match names ignoring case.
    pub fn ignore_case(mut self) -> Self {
        self.comparison = StringComparison::IgnoreCase;
        self
    }

    /// The accepted names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(name, _)| name.as_str())
    }
}

impl<T: Clone + Send + Sync> ValueConverter<T> for Choice<T> {
    fn convert(&self, input: &str) -> Result<T, ConvertError> {
        self.variants
            .iter()
            .find(|(name, _)| self.comparison.equals(name, input))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| ConvertError::UnknownVariant {
                input: input.to_string(),
                choices: self.names().map(str::to_string).collect(),
            })
    }
}

/// Create a converter from `(name, value)` pairs.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Level { Quiet, Normal, Verbose }
///
/// let level = choice([
///     ("quiet", Level::Quiet),
///     ("normal", Level::Normal),
///     ("verbose", Level::Verbose),
/// ])
/// .ignore_case();
///
/// assert_eq!(level.convert("Verbose").unwrap(), Level::Verbose);
/// assert_eq!(
///     level.convert("loud").unwrap_err().to_string(),
///     "'loud' is not one of: quiet, normal, verbose"
/// );
/// ```
pub fn choice<T, S, I>(variants: I) -> Choice<T>
where
    S: Into<String>,
    I: IntoIterator<Item = (S, T)>,
{
    Choice {
        variants: variants
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect(),
        comparison: StringComparison::Ordinal,
    }
}
