//! Convert-then-check pipeline for a single argument
//!
//! A [`ValueParser`] is what an option framework calls for each raw argument:
//! it converts the string, runs the checker over the converted value and
//! either hands back the typed value or a [`ParseError`] naming the argument.
//!
//! # Example
//!
//! ```rust
//! use argcheck::prelude::*;
//! use argcheck::checker::between;
//! use argcheck::convert::parse;
//!
//! let port = ValueParser::new(parse::<u16>())
//!     .named("--port")
//!     .check(between(1024u16, 49151));
//!
//! assert_eq!(port.parse("8080").unwrap(), 8080);
//! assert_eq!(
//!     port.parse("80").unwrap_err().to_string(),
//!     "invalid value '80' for --port: 80 is not between 1024 and 49151"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::checker::{AllOf, Checker, ValueChecker};
use crate::convert::ValueConverter;
use crate::error::ParseError;
use crate::CheckResult;

const DEFAULT_NAME: &str = "value";

/// Converter plus checker for one argument.
pub struct ValueParser<T> {
    name: String,
    converter: Arc<dyn ValueConverter<T>>,
    checker: Checker<T>,
}

impl<T: 'static> ValueParser<T> {
    /// Create a parser that accepts every converted value.
    pub fn new<C>(converter: C) -> Self
    where
        C: ValueConverter<T> + 'static,
    {
        ValueParser {
            name: DEFAULT_NAME.to_string(),
            converter: Arc::new(converter),
            checker: AllOf::default().into_checker(),
        }
    }

    /// Set the argument name used in errors.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a checker, ANDed after the ones already present.
    pub fn check<C>(mut self, checker: C) -> Self
    where
        C: ValueChecker<T> + 'static,
    {
        self.checker = AllOf::pair(self.checker, checker).into_checker();
        self
    }

    /// Convert `input` and check the result.
    pub fn parse(&self, input: &str) -> Result<T, ParseError> {
        let outcome = self.run(input);

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &outcome {
                tracing::debug!(argument = %self.name, error = %err, "argument rejected");
            }
        }

        outcome
    }

    /// Parse every input, stopping at the first error.
    pub fn parse_all<'a, I>(&self, inputs: I) -> Result<Vec<T>, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs.into_iter().map(|input| self.parse(input)).collect()
    }

    fn run(&self, input: &str) -> Result<T, ParseError> {
        let value = self
            .converter
            .convert(input)
            .map_err(|source| ParseError::Conversion {
                argument: self.name.clone(),
                source,
            })?;

        match self.checker.check(&value) {
            CheckResult::Success => Ok(value),
            CheckResult::Failure(message) => Err(ParseError::Rejected {
                argument: self.name.clone(),
                input: input.to_string(),
                message,
            }),
        }
    }
}

impl<T> ValueParser<T> {
    /// The argument name used in errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The combined checker.
    pub fn checker(&self) -> &Checker<T> {
        &self.checker
    }
}

impl<T> Clone for ValueParser<T> {
    fn clone(&self) -> Self {
        ValueParser {
            name: self.name.clone(),
            converter: Arc::clone(&self.converter),
            checker: self.checker.clone(),
        }
    }
}

impl<T> fmt::Debug for ValueParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueParser")
            .field("name", &self.name)
            .field("checker", &self.checker)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{gt, lt, CheckerExt};
    use crate::convert::parse;
    use crate::error::ConvertError;

    #[test]
    fn default_name_and_no_checks() {
        let p = ValueParser::new(parse::<i32>());
        assert_eq!(p.name(), "value");
        assert_eq!(p.parse("-3").unwrap(), -3);
        assert!(p.checker().check(&i32::MIN).is_success());
    }

    #[test]
    fn conversion_failure_names_argument() {
        let p = ValueParser::new(parse::<i32>()).named("--count");
        match p.parse("ten") {
            Err(ParseError::Conversion { argument, source }) => {
                assert_eq!(argument, "--count");
                assert!(matches!(source, ConvertError::Invalid { .. }));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn checks_accumulate_into_one_flat_and() {
        let p = ValueParser::new(parse::<i32>())
            .check(gt(0))
            .check(lt(10).and(gt(1)));

        match p.checker() {
            Checker::All(all) => assert_eq!(all.len(), 3),
            other => panic!("expected AllOf, got {:?}", other),
        }
        assert_eq!(p.parse("5").unwrap(), 5);
        assert_eq!(
            p.parse("1").unwrap_err().to_string(),
            "invalid value '1' for value: 1 is not greater than 1"
        );
    }

    #[test]
    fn parse_all_stops_at_first_error() {
        let p = ValueParser::new(parse::<u8>()).check(gt(0u8));
        assert_eq!(p.parse_all(["1", "2"]).unwrap(), vec![1, 2]);
        let err = p.parse_all(["1", "0", "x"]).unwrap_err();
        assert!(matches!(err, ParseError::Rejected { ref input, .. } if input == "0"));
    }

    #[test]
    fn clones_share_configuration() {
        let p = ValueParser::new(parse::<i64>()).named("n").check(gt(0i64));
        let q = p.clone();
        assert_eq!(q.name(), "n");
        assert!(q.parse("-1").is_err());
    }
}
