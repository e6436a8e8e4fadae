//! Error types
//!
//! Three families, one per audience:
//! - [`BuildError`]: a checker or converter was set up wrong (programmer error).
//! - [`ConvertError`]: a raw argument string could not be turned into a value.
//! - [`ParseError`]: what a [`ValueParser`](crate::ValueParser) reports to the
//!   option framework, naming the argument.
//!
//! A value that converts fine but fails a check is not an error here; it is a
//! [`CheckResult::Failure`](crate::CheckResult::Failure).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Construction-time misuse of a checker, combinator or converter.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A combinator was built from a missing list
    #[error("checker list is missing")]
    MissingList,

    /// A combinator input list contained a missing element
    #[error("checker at position {index} is missing")]
    MissingChecker {
        /// Position of the missing element in the input
        index: usize,
    },

    /// A string parameter that must not be empty was empty
    #[error("{what} must not be empty")]
    EmptyArgument {
        /// Which parameter was empty
        what: &'static str,
    },

    /// A regular expression failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// A raw argument string could not be converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not a valid representation of the target type
    #[error("'{input}' is not a valid {expected}: {reason}")]
    Invalid {
        /// The rejected input
        input: String,
        /// Human-readable name of the target type
        expected: String,
        /// Why parsing failed
        reason: String,
    },

    /// The input did not name one of the accepted choices
    #[error("'{input}' is not one of: {}", choices.join(", "))]
    UnknownVariant {
        /// The rejected input
        input: String,
        /// Accepted names, in declaration order
        choices: Vec<String>,
    },

    /// Empty input where a value is required
    #[error("{expected} must not be empty")]
    Empty {
        /// Human-readable name of the target type
        expected: String,
    },

    /// Opening a file failed
    #[error("cannot open '{}': {source}", path.display())]
    Io {
        /// The path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// One element of a delimited list failed to convert
    #[error("element {index} ('{element}'): {source}")]
    Element {
        /// Zero-based position in the list
        index: usize,
        /// The element text
        element: String,
        /// Why it failed
        #[source]
        source: Box<ConvertError>,
    },

    /// Free-form failure from a custom pipeline stage
    #[error("{0}")]
    Custom(String),
}

impl ConvertError {
    /// Create a free-form conversion error
    pub fn custom(message: impl Into<String>) -> Self {
        ConvertError::Custom(message.into())
    }
}

/// Failure to produce a value for a named argument.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The raw string could not be converted
    #[error("invalid value for {argument}: {source}")]
    Conversion {
        /// Argument name
        argument: String,
        /// Conversion failure
        #[source]
        source: ConvertError,
    },

    /// The converted value was rejected by a checker
    #[error("invalid value '{input}' for {argument}: {message}")]
    Rejected {
        /// Argument name
        argument: String,
        /// The raw input
        input: String,
        /// The checker's failure message
        message: String,
    },
}

impl ParseError {
    /// Name of the argument that failed
    pub fn argument(&self) -> &str {
        match self {
            ParseError::Conversion { argument, .. } | ParseError::Rejected { argument, .. } => {
                argument
            }
        }
    }
}
