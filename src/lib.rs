//! # argcheck
//!
//! Composable value checkers and converters for command-line option parsing.
//!
//! Option frameworks hand each raw argument string to a converter, then run
//! a checker over the typed value. This crate provides both halves:
//!
//! - **Checkers** ([`checker`]): small validators returning a [`CheckResult`],
//!   combined with `and` / `or` / `not` into flat [`AllOf`](checker::AllOf)
//!   and [`AnyOf`](checker::AnyOf) nodes.
//! - **Converters** ([`convert`]): string-to-value transformers for numbers,
//!   booleans, dates, choices, paths, files and lists.
//! - **Parsers** ([`ValueParser`]): converter plus checker, reporting a
//!   [`ParseError`] that names the argument.
//!
//! ## Quick Example
//!
//! ```rust
//! use argcheck::prelude::*;
//! use argcheck::checker::{ge, le, lt};
//! use argcheck::convert::parse;
//!
//! // Either a small percentage or exactly 100
//! let percent = ValueParser::new(parse::<i32>())
//!     .named("--percent")
//!     .check(ge(0).and(lt(50)).or(le(100).and(ge(100))));
//!
//! assert_eq!(percent.parse("10").unwrap(), 10);
//! assert_eq!(percent.parse("100").unwrap(), 100);
//!
//! let err = percent.parse("70").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "invalid value '70' for --percent: Resolve one of the following problems:\n  \
//!      - 70 is not less than 50\n  \
//!      - 70 is not greater than or equal to 100"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): trace and debug events for rejected values
//! - `serde`: `Serialize` / `Deserialize` for result and option types
//! - `proptest`: `Arbitrary` for [`CheckResult`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checker;
pub mod convert;
pub mod error;
pub mod parser;
pub mod result;
pub mod testing;

// Re-exports
pub use checker::{Checker, CheckerExt, ValueChecker};
pub use convert::{ConverterExt, ValueConverter};
pub use error::{BuildError, ConvertError, ParseError};
pub use parser::ValueParser;
pub use result::CheckResult;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checker::{AllOf, AnyOf, Checker, CheckerExt, ValueChecker};
    pub use crate::convert::{ConverterExt, ValueConverter};
    pub use crate::error::{BuildError, ConvertError, ParseError};
    pub use crate::parser::ValueParser;
    pub use crate::result::CheckResult;
}
