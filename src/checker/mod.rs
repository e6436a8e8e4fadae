//! Composable value checkers
//!
//! A checker looks at an already converted argument value and either accepts
//! it or explains why not. Small checkers combine into larger ones with
//! `and`, `or` and `not`.
//!
//! # Example
//!
//! ```rust
//! use argcheck::checker::*;
//!
//! // Port must be 1..=65535 and not a well-known privileged one
//! let port = between(1u32, 65535).and(ge(1024u32).or(one_of([80u32, 443])));
//!
//! assert!(port.check(&8080).is_success());
//! assert!(port.check(&443).is_success());
//! assert!(port.check(&22).is_failure());
//! ```
//!
//! # Flattening
//!
//! Chaining the same operator keeps a single flat node:
//!
//! ```rust
//! use argcheck::checker::*;
//!
//! let p = eq(1).or(eq(2)).or(eq(3));
//! assert_eq!(p.len(), 3);
//! ```

mod combinators;
mod compare;
mod delegate;
mod equality;
mod fs;
mod pattern;
mod string;

// Re-export core trait and combinators
pub use combinators::{
    all_of, and, any_of, or, AllOf, AnyOf, Checker, CheckerExt, LeafChecker, ValueChecker,
    ANY_OF_HEADER,
};

// Re-export comparison checkers
pub use compare::{
    between, ge, gt, le, lt, negative, non_negative, positive, Between, Bound, Compare, Comparer,
    NaturalOrder,
};

// Re-export equality checkers
pub use equality::{eq, ne, none_of, one_of, EqualTo, Equality, NaturalEq, Ne, NoneOf, OneOf};

// Re-export string checkers
pub use string::{
    contains, ends_with, len_between, len_eq, len_max, len_min, not_blank, not_empty, starts_with,
    Contains, EndsWith, LenBetween, NotBlank, NotEmpty, StartsWith, StringComparison,
};

pub use pattern::{matches, matches_with, Matches};

pub use fs::{dir_exists, file_exists, path_absent, path_exists, Absent, EntryKind, Exists};

pub use delegate::{not, satisfies, Not, Satisfies};
