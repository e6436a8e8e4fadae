//! String-to-value converters
//!
//! A converter turns one raw argument string into a typed value. Converters
//! are leaves; the only composition is pipelining a converter's output
//! through another stage with [`ConverterExt::then`] or [`ConverterExt::map`].
//!
//! # Example
//!
//! ```rust
//! use argcheck::convert::*;
//!
//! let ports = split(parse::<u16>(), ",").unwrap().trim();
//! assert_eq!(ports.convert("80, 443").unwrap(), vec![80, 443]);
//!
//! let kib = parse::<u64>().map(|n| n * 1024);
//! assert_eq!(kib.convert("4").unwrap(), 4096);
//! ```

mod chain;
mod choice;
mod date;
mod fs;
mod list;
mod primitive;

pub use chain::{ConverterExt, Map, Then};
pub use choice::{choice, Choice};
pub use date::{date, date_time, time, DateConverter, DateTimeConverter, TimeConverter};
pub use fs::{file, path, FileConverter, OpenMode, PathConverter};
pub use list::{split, Split};
pub use primitive::{boolean, parse, BoolConverter, Parse};

use crate::error::ConvertError;

/// Converts a raw argument string into a value of type `T`.
pub trait ValueConverter<T>: Send + Sync {
    /// Convert `input`.
    fn convert(&self, input: &str) -> Result<T, ConvertError>;
}

// Blanket impl for closures
impl<T, F> ValueConverter<T> for F
where
    F: Fn(&str) -> Result<T, ConvertError> + Send + Sync,
{
    #[inline]
    fn convert(&self, input: &str) -> Result<T, ConvertError> {
        self(input)
    }
}
