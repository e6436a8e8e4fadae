//! Delimiter-separated list converter

use super::ValueConverter;
use crate::error::{BuildError, ConvertError};

/// Converter that splits its input and converts each element.
///
/// Empty input converts to an empty list.
#[derive(Clone, Debug)]
pub struct Split<C> {
    inner: C,
    delimiter: String,
    trim: bool,
    skip_empty: bool,
}

impl<C> Split<C> {
    /// Trim whitespace around each element before converting it.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Drop elements that are empty (after trimming, if enabled).
    pub fn skip_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }
}

impl<T, C> ValueConverter<Vec<T>> for Split<C>
where
    C: ValueConverter<T>,
{
    fn convert(&self, input: &str) -> Result<Vec<T>, ConvertError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut values = Vec::new();
        for (index, raw) in input.split(self.delimiter.as_str()).enumerate() {
            let element = if self.trim { raw.trim() } else { raw };
            if self.skip_empty && element.is_empty() {
                continue;
            }
            let value = self
                .inner
                .convert(element)
                .map_err(|source| ConvertError::Element {
                    index,
                    element: element.to_string(),
                    source: Box::new(source),
                })?;
            values.push(value);
        }
        Ok(values)
    }
}

/// Create a converter splitting on `delimiter` and converting each element
/// with `inner`.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
///
/// let sizes = split(parse::<u32>(), "x").unwrap();
/// assert_eq!(sizes.convert("1920x1080").unwrap(), vec![1920, 1080]);
/// assert!(split(parse::<u32>(), "").is_err());
/// ```
pub fn split<C>(inner: C, delimiter: impl Into<String>) -> Result<Split<C>, BuildError> {
    let delimiter = delimiter.into();
    if delimiter.is_empty() {
        return Err(BuildError::EmptyArgument { what: "delimiter" });
    }
    Ok(Split {
        inner,
        delimiter,
        trim: false,
        skip_empty: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{parse, path};
    use std::path::PathBuf;

    #[test]
    fn empty_input_is_empty_list() {
        let c = split(parse::<i32>(), ",").unwrap();
        assert_eq!(c.convert("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn element_errors_carry_index() {
        let c = split(parse::<i32>(), ",").unwrap();
        let err = c.convert("1,x,3").unwrap_err();
        assert_eq!(
            err.to_string(),
            "element 1 ('x'): 'x' is not a valid i32: invalid digit found in string"
        );
    }

    #[test]
    fn trim_and_skip_empty() {
        let c = split(parse::<i32>(), ",").unwrap().trim().skip_empty();
        assert_eq!(c.convert(" 1 , ,2,").unwrap(), vec![1, 2]);

        let strict = split(parse::<i32>(), ",").unwrap();
        assert!(strict.convert("1, 2").is_err());
    }

    #[test]
    fn multi_char_delimiter() {
        let c = split(path(), "::").unwrap();
        assert_eq!(
            c.convert("a::b/c").unwrap(),
            vec![PathBuf::from("a"), PathBuf::from("b/c")]
        );
    }
}
