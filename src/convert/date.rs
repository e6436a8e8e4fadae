//! Date and time converters
//!
//! Formats use `chrono`'s strftime syntax and are tried in order; the first
//! one that parses wins.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, ParseResult};

use super::ValueConverter;
use crate::error::ConvertError;

const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];
const DEFAULT_TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

fn owned(formats: &[&str]) -> Vec<String> {
    formats.iter().map(|f| (*f).to_string()).collect()
}

fn parse_with_formats<V>(
    input: &str,
    formats: &[String],
    expected: &str,
    parse: impl Fn(&str, &str) -> ParseResult<V>,
) -> Result<V, ConvertError> {
    let mut last_error = None;
    for format in formats {
        match parse(input, format) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    let reason = match last_error {
        Some(e) if formats.len() == 1 => format!("{} (expected format {})", e, formats[0]),
        Some(_) => format!("expected one of the formats {}", formats.join(", ")),
        None => "no formats configured".to_string(),
    };
    Err(ConvertError::Invalid {
        input: input.to_string(),
        expected: expected.to_string(),
        reason,
    })
}

/// Converter to a calendar date.
#[derive(Clone, Debug)]
pub struct DateConverter {
    formats: Vec<String>,
}

impl DateConverter {
    /// Also accept `format`, tried after the existing ones.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }

    /// Accept only `format`.
    pub fn only(format: impl Into<String>) -> Self {
        DateConverter {
            formats: vec![format.into()],
        }
    }

    /// The accepted formats, in the order they are tried.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        DateConverter {
            formats: owned(DEFAULT_DATE_FORMATS),
        }
    }
}

impl ValueConverter<NaiveDate> for DateConverter {
    fn convert(&self, input: &str) -> Result<NaiveDate, ConvertError> {
        parse_with_formats(input, &self.formats, "date", NaiveDate::parse_from_str)
    }
}

/// Create a date converter accepting `YYYY-MM-DD`, `YYYY/MM/DD` and `DD.MM.YYYY`.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
/// use chrono::NaiveDate;
///
/// let d = date().convert("24.12.2025").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2025, 12, 24).unwrap());
/// ```
pub fn date() -> DateConverter {
    DateConverter::default()
}

/// Converter to a time of day.
#[derive(Clone, Debug)]
pub struct TimeConverter {
    formats: Vec<String>,
}

impl TimeConverter {
    /// Also accept `format`, tried after the existing ones.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }
}

impl Default for TimeConverter {
    fn default() -> Self {
        TimeConverter {
            formats: owned(DEFAULT_TIME_FORMATS),
        }
    }
}

impl ValueConverter<NaiveTime> for TimeConverter {
    fn convert(&self, input: &str) -> Result<NaiveTime, ConvertError> {
        parse_with_formats(input, &self.formats, "time", NaiveTime::parse_from_str)
    }
}

/// Create a time converter accepting `HH:MM:SS` and `HH:MM`.
pub fn time() -> TimeConverter {
    TimeConverter::default()
}

/// Converter to a timestamp with a UTC offset.
///
/// Tries RFC 3339, then RFC 2822, then any extra formats (which must
/// include an offset).
#[derive(Clone, Debug, Default)]
pub struct DateTimeConverter {
    formats: Vec<String>,
}

impl DateTimeConverter {
    /// Also accept `format`, tried after the RFC formats.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }
}

impl ValueConverter<DateTime<FixedOffset>> for DateTimeConverter {
    fn convert(&self, input: &str) -> Result<DateTime<FixedOffset>, ConvertError> {
        if let Ok(value) = DateTime::<FixedOffset>::parse_from_rfc3339(input) {
            return Ok(value);
        }
        if let Ok(value) = DateTime::<FixedOffset>::parse_from_rfc2822(input) {
            return Ok(value);
        }
        if self.formats.is_empty() {
            return Err(ConvertError::Invalid {
                input: input.to_string(),
                expected: "timestamp".to_string(),
                reason: "expected an RFC 3339 or RFC 2822 timestamp".to_string(),
            });
        }
        parse_with_formats(
            input,
            &self.formats,
            "timestamp",
            DateTime::<FixedOffset>::parse_from_str,
        )
    }
}

/// Create a timestamp converter.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
///
/// let t = date_time().convert("2025-01-02T03:04:05+01:00").unwrap();
/// assert_eq!(t.offset().local_minus_utc(), 3600);
/// ```
pub fn date_time() -> DateTimeConverter {
    DateTimeConverter::default()
}
