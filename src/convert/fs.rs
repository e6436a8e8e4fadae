//! Path and file converters

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use super::ValueConverter;
use crate::error::ConvertError;

/// How a [`FileConverter`] opens its file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenMode {
    /// Read an existing file
    #[default]
    Read,
    /// Write, creating or truncating
    Write,
    /// Append, creating if missing
    Append,
    /// Write a file that must not exist yet
    CreateNew,
}

impl OpenMode {
    fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            OpenMode::Read => options.read(true),
            OpenMode::Write => options.write(true).create(true).truncate(true),
            OpenMode::Append => options.append(true).create(true),
            OpenMode::CreateNew => options.write(true).create_new(true),
        };
        options
    }
}

/// Converter to a filesystem path.
///
/// Only rejects empty input; existence is a job for the filesystem checkers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathConverter;

impl ValueConverter<PathBuf> for PathConverter {
    fn convert(&self, input: &str) -> Result<PathBuf, ConvertError> {
        if input.is_empty() {
            return Err(ConvertError::Empty {
                expected: "path".to_string(),
            });
        }
        Ok(PathBuf::from(input))
    }
}

/// Create a path converter.
pub fn path() -> PathConverter {
    PathConverter
}

/// Converter that opens the named file.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileConverter {
    mode: OpenMode,
}

impl FileConverter {
    /// The mode files are opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }
}

impl ValueConverter<File> for FileConverter {
    fn convert(&self, input: &str) -> Result<File, ConvertError> {
        let path = path().convert(input)?;
        let opened = self.mode.options().open(&path);

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), mode = ?self.mode, ok = opened.is_ok(), "opening file argument");

        opened.map_err(|source| ConvertError::Io { path, source })
    }
}

/// Create a converter that opens files with `mode`.
///
/// # Example
///
/// ```rust
/// use argcheck::convert::*;
///
/// assert!(file(OpenMode::Read).convert("Cargo.toml").is_ok());
/// assert!(file(OpenMode::Read).convert("does/not/exist").is_err());
/// ```
pub fn file(mode: OpenMode) -> FileConverter {
    FileConverter { mode }
}
