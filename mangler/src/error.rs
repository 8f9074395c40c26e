//! Error types for the mangler.

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type for mangler operations.
pub type MangleResult<T> = Result<T, MangleError>;

/// Errors that can occur while generating variants.
///
/// A plugin run that exits non-zero is not an error; it ends enumeration.
#[derive(Debug, Error)]
pub enum MangleError {
    /// The plugin host could not be started.
    #[error("failed to run '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// The plugin printed something that is not UTF-8.
    #[error("variant {offset} of '{}' is not valid UTF-8: {source}", .input.display())]
    InvalidOutput {
        input: PathBuf,
        offset: usize,
        source: FromUtf8Error,
    },

    /// Failed to list a directory.
    #[error("failed to list '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// File system error on a test or output path.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MangleError {
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    pub fn invalid_output(input: impl Into<PathBuf>, offset: usize, source: FromUtf8Error) -> Self {
        Self::InvalidOutput {
            input: input.into(),
            offset,
            source,
        }
    }

    pub fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
