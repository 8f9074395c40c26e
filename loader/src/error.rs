//! Error types for schema loading.

use dirspec_core::{BatchKind, SchemaError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while reading a schema tree.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A batch directory does not exist.
    #[error("{kind} directory not found: {}", .path.display())]
    MissingBatch { kind: BatchKind, path: PathBuf },

    /// Failed to list a batch directory.
    #[error("failed to list '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a file.
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file is not valid JSON.
    #[error("invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A document is not a well-formed schema record.
    #[error("{}: {source}", .path.display())]
    Schema { path: PathBuf, source: SchemaError },
}

impl LoadError {
    pub fn missing_batch(kind: BatchKind, path: impl Into<PathBuf>) -> Self {
        Self::MissingBatch {
            kind,
            path: path.into(),
        }
    }

    pub fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn schema(path: impl Into<PathBuf>, source: SchemaError) -> Self {
        Self::Schema {
            path: path.into(),
            source,
        }
    }

    /// The file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingBatch { path, .. }
            | Self::Walk { path, .. }
            | Self::FileRead { path, .. }
            | Self::Json { path, .. }
            | Self::Schema { path, .. } => path,
        }
    }

    /// The schema error, when a document was rejected.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}
