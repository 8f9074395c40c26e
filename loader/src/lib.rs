//! dirspec schema loader.
//!
//! Reads a schema tree laid out as
//!
//! ```text
//! <spec>/json/modifier/*.json
//! <spec>/json/clause/*.json
//! <spec>/json/clause-group/*.json
//! <spec>/json/directive/*.json
//! ```
//!
//! and registers the batches in that order. Within a batch, files are read in
//! file-name order.

mod error;
mod source;

pub use error::{LoadError, LoadResult};
pub use source::{SchemaDir, SchemaFile, SCHEMA_EXTENSION};

use dirspec_registry::Registry;
use std::path::Path;

/// Load the registry for the schema rooted at `spec_path`.
pub fn load_registry(spec_path: impl AsRef<Path>) -> LoadResult<Registry> {
    SchemaDir::new(spec_path).load()
}
