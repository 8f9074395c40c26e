//! Schema directory reader.

use crate::{LoadError, LoadResult};
use dirspec_core::{BatchKind, Document};
use dirspec_registry::{Registry, RegistryBuilder, SchemaBatches};
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extension of schema files; everything else in a batch directory is ignored.
pub const SCHEMA_EXTENSION: &str = "json";

/// One parsed schema file.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    pub path: PathBuf,
    pub document: Document,
}

/// A schema tree on disk.
#[derive(Debug, Clone)]
pub struct SchemaDir {
    json_root: PathBuf,
}

impl SchemaDir {
    /// Schema whose batches live under `<spec_path>/json`.
    pub fn new(spec_path: impl AsRef<Path>) -> Self {
        Self::from_json_root(spec_path.as_ref().join("json"))
    }

    /// Schema whose batch directories live directly under `json_root`.
    pub fn from_json_root(json_root: impl Into<PathBuf>) -> Self {
        Self {
            json_root: json_root.into(),
        }
    }

    pub fn batch_dir(&self, kind: BatchKind) -> PathBuf {
        self.json_root.join(kind.dir_name())
    }

    /// Read and parse every schema file of one batch, in file-name order.
    pub fn read_batch(&self, kind: BatchKind) -> LoadResult<Vec<SchemaFile>> {
        let dir = self.batch_dir(kind);
        if !dir.is_dir() {
            return Err(LoadError::missing_batch(kind, dir));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| LoadError::walk(&dir, e))?;
            if !entry.file_type().is_file()
                || entry.path().extension() != Some(OsStr::new(SCHEMA_EXTENSION))
            {
                continue;
            }

            let path = entry.into_path();
            debug!(path = %path.display(), "reading schema file");
            let text = fs::read_to_string(&path).map_err(|e| LoadError::file_read(&path, e))?;
            let value: Value =
                serde_json::from_str(&text).map_err(|e| LoadError::json(&path, e))?;
            let document = Document::from_value(value, kind.entity_kind())
                .map_err(|e| LoadError::schema(&path, e))?;
            files.push(SchemaFile { path, document });
        }
        Ok(files)
    }

    /// Read all four batches without registering them.
    pub fn read_batches(&self) -> LoadResult<SchemaBatches> {
        let mut batches = SchemaBatches::new();
        for kind in BatchKind::LOAD_ORDER {
            for file in self.read_batch(kind)? {
                batches.push(kind, file.document);
            }
        }
        Ok(batches)
    }

    /// Read and register all batches in load order.
    ///
    /// Stops at the first unreadable or malformed file, naming it.
    pub fn load(&self) -> LoadResult<Registry> {
        let mut builder = RegistryBuilder::new();
        for kind in BatchKind::LOAD_ORDER {
            let files = self.read_batch(kind)?;
            info!(batch = %kind, files = files.len(), "loading batch");
            for file in &files {
                builder
                    .register(kind, &file.document)
                    .map_err(|e| LoadError::schema(&file.path, e))?;
            }
        }

        let registry = builder.build();
        info!(
            modifiers = registry.modifiers().len(),
            clauses = registry.clauses().len(),
            clause_groups = registry.clause_groups().len(),
            directives = registry.directives().len(),
            "registry loaded"
        );
        Ok(registry)
    }
}
