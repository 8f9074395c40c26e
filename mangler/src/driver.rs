//! Mangling driver: base tests in, numbered variants out.

use crate::{
    variants, FlangPlugin, MangleConfig, MangleError, MangleResult, VariantSource,
    DEFAULT_EXTENSION,
};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Variants written for one base test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangledFile {
    pub test: PathBuf,
    pub variants: usize,
}

/// Outcome of a driver run, in test-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangleSummary {
    pub files: Vec<MangledFile>,
}

impl MangleSummary {
    pub fn total_variants(&self) -> usize {
        self.files.iter().map(|f| f.variants).sum()
    }
}

/// Writes variant `i` of `<test_dir>/foo.f90` to `<out_dir>/foo.i.f90`.
#[derive(Debug, Clone)]
pub struct MangleDriver<S> {
    source: S,
    test_dir: PathBuf,
    out_dir: PathBuf,
    extension: String,
}

impl MangleDriver<FlangPlugin> {
    pub fn from_config(config: &MangleConfig) -> Self {
        Self::new(config.plugin(), &config.test_dir, &config.out_dir)
            .with_extension(&config.extension)
    }
}

impl<S: VariantSource> MangleDriver<S> {
    pub fn new(source: S, test_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            test_dir: test_dir.into(),
            out_dir: out_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Remove regular files from the output directory, creating it if missing.
    /// Subdirectories are left alone.
    pub fn prepare_output(&self) -> MangleResult<()> {
        if !self.out_dir.exists() {
            debug!(out_dir = %self.out_dir.display(), "creating output directory");
            return fs::create_dir_all(&self.out_dir).map_err(|e| MangleError::io(&self.out_dir, e));
        }

        for entry in WalkDir::new(&self.out_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| MangleError::walk(&self.out_dir, e))?;
            if entry.file_type().is_file() {
                fs::remove_file(entry.path()).map_err(|e| MangleError::io(entry.path(), e))?;
            }
        }
        Ok(())
    }

    /// Base test files with the configured extension, sorted by file name.
    pub fn test_files(&self) -> MangleResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.test_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| MangleError::walk(&self.test_dir, e))?;
            if entry.file_type().is_file()
                && entry.path().extension() == Some(OsStr::new(&self.extension))
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Output path of variant `index` of `test`.
    pub fn variant_path(&self, test: &Path, index: usize) -> PathBuf {
        let stem = test.file_stem().unwrap_or_else(|| test.as_os_str());
        let mut name = stem.to_os_string();
        name.push(format!(".{}.{}", index, self.extension));
        self.out_dir.join(name)
    }

    /// Write every variant of one test file; returns how many were written.
    pub fn mangle_file(&self, test: &Path) -> MangleResult<usize> {
        let mut written = 0;
        for (i, variant) in variants(&self.source, test).enumerate() {
            let path = self.variant_path(test, i + 1);
            fs::write(&path, variant?).map_err(|e| MangleError::io(&path, e))?;
            written += 1;
        }
        Ok(written)
    }

    /// Clear the output directory and mangle every base test.
    pub fn run(&self) -> MangleResult<MangleSummary> {
        self.prepare_output()?;

        let tests = self.test_files()?;
        info!(
            test_dir = %self.test_dir.display(),
            tests = tests.len(),
            "mangling base tests"
        );

        let mut summary = MangleSummary::default();
        for test in tests {
            let count = self.mangle_file(&test)?;
            info!(test = %test.display(), variants = count, "mangled");
            summary.files.push(MangledFile {
                test,
                variants: count,
            });
        }
        Ok(summary)
    }
}
