//! Configuration for the mangling driver

use crate::{FlangPlugin, DEFAULT_PLUGIN_NAME};
use std::path::{Path, PathBuf};

/// Plugin library location relative to the project root.
pub const DEFAULT_PLUGIN_LIB: &str = "build/libtestMangler.so";

/// Extension of base test files.
pub const DEFAULT_EXTENSION: &str = "f90";

/// Configuration for one mangling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangleConfig {
    /// Compiler frontend executable
    pub flang: PathBuf,
    /// Shared library holding the mangling plugin
    pub plugin_lib: PathBuf,
    /// Name the plugin registers under
    pub plugin_name: String,
    /// Directory of base test files
    pub test_dir: PathBuf,
    /// Directory receiving the variants
    pub out_dir: PathBuf,
    /// Extension of base test files, without the dot
    pub extension: String,
}

impl MangleConfig {
    /// Default layout under `root`: `build/libtestMangler.so`, `BaseTests/`
    /// and `TestBin/`.
    pub fn for_project(root: impl AsRef<Path>, flang: impl Into<PathBuf>) -> Self {
        let root = root.as_ref();
        Self {
            flang: flang.into(),
            plugin_lib: root.join(DEFAULT_PLUGIN_LIB),
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
            test_dir: root.join("BaseTests"),
            out_dir: root.join("TestBin"),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_plugin_lib(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_lib = path.into();
        self
    }

    pub fn with_plugin_name(mut self, name: impl Into<String>) -> Self {
        self.plugin_name = name.into();
        self
    }

    pub fn with_test_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_dir = path.into();
        self
    }

    pub fn with_out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = path.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn plugin(&self) -> FlangPlugin {
        FlangPlugin::new(&self.flang, &self.plugin_lib).with_plugin_name(&self.plugin_name)
    }
}
