//! Variant sources.

use crate::{MangleError, MangleResult};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Name the mangling plugin registers under.
pub const DEFAULT_PLUGIN_NAME: &str = "test-mangle";

/// Environment variable carrying the variant offset to the plugin.
pub const OFFSET_ENV: &str = "MANGLE_OFFSET";

/// Something that can produce the `offset`-th variant of a test file.
pub trait VariantSource {
    /// `Ok(None)` means there is no variant at this offset (or beyond).
    fn variant(&self, input: &Path, offset: NonZeroUsize) -> MangleResult<Option<String>>;
}

impl<F> VariantSource for F
where
    F: Fn(&Path, NonZeroUsize) -> MangleResult<Option<String>>,
{
    fn variant(&self, input: &Path, offset: NonZeroUsize) -> MangleResult<Option<String>> {
        self(input, offset)
    }
}

/// The flang frontend with the test-mangle plugin loaded.
#[derive(Debug, Clone)]
pub struct FlangPlugin {
    flang: PathBuf,
    plugin_lib: PathBuf,
    plugin_name: String,
}

impl FlangPlugin {
    pub fn new(flang: impl Into<PathBuf>, plugin_lib: impl Into<PathBuf>) -> Self {
        Self {
            flang: flang.into(),
            plugin_lib: plugin_lib.into(),
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
        }
    }

    pub fn with_plugin_name(mut self, name: impl Into<String>) -> Self {
        self.plugin_name = name.into();
        self
    }

    /// The frontend invocation for one offset.
    pub fn command(&self, input: &Path, offset: NonZeroUsize) -> Command {
        let mut cmd = Command::new(&self.flang);
        cmd.args(["-fc1", "-fopenacc", "-fopenmp", "-load"])
            .arg(&self.plugin_lib)
            .arg("-plugin")
            .arg(&self.plugin_name)
            .arg(input)
            .env(OFFSET_ENV, offset.to_string());
        cmd
    }
}

impl VariantSource for FlangPlugin {
    fn variant(&self, input: &Path, offset: NonZeroUsize) -> MangleResult<Option<String>> {
        let output = self
            .command(input, offset)
            .output()
            .map_err(|e| MangleError::spawn(&self.flang, e))?;

        // The plugin signals "no more variants" only through its exit status,
        // so a crash here also ends enumeration.
        if !output.status.success() {
            debug!(
                input = %input.display(),
                offset = offset.get(),
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "plugin produced no variant"
            );
            return Ok(None);
        }

        String::from_utf8(output.stdout)
            .map(Some)
            .map_err(|e| MangleError::invalid_output(input, offset.get(), e))
    }
}
