//! dirspec test mangler.
//!
//! Runs an external compiler plugin over base test files. The plugin takes a
//! source file and a positive offset and prints one mutated ("mangled")
//! variant; offsets are tried 1, 2, 3, ... until the plugin produces nothing.
//!
//! The registry crates do not depend on this one.

mod config;
mod driver;
mod error;
mod source;
mod variants;

pub use config::{MangleConfig, DEFAULT_EXTENSION, DEFAULT_PLUGIN_LIB};
pub use driver::{MangleDriver, MangleSummary, MangledFile};
pub use error::{MangleError, MangleResult};
pub use source::{FlangPlugin, VariantSource, DEFAULT_PLUGIN_NAME, OFFSET_ENV};
pub use variants::{variants, Variants};
