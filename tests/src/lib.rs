//! dirspec Integration Tests
//!
//! Fixtures that lay out schema trees and base-test projects on disk, plus
//! assertion helpers for registry contents.
//!
//! # Usage
//!
//! ```ignore
//! use dirspec_tests::prelude::*;
//!
//! #[test]
//! fn test_reference() {
//!     let registry = SchemaFixture::new()
//!         .modifier("expr", json!({ "$name": "expr", "valueType": "identifier" }))
//!         .clause("private", json!({ "$name": "private", "modifiers": [{ "$name": "expr" }] }))
//!         .load()
//!         .unwrap();
//!
//!     assert_reference(&registry, "private", "expr", None);
//! }
//! ```

pub mod assertion;

pub use assertion::{assert_inline, assert_names, assert_reference};
pub use fixture::{MangleProject, SchemaFixture};

/// Prelude for convenient imports in tests.
pub mod prelude {
    pub use crate::assertion::{assert_inline, assert_names, assert_reference};
    pub use crate::fixture::{MangleProject, SchemaFixture};
    pub use dirspec_core::{BatchKind, EntityKind, Field, Problem, SchemaError};
    pub use dirspec_loader::{LoadError, SchemaDir};
    pub use dirspec_registry::{
        ClauseModifier, Registry, RegistryBuilder, ResolveError, SchemaBatches,
    };
    pub use serde_json::json;
}
