//! dirspec Registry
//!
//! In-memory registry of directive-language schemas: modifiers, clauses,
//! clause groups and directives, each in its own name-keyed table.
//!
//! Construction goes through [`RegistryBuilder`] in load order (modifier,
//! clause, clause-group, directive). A clause's modifier usage becomes a
//! [`ModifierReference`] when the name is already a registered modifier and an
//! inline [`Modifier`] otherwise. Clause-group and directive name lists stay
//! unresolved [`NameRef`]s; [`Registry::dangling_references`] and
//! [`Registry::resolve_directive`] resolve them on request.

mod builder;
mod parse;
mod registry;
mod resolve;
mod table;
mod types;

pub use builder::{RegistryBuilder, SchemaBatches};
pub use registry::Registry;
pub use resolve::{DanglingReference, EffectiveModifier, ResolveError, ResolveResult, ResolvedDirective};
pub use table::{ClauseGroupTable, ClauseTable, DirectiveTable, ModifierTable, Table};
pub use types::*;
