//! The Registry - immutable schema lookup.

use crate::{
    Clause, ClauseGroup, ClauseGroupTable, ClauseTable, Directive, DirectiveTable, Modifier,
    ModifierTable, RegistryBuilder, SchemaBatches,
};
use dirspec_core::SchemaResult;
use serde::Serialize;

/// The Registry provides lookup of schema definitions by name.
/// It is immutable after construction.
///
/// Clause-group and directive name lists are stored as written; see
/// [`Registry::dangling_references`] for opt-in resolution.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Registry {
    modifiers: ModifierTable,
    clauses: ClauseTable,
    clause_groups: ClauseGroupTable,
    directives: DirectiveTable,
}

impl Registry {
    /// Create a registry from finished tables (use RegistryBuilder for construction).
    pub(crate) fn new(
        modifiers: ModifierTable,
        clauses: ClauseTable,
        clause_groups: ClauseGroupTable,
        directives: DirectiveTable,
    ) -> Self {
        Self {
            modifiers,
            clauses,
            clause_groups,
            directives,
        }
    }

    /// Build a registry from the four batches in load order.
    ///
    /// The first malformed document aborts construction; no partial registry
    /// is returned.
    pub fn from_batches(batches: &SchemaBatches) -> SchemaResult<Self> {
        let mut builder = RegistryBuilder::new();
        builder.register_batches(batches)?;
        Ok(builder.build())
    }

    // ==================== Modifier Lookups ====================

    /// Get a top-level modifier by name.
    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.get(name)
    }

    pub fn modifiers(&self) -> &ModifierTable {
        &self.modifiers
    }

    // ==================== Clause Lookups ====================

    /// Get a clause by name.
    pub fn clause(&self, name: &str) -> Option<&Clause> {
        self.clauses.get(name)
    }

    pub fn clauses(&self) -> &ClauseTable {
        &self.clauses
    }

    // ==================== Clause Group Lookups ====================

    /// Get a clause group by name.
    pub fn clause_group(&self, name: &str) -> Option<&ClauseGroup> {
        self.clause_groups.get(name)
    }

    pub fn clause_groups(&self) -> &ClauseGroupTable {
        &self.clause_groups
    }

    // ==================== Directive Lookups ====================

    /// Get a directive by name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &DirectiveTable {
        &self.directives
    }

    /// Total number of registered entities across all tables.
    pub fn len(&self) -> usize {
        self.modifiers.len() + self.clauses.len() + self.clause_groups.len() + self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
