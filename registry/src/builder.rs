//! RegistryBuilder for constructing an immutable Registry.

use crate::{
    Clause, ClauseGroup, ClauseGroupTable, ClauseTable, Directive, DirectiveTable, Modifier,
    ModifierTable, Registry,
};
use dirspec_core::{BatchKind, Document, SchemaResult};
use tracing::debug;

/// Builder for constructing an immutable Registry.
///
/// Registration order matters: a clause's modifier usages are resolved against
/// the modifiers registered so far. A failed registration stores nothing.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modifiers: ModifierTable,
    clauses: ClauseTable,
    clause_groups: ClauseGroupTable,
    directives: DirectiveTable,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document into the table for its batch.
    pub fn register(&mut self, kind: BatchKind, doc: &Document) -> SchemaResult<()> {
        match kind {
            BatchKind::Modifier => self.register_modifier(doc).map(drop),
            BatchKind::Clause => self.register_clause(doc).map(drop),
            BatchKind::ClauseGroup => self.register_clause_group(doc).map(drop),
            BatchKind::Directive => self.register_directive(doc).map(drop),
        }
    }

    pub fn register_modifier(&mut self, doc: &Document) -> SchemaResult<&Modifier> {
        self.modifiers.register(doc)
    }

    pub fn register_clause(&mut self, doc: &Document) -> SchemaResult<&Clause> {
        self.clauses.register(doc, &self.modifiers)
    }

    pub fn register_clause_group(&mut self, doc: &Document) -> SchemaResult<&ClauseGroup> {
        self.clause_groups.register(doc)
    }

    pub fn register_directive(&mut self, doc: &Document) -> SchemaResult<&Directive> {
        self.directives.register(doc)
    }

    /// Register every batch in load order, each in the order supplied.
    pub fn register_batches(&mut self, batches: &SchemaBatches) -> SchemaResult<()> {
        for kind in BatchKind::LOAD_ORDER {
            let docs = batches.batch(kind);
            debug!(batch = %kind, documents = docs.len(), "registering batch");
            for doc in docs {
                self.register(kind, doc)?;
            }
        }
        Ok(())
    }

    /// Modifiers registered so far.
    pub fn modifiers(&self) -> &ModifierTable {
        &self.modifiers
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry::new(
            self.modifiers,
            self.clauses,
            self.clause_groups,
            self.directives,
        )
    }
}

/// The four ordered document batches a registry is built from.
#[derive(Debug, Clone, Default)]
pub struct SchemaBatches {
    modifiers: Vec<Document>,
    clauses: Vec<Document>,
    clause_groups: Vec<Document>,
    directives: Vec<Document>,
}

impl SchemaBatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document to the end of its batch.
    pub fn push(&mut self, kind: BatchKind, doc: Document) {
        self.batch_mut(kind).push(doc);
    }

    pub fn with(mut self, kind: BatchKind, doc: Document) -> Self {
        self.push(kind, doc);
        self
    }

    pub fn batch(&self, kind: BatchKind) -> &[Document] {
        match kind {
            BatchKind::Modifier => &self.modifiers,
            BatchKind::Clause => &self.clauses,
            BatchKind::ClauseGroup => &self.clause_groups,
            BatchKind::Directive => &self.directives,
        }
    }

    fn batch_mut(&mut self, kind: BatchKind) -> &mut Vec<Document> {
        match kind {
            BatchKind::Modifier => &mut self.modifiers,
            BatchKind::Clause => &mut self.clauses,
            BatchKind::ClauseGroup => &mut self.clause_groups,
            BatchKind::Directive => &mut self.directives,
        }
    }

    /// Total number of documents across all batches.
    pub fn len(&self) -> usize {
        BatchKind::LOAD_ORDER.iter().map(|k| self.batch(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
