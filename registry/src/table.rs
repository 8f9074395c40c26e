//! Name-keyed entity tables.

use crate::{parse, Clause, ClauseGroup, Directive, Modifier, Named};
use dirspec_core::{Document, SchemaResult};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Insert-or-replace store of entities keyed by name.
///
/// Iteration follows first-registration order; a replaced entry keeps its
/// original slot.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Table<T> {
    entries: IndexMap<String, T>,
}

pub type ModifierTable = Table<Modifier>;
pub type ClauseTable = Table<Clause>;
pub type ClauseGroupTable = Table<ClauseGroup>;
pub type DirectiveTable = Table<Directive>;

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Named> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Store an entity, silently replacing any earlier one with the same name.
    /// Returns the replaced entity.
    pub fn insert(&mut self, entity: T) -> Option<T> {
        let (_, previous) = self.put(entity);
        previous
    }

    fn put(&mut self, entity: T) -> (&T, Option<T>) {
        let (index, previous) = self.entries.insert_full(entity.name().to_owned(), entity);
        let stored = &self.entries[index];
        if previous.is_some() {
            debug!(kind = %T::KIND, name = stored.name(), "replaced earlier definition");
        } else {
            debug!(kind = %T::KIND, name = stored.name(), "registered");
        }
        (stored, previous)
    }
}

impl ModifierTable {
    /// Register a top-level modifier document.
    pub fn register(&mut self, doc: &Document) -> SchemaResult<&Modifier> {
        let modifier = parse::modifier(doc)?;
        Ok(self.put(modifier).0)
    }
}

impl ClauseTable {
    /// Register a clause document. Each modifier usage becomes a reference if
    /// `modifiers` already holds that name, otherwise an inline modifier.
    pub fn register(&mut self, doc: &Document, modifiers: &ModifierTable) -> SchemaResult<&Clause> {
        let clause = parse::clause(doc, modifiers)?;
        Ok(self.put(clause).0)
    }
}

impl ClauseGroupTable {
    /// Register a clause-group document. Clause names are stored unresolved.
    pub fn register(&mut self, doc: &Document) -> SchemaResult<&ClauseGroup> {
        let group = parse::clause_group(doc)?;
        Ok(self.put(group).0)
    }
}

impl DirectiveTable {
    /// Register a directive document. Clause and clause-group names are
    /// stored unresolved.
    pub fn register(&mut self, doc: &Document) -> SchemaResult<&Directive> {
        let directive = parse::directive(doc)?;
        Ok(self.put(directive).0)
    }
}
