//! Entity kinds.

use serde::Serialize;
use std::fmt;

/// The kind of schema record a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Modifier,
    /// A modifier entry inside a clause's `modifiers` list.
    ModifierUsage,
    Clause,
    ClauseGroup,
    Directive,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Modifier => "modifier",
            EntityKind::ModifierUsage => "modifier usage",
            EntityKind::Clause => "clause",
            EntityKind::ClauseGroup => "clause-group",
            EntityKind::Directive => "directive",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level document batch. Each batch fills one registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BatchKind {
    Modifier,
    Clause,
    ClauseGroup,
    Directive,
}

impl BatchKind {
    /// Batches in the order they must be registered.
    pub const LOAD_ORDER: [BatchKind; 4] = [
        BatchKind::Modifier,
        BatchKind::Clause,
        BatchKind::ClauseGroup,
        BatchKind::Directive,
    ];

    /// Directory (under the schema's `json/` root) holding this batch.
    pub fn dir_name(self) -> &'static str {
        match self {
            BatchKind::Modifier => "modifier",
            BatchKind::Clause => "clause",
            BatchKind::ClauseGroup => "clause-group",
            BatchKind::Directive => "directive",
        }
    }

    pub fn entity_kind(self) -> EntityKind {
        match self {
            BatchKind::Modifier => EntityKind::Modifier,
            BatchKind::Clause => EntityKind::Clause,
            BatchKind::ClauseGroup => EntityKind::ClauseGroup,
            BatchKind::Directive => EntityKind::Directive,
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
