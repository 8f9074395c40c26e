//! Field keys recognised in schema documents.
//!
//! Every logical field has a canonical key (the spelling used by the on-disk
//! JSON schema) and possibly a camelCase alias. Lookups try the keys in order
//! and take the first one present.

use std::fmt;

/// A logical field of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Entity name.
    Name,
    /// Nested value-type descriptor object of a modifier.
    ModifierType,
    /// Value type tag, inside the descriptor or flat on the document.
    ValueType,
    /// Permitted literal values of a modifier.
    Items,
    /// Clause argument a modifier decorates.
    Modifying,
    Properties,
    Arguments,
    /// Modifier usages of a clause.
    Modifiers,
    Clauses,
    ClauseGroups,
    Association,
    Category,
    AssociationProperties,
}

impl Field {
    /// Keys accepted for this field, canonical key first.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["$name", "name"],
            Field::ModifierType => &["modifier type"],
            Field::ValueType => &["$type", "valueType"],
            Field::Items => &["items"],
            Field::Modifying => &["modifying", "modifyingTarget"],
            Field::Properties => &["properties"],
            Field::Arguments => &["arguments"],
            Field::Modifiers => &["modifiers"],
            Field::Clauses => &["clauses"],
            Field::ClauseGroups => &["clause-groups", "clauseGroups"],
            Field::Association => &["association"],
            Field::Category => &["category"],
            Field::AssociationProperties => &["association properties", "associationProperties"],
        }
    }

    /// The canonical on-disk key.
    pub fn canonical(self) -> &'static str {
        self.keys()[0]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
