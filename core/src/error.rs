//! Schema errors.

use crate::{EntityKind, Field};
use std::fmt;
use thiserror::Error;

/// What is wrong with a malformed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A required field is absent.
    MissingField(Field),
    /// A field is present but has the wrong JSON shape.
    WrongShape {
        field: Field,
        expected: &'static str,
        found: &'static str,
    },
    /// The document itself is not a JSON object.
    NotAMapping { found: &'static str },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::MissingField(field) => write!(f, "missing required field '{}'", field),
            Problem::WrongShape {
                field,
                expected,
                found,
            } => write!(f, "field '{}' must be {}, found {}", field, expected, found),
            Problem::NotAMapping { found } => write!(f, "document must be an object, found {}", found),
        }
    }
}

/// Errors raised while turning documents into registry entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A required field is absent or of the wrong shape. Fatal for the whole load.
    #[error("malformed {kind}{}: {problem}", entity_label(.entity))]
    MalformedSchema {
        kind: EntityKind,
        entity: Option<String>,
        problem: Problem,
    },
}

fn entity_label(entity: &Option<String>) -> String {
    entity
        .as_deref()
        .map(|name| format!(" '{}'", name))
        .unwrap_or_default()
}

impl SchemaError {
    pub fn malformed(kind: EntityKind, entity: Option<String>, problem: Problem) -> Self {
        Self::MalformedSchema {
            kind,
            entity,
            problem,
        }
    }

    pub fn missing_field(kind: EntityKind, entity: Option<String>, field: Field) -> Self {
        Self::malformed(kind, entity, Problem::MissingField(field))
    }

    pub fn not_a_mapping(kind: EntityKind, found: &'static str) -> Self {
        Self::malformed(kind, None, Problem::NotAMapping { found })
    }

    /// The kind of entity whose document was rejected.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::MalformedSchema { kind, .. } => *kind,
        }
    }

    pub fn problem(&self) -> &Problem {
        match self {
            Self::MalformedSchema { problem, .. } => problem,
        }
    }
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
