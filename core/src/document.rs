//! Generic schema documents.
//!
//! A `Document` is one parsed JSON object as supplied by the schema reader.
//! Entity construction goes through a [`FieldReader`], which knows which entity
//! is being read so that errors and warnings can name it.

use crate::{EntityKind, Field, Problem, SchemaError, SchemaResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::warn;

/// One parsed schema document: a mapping from field names to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a parsed JSON value, which must be an object.
    pub fn from_value(value: Value, kind: EntityKind) -> SchemaResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SchemaError::not_a_mapping(kind, json_kind(&other))),
        }
    }

    /// Look up a field under any of its accepted keys.
    pub fn get(&self, field: Field) -> Option<&Value> {
        field.keys().iter().find_map(|key| self.fields.get(*key))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Start reading this document as an entity of the given kind.
    pub fn reader(&self, kind: EntityKind) -> FieldReader<'_> {
        FieldReader {
            doc: self,
            kind,
            entity: None,
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Typed field access for one entity document.
///
/// Required accessors fail with `MalformedSchema`. Optional accessors fall
/// back to absent/empty; a present field of the wrong shape also falls back,
/// with a warning.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    doc: &'a Document,
    kind: EntityKind,
    entity: Option<String>,
}

impl<'a> FieldReader<'a> {
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Label errors and warnings with this entity name.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Read a nested document on behalf of the same entity.
    pub fn reader_for<'b>(&self, doc: &'b Document) -> FieldReader<'b> {
        FieldReader {
            doc,
            kind: self.kind,
            entity: self.entity.clone(),
        }
    }

    /// Read the required `name` field and remember it for later diagnostics.
    pub fn name(&mut self) -> SchemaResult<String> {
        let name = self.require_str(Field::Name)?;
        if self.entity.is_none() {
            self.entity = Some(name.clone());
        }
        Ok(name)
    }

    /// Build a `MalformedSchema` error for this entity.
    pub fn error(&self, problem: Problem) -> SchemaError {
        SchemaError::malformed(self.kind, self.entity.clone(), problem)
    }

    fn wrong_shape(&self, field: Field, expected: &'static str, found: &Value) -> SchemaError {
        self.error(Problem::WrongShape {
            field,
            expected,
            found: json_kind(found),
        })
    }

    fn ignore(&self, field: Field, expected: &'static str, found: &Value) {
        warn!(
            kind = %self.kind,
            entity = self.entity.as_deref().unwrap_or("<unnamed>"),
            field = field.canonical(),
            expected,
            found = json_kind(found),
            "ignoring malformed optional field"
        );
    }

    pub fn require_str(&self, field: Field) -> SchemaResult<String> {
        match self.doc.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.wrong_shape(field, "a string", other)),
            None => Err(self.error(Problem::MissingField(field))),
        }
    }

    pub fn opt_str(&self, field: Field) -> Option<String> {
        match self.doc.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => {
                self.ignore(field, "a string", other);
                None
            }
        }
    }

    /// A required nested object. Absence and wrong shape are both fatal.
    pub fn require_nested(&self, field: Field) -> SchemaResult<Document> {
        match self.doc.get(field) {
            Some(Value::Object(map)) => Ok(Document::new(map.clone())),
            Some(other) => Err(self.wrong_shape(field, "an object", other)),
            None => Err(self.error(Problem::MissingField(field))),
        }
    }

    fn list(&self, field: Field) -> Option<&'a [Value]> {
        match self.doc.get(field)? {
            Value::Array(items) => Some(items.as_slice()),
            Value::Null => None,
            other => {
                self.ignore(field, "an array", other);
                None
            }
        }
    }

    /// Ordered list of strings; non-string entries are skipped.
    pub fn str_list(&self, field: Field) -> Vec<String> {
        let Some(items) = self.list(field) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    self.ignore(field, "an array of strings", other);
                    None
                }
            })
            .collect()
    }

    /// Set of flag strings.
    pub fn str_set(&self, field: Field) -> BTreeSet<String> {
        self.str_list(field).into_iter().collect()
    }

    /// Ordered list of opaque JSON values, empty when absent.
    pub fn values(&self, field: Field) -> Vec<Value> {
        self.opt_values(field).unwrap_or_default()
    }

    /// Ordered list of opaque JSON values, `None` when absent.
    pub fn opt_values(&self, field: Field) -> Option<Vec<Value>> {
        self.list(field).map(<[Value]>::to_vec)
    }

    /// Ordered list of nested documents. Entries that are not objects are fatal,
    /// since every nested entity needs at least a name.
    pub fn documents(&self, field: Field) -> SchemaResult<Vec<Document>> {
        let Some(items) = self.list(field) else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Document::new(map.clone())),
                other => Err(self.wrong_shape(field, "an array of objects", other)),
            })
            .collect()
    }
}

/// Human name of a JSON value's shape.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
