//! Schema entity types.

use dirspec_core::EntityKind;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Free-form capability flags ("optional", "unique", ...).
pub type Properties = BTreeSet<String>;

/// An entity stored in a registry table under its name.
pub trait Named {
    /// Kind reported in diagnostics.
    const KIND: EntityKind;

    fn name(&self) -> &str;
}

/// Modifier definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modifier {
    /// Modifier name.
    pub name: String,
    /// Value domain tag (e.g. an enumeration name).
    pub value_type: String,
    /// Permitted literal values; `None` when the domain is open-ended.
    pub items: Option<Vec<Value>>,
    /// Clause argument this modifier decorates, if bound.
    pub modifying: Option<String>,
    pub properties: Properties,
}

impl Modifier {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            items: None,
            modifying: None,
            properties: Properties::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn modifying(mut self, target: impl Into<String>) -> Self {
        self.modifying = Some(target.into());
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.insert(property.into());
        self
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains(property)
    }
}

impl Named for Modifier {
    const KIND: EntityKind = EntityKind::Modifier;

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reuse of a top-level modifier with a usage-site argument binding.
///
/// Carries only the name and binding; join against the modifier table for
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModifierReference {
    pub name: String,
    /// Binding supplied at the usage site. Replaces the referenced modifier's own.
    pub modifying: Option<String>,
}

impl ModifierReference {
    pub fn new(name: impl Into<String>, modifying: Option<String>) -> Self {
        Self {
            name: name.into(),
            modifying,
        }
    }
}

/// One entry of a clause's modifier list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum ClauseModifier {
    /// The name was already registered as a top-level modifier.
    Reference(ModifierReference),
    /// Declared inline; local to this clause.
    Inline(Modifier),
}

impl ClauseModifier {
    pub fn name(&self) -> &str {
        match self {
            ClauseModifier::Reference(r) => &r.name,
            ClauseModifier::Inline(m) => &m.name,
        }
    }

    /// The argument binding recorded at this usage site.
    pub fn modifying(&self) -> Option<&str> {
        match self {
            ClauseModifier::Reference(r) => r.modifying.as_deref(),
            ClauseModifier::Inline(m) => m.modifying.as_deref(),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, ClauseModifier::Reference(_))
    }

    pub fn as_inline(&self) -> Option<&Modifier> {
        match self {
            ClauseModifier::Inline(m) => Some(m),
            ClauseModifier::Reference(_) => None,
        }
    }
}

/// Clause definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    pub name: String,
    /// Argument-shape descriptors, kept as given.
    pub arguments: Vec<Value>,
    pub properties: Properties,
    /// Modifier usages in document order.
    pub modifiers: Vec<ClauseModifier>,
}

impl Clause {
    /// First modifier usage with this name.
    pub fn modifier(&self, name: &str) -> Option<&ClauseModifier> {
        self.modifiers.iter().find(|m| m.name() == name)
    }
}

impl Named for Clause {
    const KIND: EntityKind = EntityKind::Clause;

    fn name(&self) -> &str {
        &self.name
    }
}

/// A name pointing at another entity. Never checked or dereferenced by the
/// registry itself.
pub struct NameRef<T> {
    name: String,
    target: PhantomData<fn() -> T>,
}

/// Unresolved clause name.
pub type ClauseRef = NameRef<Clause>;
/// Unresolved clause-group name.
pub type ClauseGroupRef = NameRef<ClauseGroup>;

impl<T> NameRef<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Named> NameRef<T> {
    /// Kind of entity this name is expected to resolve to.
    pub fn target_kind(&self) -> EntityKind {
        T::KIND
    }
}

impl<T> Clone for NameRef<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> fmt::Debug for NameRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NameRef").field(&self.name).finish()
    }
}

impl<T> fmt::Display for NameRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> PartialEq for NameRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for NameRef<T> {}

impl<T> Hash for NameRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> PartialEq<str> for NameRef<T> {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl<T> PartialEq<&str> for NameRef<T> {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl<T> AsRef<str> for NameRef<T> {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl<T> From<String> for NameRef<T> {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl<T> From<&str> for NameRef<T> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl<T> Serialize for NameRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Named, reusable set of clause names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseGroup {
    pub name: String,
    pub clauses: Vec<ClauseRef>,
    pub properties: Properties,
}

impl Named for ClauseGroup {
    const KIND: EntityKind = EntityKind::ClauseGroup;

    fn name(&self) -> &str {
        &self.name
    }
}

/// Directive definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    /// Structural association (block, loop, none, ...).
    pub association: String,
    /// Purpose classification (executable, declarative, ...).
    pub category: String,
    pub clauses: Vec<ClauseRef>,
    pub clause_groups: Vec<ClauseGroupRef>,
    pub arguments: Vec<Value>,
    /// Constraints on the associated code region.
    pub association_properties: Properties,
    pub properties: Properties,
}

impl Named for Directive {
    const KIND: EntityKind = EntityKind::Directive;

    fn name(&self) -> &str {
        &self.name
    }
}
