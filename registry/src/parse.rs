//! Document to entity conversion.
//!
//! Pure functions; nothing here touches a table except the read-only
//! modifier lookup that decides reference vs. inline.

use crate::{
    Clause, ClauseGroup, ClauseModifier, Directive, Modifier, ModifierReference, ModifierTable,
};
use dirspec_core::{Document, EntityKind, Field, FieldReader, Problem, SchemaResult};
use serde_json::Value;
use tracing::trace;

pub(crate) fn modifier(doc: &Document) -> SchemaResult<Modifier> {
    let mut r = doc.reader(EntityKind::Modifier);
    let name = r.name()?;
    let (value_type, items) = value_type(&r)?;

    Ok(Modifier {
        name,
        value_type,
        items,
        modifying: r.opt_str(Field::Modifying),
        properties: r.str_set(Field::Properties),
    })
}

/// Read the value-type descriptor: the nested `modifier type` object if
/// present, otherwise a flat `$type`/`valueType` on the document itself.
fn value_type(r: &FieldReader<'_>) -> SchemaResult<(String, Option<Vec<Value>>)> {
    if r.document().contains(Field::ModifierType) {
        let descriptor = r.require_nested(Field::ModifierType)?;
        let inner = r.reader_for(&descriptor);
        return Ok((inner.require_str(Field::ValueType)?, inner.opt_values(Field::Items)));
    }
    if r.document().contains(Field::ValueType) {
        return Ok((r.require_str(Field::ValueType)?, r.opt_values(Field::Items)));
    }
    Err(r.error(Problem::MissingField(Field::ModifierType)))
}

pub(crate) fn clause(doc: &Document, known: &ModifierTable) -> SchemaResult<Clause> {
    let mut r = doc.reader(EntityKind::Clause);
    let name = r.name()?;

    let modifiers = r
        .documents(Field::Modifiers)?
        .iter()
        .enumerate()
        .map(|(index, usage)| modifier_usage(&name, index, usage, known))
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(Clause {
        arguments: r.values(Field::Arguments),
        properties: r.str_set(Field::Properties),
        modifiers,
        name,
    })
}

/// A usage whose name is already a top-level modifier becomes a reference;
/// anything else is kept as a clause-local inline modifier.
fn modifier_usage(
    clause: &str,
    index: usize,
    usage: &Document,
    known: &ModifierTable,
) -> SchemaResult<ClauseModifier> {
    let mut r = usage
        .reader(EntityKind::ModifierUsage)
        .with_entity(format!("{}[{}]", clause, index));
    let name = r.name()?;
    let r = r.with_entity(format!("{}/{}", clause, name));
    let modifying = r.opt_str(Field::Modifying);

    if known.contains(&name) {
        trace!(clause, modifier = %name, "modifier usage is a reference");
        return Ok(ClauseModifier::Reference(ModifierReference { name, modifying }));
    }

    trace!(clause, modifier = %name, "modifier usage is inline");
    let (value_type, items) = value_type(&r)?;
    Ok(ClauseModifier::Inline(Modifier {
        name,
        value_type,
        items,
        modifying,
        properties: r.str_set(Field::Properties),
    }))
}

pub(crate) fn clause_group(doc: &Document) -> SchemaResult<ClauseGroup> {
    let mut r = doc.reader(EntityKind::ClauseGroup);
    let name = r.name()?;

    Ok(ClauseGroup {
        name,
        clauses: r.str_list(Field::Clauses).into_iter().map(Into::into).collect(),
        properties: r.str_set(Field::Properties),
    })
}

pub(crate) fn directive(doc: &Document) -> SchemaResult<Directive> {
    let mut r = doc.reader(EntityKind::Directive);
    let name = r.name()?;
    let association = r.require_str(Field::Association)?;
    let category = r.require_str(Field::Category)?;

    Ok(Directive {
        name,
        association,
        category,
        clauses: r.str_list(Field::Clauses).into_iter().map(Into::into).collect(),
        clause_groups: r
            .str_list(Field::ClauseGroups)
            .into_iter()
            .map(Into::into)
            .collect(),
        arguments: r.values(Field::Arguments),
        association_properties: r.str_set(Field::AssociationProperties),
        properties: r.str_set(Field::Properties),
    })
}
