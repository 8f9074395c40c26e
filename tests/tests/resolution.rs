//! Opt-in resolution over loaded registries.

use dirspec_tests::prelude::*;
use pretty_assertions::assert_eq;

fn openmp_subset() -> SchemaFixture {
    SchemaFixture::new()
        .modifier(
            "iterator",
            json!({ "$name": "iterator", "modifier type": { "$type": "identifier" } }),
        )
        .clause(
            "map",
            json!({ "$name": "map", "modifiers": [{ "$name": "iterator" }] }),
        )
        .clause("private", json!({ "$name": "private" }))
        .clause("firstprivate", json!({ "$name": "firstprivate" }))
        .clause_group(
            "privatization",
            json!({ "$name": "privatization", "clauses": ["private", "firstprivate"] }),
        )
        .directive(
            "target",
            json!({
                "$name": "target",
                "association": "block",
                "category": "executable",
                "clauses": ["map", "private"],
                "clause-groups": ["privatization"]
            }),
        )
}

// ========== TEST: closed_schema ==========

#[test]
fn test_closed_schema_validates() {
    // GIVEN a schema where every name resolves
    let registry = openmp_subset().load().unwrap();

    // WHEN validating
    let result = registry.validate();

    // THEN there is nothing to report
    assert_eq!(result, Ok(()));
    assert!(registry.dangling_references().is_empty());
}

#[test]
fn test_resolve_directive_accepted_clauses() {
    let registry = openmp_subset().load().unwrap();

    let resolved = registry.resolve_directive("target").unwrap();

    assert_eq!(
        resolved.clause_names().collect::<Vec<_>>(),
        ["map", "private", "firstprivate"]
    );
    assert_eq!(resolved.clause_groups[0].name, "privatization");
}

#[test]
fn test_effective_modifier_through_loaded_clause() {
    let registry = openmp_subset().load().unwrap();
    let map = registry.clause("map").unwrap();

    let effective = registry.effective_modifier(&map.modifiers[0]).unwrap();

    assert_eq!(effective.modifier.value_type, "identifier");
    assert!(!effective.inline);
}

// ========== TEST: open_schema ==========

#[test]
fn test_dangling_names_reported_on_request() {
    // GIVEN a schema that loads fine but names a missing clause
    let registry = openmp_subset()
        .clause_group(
            "privatization",
            json!({ "$name": "privatization", "clauses": ["private", "lastprivate"] }),
        )
        .load()
        .unwrap();

    // WHEN asking for dangling references
    let dangling = registry.dangling_references();

    // THEN the missing name is reported with its source
    assert_eq!(dangling.len(), 1);
    assert_eq!(
        dangling[0].to_string(),
        "clause-group 'privatization' refers to unknown clause 'lastprivate'"
    );
    assert!(matches!(
        registry.resolve_directive("target"),
        Err(ResolveError::Dangling(_))
    ));
}

#[test]
fn test_resolving_unknown_directive() {
    let registry = openmp_subset().load().unwrap();

    assert_eq!(
        registry.resolve_directive("teams").unwrap_err(),
        ResolveError::UnknownDirective("teams".to_string())
    );
}
