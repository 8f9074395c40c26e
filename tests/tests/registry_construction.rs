//! Registry construction from schema trees on disk.

use dirspec_tests::prelude::*;
use pretty_assertions::assert_eq;

// ========== TEST: openmp_style_scenario ==========

#[test]
fn test_scenario_builds_unresolved_tables() {
    // GIVEN one document per batch, with "shared" never registered
    let fixture = SchemaFixture::new()
        .modifier("expr", json!({ "$name": "expr", "valueType": "identifier" }))
        .clause("private", json!({ "$name": "private", "modifiers": [{ "$name": "expr" }] }))
        .clause_group(
            "data-clauses",
            json!({ "$name": "dataClauses", "clauses": ["private", "shared"] }),
        )
        .directive(
            "parallel",
            json!({
                "$name": "parallel",
                "association": "block",
                "category": "executable",
                "clauses": ["private"],
                "clauseGroups": ["dataClauses"]
            }),
        );

    // WHEN loading the tree
    let registry = fixture.load().unwrap();

    // THEN every table holds its entity and names stay verbatim
    assert_eq!(registry.modifier("expr").unwrap().value_type, "identifier");
    assert_reference(&registry, "private", "expr", None);
    assert_names(
        &registry.clause_group("dataClauses").unwrap().clauses,
        &["private", "shared"],
    );
    let parallel = registry.directive("parallel").unwrap();
    assert_names(&parallel.clause_groups, &["dataClauses"]);
    assert_names(&parallel.clauses, &["private"]);
    assert_eq!(registry.len(), 4);
}

// ========== TEST: on_disk_key_layout ==========

#[test]
fn test_on_disk_key_layout() {
    // GIVEN documents using the file-format keys
    let fixture = SchemaFixture::new()
        .modifier(
            "map-type",
            json!({
                "$name": "map-type",
                "modifier type": { "$type": "enum", "items": ["to", "from", "tofrom"] },
                "modifying": "locator-list",
                "properties": ["unique"]
            }),
        )
        .directive(
            "loop",
            json!({
                "$name": "loop",
                "association": "loop-nest",
                "category": "executable",
                "clause-groups": ["loop-clauses"],
                "association properties": ["canonical"]
            }),
        );

    // WHEN loading
    let registry = fixture.load().unwrap();

    // THEN nested descriptors and spaced keys are understood
    let map_type = registry.modifier("map-type").unwrap();
    assert_eq!(map_type.value_type, "enum");
    assert_eq!(map_type.items.as_ref().unwrap().len(), 3);
    assert_eq!(map_type.modifying.as_deref(), Some("locator-list"));
    assert!(map_type.has_property("unique"));
    let directive = registry.directive("loop").unwrap();
    assert_names(&directive.clause_groups, &["loop-clauses"]);
    assert!(directive.association_properties.contains("canonical"));
}

// ========== TEST: last_write_wins ==========

#[test]
fn test_duplicate_modifier_last_file_wins() {
    // GIVEN two files defining "expr", loaded in file-name order
    let fixture = SchemaFixture::new()
        .modifier("01-expr", json!({ "$name": "expr", "valueType": "identifier" }))
        .modifier("02-expr", json!({ "$name": "expr", "valueType": "expression" }));

    // WHEN loading
    let registry = fixture.load().unwrap();

    // THEN exactly one entry remains, from the later file
    assert_eq!(registry.modifiers().len(), 1);
    assert_eq!(registry.modifier("expr").unwrap().value_type, "expression");
}

#[test]
fn test_duplicate_directive_replaced_in_place() {
    let fixture = SchemaFixture::new()
        .directive(
            "01-a",
            json!({ "$name": "target", "association": "block", "category": "executable" }),
        )
        .directive(
            "02-b",
            json!({ "$name": "teams", "association": "block", "category": "executable" }),
        )
        .directive(
            "03-c",
            json!({ "$name": "target", "association": "none", "category": "declarative" }),
        );

    let registry = fixture.load().unwrap();

    // first-insertion position is kept, fields come from the last document
    assert_eq!(registry.directives().names().collect::<Vec<_>>(), ["target", "teams"]);
    assert_eq!(registry.directive("target").unwrap().category, "declarative");
}

// ========== TEST: reference_vs_inline ==========

#[test]
fn test_usage_of_registered_modifier_is_a_reference() {
    // GIVEN a top-level modifier and a clause using it with its own binding
    let fixture = SchemaFixture::new()
        .modifier(
            "iterator",
            json!({ "$name": "iterator", "valueType": "identifier", "modifying": "locator-list" }),
        )
        .clause(
            "map",
            json!({ "$name": "map", "modifiers": [{ "$name": "iterator", "modifying": "list" }] }),
        );

    // WHEN loading
    let registry = fixture.load().unwrap();

    // THEN the usage points at the definition and keeps the usage-site binding
    assert_reference(&registry, "map", "iterator", Some("list"));
    assert_eq!(registry.modifiers().len(), 1);
}

#[test]
fn test_usage_of_unknown_modifier_is_inline() {
    // GIVEN a clause whose usage names no registered modifier
    let fixture = SchemaFixture::new().clause(
        "map",
        json!({
            "$name": "map",
            "modifiers": [{
                "$name": "map-type",
                "$type": "enum",
                "items": ["to", "from"],
                "modifying": "list"
            }]
        }),
    );

    // WHEN loading
    let registry = fixture.load().unwrap();

    // THEN the usage carries its own definition and the modifier table stays empty
    let inline = assert_inline(&registry, "map", "map-type");
    assert_eq!(inline.value_type, "enum");
    assert_eq!(inline.modifying.as_deref(), Some("list"));
    assert!(registry.modifiers().is_empty());
}

// ========== TEST: order_sensitivity ==========

#[test]
fn test_clause_before_modifier_yields_inline() {
    // GIVEN documents registered out of load order: A, clause, B
    let doc = |v| dirspec_core::Document::from_value(v, EntityKind::Modifier).unwrap();
    let clause = json!({
        "$name": "c",
        "modifiers": [
            { "$name": "A" },
            { "$name": "B", "valueType": "expression" }
        ]
    });
    let mut builder = RegistryBuilder::new();
    builder
        .register_modifier(&doc(json!({ "$name": "A", "valueType": "identifier" })))
        .unwrap();
    builder.register_clause(&doc(clause.clone())).unwrap();
    builder
        .register_modifier(&doc(json!({ "$name": "B", "valueType": "expression" })))
        .unwrap();

    // WHEN building
    let early = builder.build();

    // THEN A is a reference but B stays inline
    assert_reference(&early, "c", "A", None);
    assert_inline(&early, "c", "B");

    // AND in load order both usages are references
    let in_order = SchemaFixture::new()
        .modifier("a", json!({ "$name": "A", "valueType": "identifier" }))
        .modifier("b", json!({ "$name": "B", "valueType": "expression" }))
        .clause("c", clause)
        .load()
        .unwrap();
    assert_reference(&in_order, "c", "A", None);
    assert_reference(&in_order, "c", "B", None);
}

// ========== TEST: no_cross_validation ==========

#[test]
fn test_dangling_names_load_without_error() {
    // GIVEN a group and directive naming things that do not exist
    let fixture = SchemaFixture::new()
        .clause_group("g", json!({ "$name": "g", "clauses": ["ghost"] }))
        .directive(
            "d",
            json!({
                "$name": "d",
                "association": "block",
                "category": "executable",
                "clauses": ["nowait"],
                "clauseGroups": ["missing"]
            }),
        );

    // WHEN loading
    let registry = fixture.load().unwrap();

    // THEN both are stored with the unresolved names verbatim
    assert_names(&registry.clause_group("g").unwrap().clauses, &["ghost"]);
    assert_names(&registry.directive("d").unwrap().clause_groups, &["missing"]);
}

// ========== TEST: malformed_is_fatal ==========

#[test]
fn test_modifier_without_name_fails_load() {
    // GIVEN a valid modifier followed by one missing its name
    let fixture = SchemaFixture::new()
        .modifier("01-ok", json!({ "$name": "expr", "valueType": "identifier" }))
        .modifier("02-bad", json!({ "valueType": "identifier" }));

    // WHEN loading
    let err = fixture.load().unwrap_err();

    // THEN loading fails naming the file, and no registry is produced
    let schema = err.schema_error().unwrap();
    assert_eq!(schema.kind(), EntityKind::Modifier);
    assert_eq!(schema.problem(), &Problem::MissingField(Field::Name));
    assert!(err.path().ends_with("02-bad.json"));
}

#[test]
fn test_malformed_inline_usage_names_clause() {
    let fixture = SchemaFixture::new().clause(
        "map",
        json!({ "$name": "map", "modifiers": [{ "$name": "map-type" }] }),
    );

    let err = fixture.load().unwrap_err();

    let schema = err.schema_error().unwrap();
    assert_eq!(schema.kind(), EntityKind::ModifierUsage);
    assert!(err.to_string().contains("map/map-type"), "{}", err);
}

#[test]
fn test_invalid_json_fails_load() {
    let fixture = SchemaFixture::new().raw(BatchKind::Clause, "broken.json", "{ \"$name\": ");

    let err = fixture.load().unwrap_err();

    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn test_from_batches_matches_loader() {
    // GIVEN a schema tree
    let fixture = SchemaFixture::new()
        .modifier("expr", json!({ "$name": "expr", "valueType": "identifier" }))
        .clause("private", json!({ "$name": "private", "modifiers": [{ "$name": "expr" }] }));

    // WHEN reading batches separately and building from them
    let batches = fixture.schema_dir().read_batches().unwrap();
    let registry = Registry::from_batches(&batches).unwrap();

    // THEN the result matches a direct load
    assert_reference(&registry, "private", "expr", None);
    assert_eq!(registry.len(), fixture.load().unwrap().len());
}
