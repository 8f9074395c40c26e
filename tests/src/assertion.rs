//! Assertions over registry contents.
//!
//! These panic with a message naming the clause and usage, so a failing
//! integration test points straight at the offending schema entry.

use dirspec_registry::{ClauseModifier, Modifier, Registry};

fn usage<'r>(registry: &'r Registry, clause: &str, modifier: &str) -> &'r ClauseModifier {
    let Some(c) = registry.clause(clause) else {
        panic!("clause '{clause}' is not registered");
    };
    match c.modifier(modifier) {
        Some(u) => u,
        None => panic!(
            "clause '{clause}' has no modifier usage '{modifier}' (has: {:?})",
            c.modifiers.iter().map(ClauseModifier::name).collect::<Vec<_>>()
        ),
    }
}

/// Assert that `clause` refers to the registered modifier `modifier` with the
/// given usage-site binding.
pub fn assert_reference(registry: &Registry, clause: &str, modifier: &str, modifying: Option<&str>) {
    match usage(registry, clause, modifier) {
        ClauseModifier::Reference(r) => assert_eq!(
            r.modifying.as_deref(),
            modifying,
            "binding of '{modifier}' in clause '{clause}'"
        ),
        ClauseModifier::Inline(_) => {
            panic!("expected '{modifier}' in clause '{clause}' to be a reference, found inline")
        }
    }
}

/// Assert that `clause` defines `modifier` inline and return the definition.
pub fn assert_inline<'r>(registry: &'r Registry, clause: &str, modifier: &str) -> &'r Modifier {
    match usage(registry, clause, modifier) {
        ClauseModifier::Inline(m) => m,
        ClauseModifier::Reference(_) => {
            panic!("expected '{modifier}' in clause '{clause}' to be inline, found a reference")
        }
    }
}

/// Assert a list of names, whatever the item type.
pub fn assert_names<T: AsRef<str>>(actual: &[T], expected: &[&str]) {
    let actual: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
    assert_eq!(actual, expected);
}
