//! Opt-in reference resolution over a finished registry.
//!
//! Construction never calls into this module. Consumers that want a checked
//! graph ask for it explicitly.

use crate::{Clause, ClauseGroup, ClauseModifier, Directive, Modifier, Named, Registry};
use dirspec_core::EntityKind;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A stored name that does not resolve to a registered entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DanglingReference {
    pub from_kind: EntityKind,
    pub from: String,
    pub target_kind: EntityKind,
    pub target: String,
}

impl DanglingReference {
    fn new(from_kind: EntityKind, from: &str, target_kind: EntityKind, target: &str) -> Self {
        Self {
            from_kind,
            from: from.to_owned(),
            target_kind,
            target: target.to_owned(),
        }
    }
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' refers to unknown {} '{}'",
            self.from_kind, self.from, self.target_kind, self.target
        )
    }
}

/// Errors from opt-in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown directive: {0}")]
    UnknownDirective(String),

    #[error("{} dangling reference(s){}", .0.len(), first_dangling(.0))]
    Dangling(Vec<DanglingReference>),
}

fn first_dangling(refs: &[DanglingReference]) -> String {
    refs.first().map(|r| format!(", first: {}", r)).unwrap_or_default()
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// A directive with its clause groups and accepted clauses looked up.
#[derive(Debug, Clone)]
pub struct ResolvedDirective<'r> {
    pub directive: &'r Directive,
    /// Clause groups in the directive's order.
    pub clause_groups: Vec<&'r ClauseGroup>,
    /// Accepted clauses: direct clauses first, then each group's clauses, without duplicates.
    pub clauses: Vec<&'r Clause>,
}

impl<'r> ResolvedDirective<'r> {
    pub fn accepts(&self, clause: &str) -> bool {
        self.clauses.iter().any(|c| c.name == clause)
    }

    pub fn clause_names(&self) -> impl Iterator<Item = &'r str> + '_ {
        self.clauses.iter().copied().map(|c| c.name.as_str())
    }
}

/// A clause's modifier usage joined with its definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveModifier<'r> {
    pub modifier: &'r Modifier,
    /// Binding in effect at the usage site.
    pub modifying: Option<&'r str>,
    /// Whether the definition is local to the clause.
    pub inline: bool,
}

impl Registry {
    /// Every stored name that does not resolve, in table order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for clause in self.clauses().iter() {
            for usage in &clause.modifiers {
                if let ClauseModifier::Reference(r) = usage {
                    if self.modifier(&r.name).is_none() {
                        dangling.push(DanglingReference::new(
                            Clause::KIND,
                            &clause.name,
                            Modifier::KIND,
                            &r.name,
                        ));
                    }
                }
            }
        }

        for group in self.clause_groups().iter() {
            for name in &group.clauses {
                if self.clause(name.name()).is_none() {
                    dangling.push(DanglingReference::new(
                        ClauseGroup::KIND,
                        &group.name,
                        name.target_kind(),
                        name.name(),
                    ));
                }
            }
        }

        for directive in self.directives().iter() {
            for name in &directive.clauses {
                if self.clause(name.name()).is_none() {
                    dangling.push(DanglingReference::new(
                        Directive::KIND,
                        &directive.name,
                        name.target_kind(),
                        name.name(),
                    ));
                }
            }
            for name in &directive.clause_groups {
                if self.clause_group(name.name()).is_none() {
                    dangling.push(DanglingReference::new(
                        Directive::KIND,
                        &directive.name,
                        name.target_kind(),
                        name.name(),
                    ));
                }
            }
        }

        dangling
    }

    /// Fail if any stored name does not resolve.
    pub fn validate(&self) -> ResolveResult<()> {
        let dangling = self.dangling_references();
        if dangling.is_empty() {
            Ok(())
        } else {
            Err(ResolveError::Dangling(dangling))
        }
    }

    /// Look up a directive's clause groups and its full accepted clause set.
    pub fn resolve_directive(&self, name: &str) -> ResolveResult<ResolvedDirective<'_>> {
        let directive = self
            .directive(name)
            .ok_or_else(|| ResolveError::UnknownDirective(name.to_owned()))?;

        let mut dangling = Vec::new();
        let mut clause_groups = Vec::new();
        for group_name in &directive.clause_groups {
            match self.clause_group(group_name.name()) {
                Some(group) => clause_groups.push(group),
                None => dangling.push(DanglingReference::new(
                    Directive::KIND,
                    &directive.name,
                    ClauseGroup::KIND,
                    group_name.name(),
                )),
            }
        }

        let mut seen = HashSet::new();
        let mut clauses = Vec::new();
        let direct = directive.clauses.iter().map(|c| (Directive::KIND, directive.name.as_str(), c));
        let grouped = clause_groups
            .iter()
            .flat_map(|g| g.clauses.iter().map(move |c| (ClauseGroup::KIND, g.name.as_str(), c)));
        for (from_kind, from, clause_name) in direct.chain(grouped) {
            if !seen.insert(clause_name.name()) {
                continue;
            }
            match self.clause(clause_name.name()) {
                Some(clause) => clauses.push(clause),
                None => dangling.push(DanglingReference::new(
                    from_kind,
                    from,
                    Clause::KIND,
                    clause_name.name(),
                )),
            }
        }

        if !dangling.is_empty() {
            return Err(ResolveError::Dangling(dangling));
        }

        Ok(ResolvedDirective {
            directive,
            clause_groups,
            clauses,
        })
    }

    /// Join a modifier usage with its definition. A reference takes the
    /// usage-site binding, even when that binding is absent. Returns `None`
    /// for a reference whose name is not registered.
    pub fn effective_modifier<'r>(&'r self, usage: &'r ClauseModifier) -> Option<EffectiveModifier<'r>> {
        match usage {
            ClauseModifier::Reference(r) => self.modifier(&r.name).map(|modifier| EffectiveModifier {
                modifier,
                modifying: r.modifying.as_deref(),
                inline: false,
            }),
            ClauseModifier::Inline(modifier) => Some(EffectiveModifier {
                modifier,
                modifying: modifier.modifying.as_deref(),
                inline: true,
            }),
        }
    }
}
