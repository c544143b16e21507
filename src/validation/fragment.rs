use crate::ast::DirectiveLocation;
use crate::collections::HashSet;
use crate::collections::IndexSet;
use crate::document::DocumentContext;
use crate::schema::SchemaContext;
use crate::topological::topological_sort;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;
use crate::Name;

/// Phase 1: the fragment definitions.
///
/// Checks that names are unique, that every fragment is reachable from some
/// operation, that every spread between fragments resolves, that the spread
/// graph is acyclic, and that each fragment has a composite type condition,
/// legal directives, and a valid selection tree.
pub(crate) fn validate_fragment_definitions(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    document: &DocumentContext,
) {
    // Fragment definition names must be unique across the document.
    let mut seen: HashSet<&str> = HashSet::default();
    for fragment in document.fragments() {
        if !seen.insert(fragment.name.as_str()) {
            errors.push(GqlError::NameNotUnique(fragment.name.clone()));
        }
    }

    // Every defined fragment must be used: reachable, through any chain of
    // spreads, from at least one operation.
    let reachable = document.reachable_fragments();
    for fragment in document.fragments() {
        if !reachable.contains(fragment.name.as_str()) {
            errors.push(GqlError::UnusedDefinition(fragment.name.clone()));
        }
    }

    // Every fragment a fragment spreads must be defined.
    let mut missing: IndexSet<&Name> = IndexSet::default();
    for dependencies in document.fragment_dependencies().values() {
        for dependency in dependencies {
            if document.fragment(dependency).is_none() {
                missing.insert(dependency);
            }
        }
    }
    for name in missing {
        errors.push(GqlError::MissingDefinition(name.clone()));
    }

    // Spreads between fragments must not form a cycle.
    if let Err(cycles) = topological_sort(document.fragment_dependencies()) {
        errors.push(GqlError::CyclesDetected(cycles));
    }

    for fragment in document.fragments() {
        super::directive::validate_directives(
            errors,
            schema,
            &fragment.directives,
            DirectiveLocation::FragmentDefinition,
            VariableContext::Fragment,
        );
        match schema.type_def(&fragment.type_condition) {
            None => errors.push(GqlError::MissingTypeDefinition(
                fragment.type_condition.clone(),
            )),
            Some(condition) if !condition.is_composite() => {
                errors.push(GqlError::InvalidNamedType(fragment.type_condition.clone()));
            }
            Some(_) => {
                super::selection::validate_selection_set(
                    errors,
                    schema,
                    document,
                    &fragment.type_condition,
                    &fragment.selection_set,
                    VariableContext::Fragment,
                );
            }
        }
    }
}
