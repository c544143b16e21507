use crate::ast::DirectiveLocation;
use crate::ast::NamedType;
use crate::ast::Selection;
use crate::document::DocumentContext;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;

/// Walk a selection tree rooted at `against`, checking field existence,
/// leaf selection discipline, fragment type compatibility, directive
/// locations, and argument values.
///
/// The walk keeps an explicit frontier of `(parent type, selection)` pairs
/// so arbitrarily deep documents cannot exhaust the native stack. A
/// malformed branch is truncated — its children are not visited — while
/// sibling branches continue to be checked.
pub(crate) fn validate_selection_set<'doc>(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    document: &'doc DocumentContext,
    against: &NamedType,
    selection_set: &'doc [Selection],
    variables: VariableContext<'_>,
) {
    let mut frontier: Vec<(NamedType, &'doc Selection)> = Vec::with_capacity(selection_set.len());
    frontier.extend(
        selection_set
            .iter()
            .rev()
            .map(|selection| (against.clone(), selection)),
    );

    while let Some((parent, selection)) = frontier.pop() {
        match selection {
            Selection::Field(field) => {
                super::directive::validate_directives(
                    errors,
                    schema,
                    &field.directives,
                    DirectiveLocation::Field,
                    variables,
                );
                let Some(definition) = schema.field_definition(&parent, &field.name) else {
                    errors.push(GqlError::MissingField {
                        field: field.name.clone(),
                        parent,
                    });
                    continue;
                };
                super::argument::validate_arguments(
                    errors,
                    schema,
                    &field.arguments,
                    &definition.arguments,
                    variables,
                );
                let result_type = definition.ty.inner_named_type().clone();
                match schema.type_def(&result_type) {
                    None => errors.push(GqlError::MissingTypeDefinition(result_type)),
                    Some(definition) if definition.is_leaf() => {
                        if !field.selection_set.is_empty() {
                            errors.push(GqlError::InvalidSelection {
                                field: field.name.clone(),
                                parent,
                            });
                        }
                    }
                    Some(_) => {
                        if field.selection_set.is_empty() {
                            errors.push(GqlError::MissingSelection {
                                field: field.name.clone(),
                                parent,
                            });
                        } else {
                            frontier.extend(
                                field
                                    .selection_set
                                    .iter()
                                    .rev()
                                    .map(|child| (result_type.clone(), child)),
                            );
                        }
                    }
                }
            }
            Selection::InlineFragment(inline) => {
                super::directive::validate_directives(
                    errors,
                    schema,
                    &inline.directives,
                    DirectiveLocation::InlineFragment,
                    variables,
                );
                match &inline.type_condition {
                    Some(condition) => {
                        match schema.type_def(condition) {
                            None => {
                                errors.push(GqlError::MissingTypeDefinition(condition.clone()));
                                continue;
                            }
                            Some(definition) if !definition.is_composite() => {
                                errors.push(GqlError::InvalidNamedType(condition.clone()));
                                continue;
                            }
                            Some(_) => {}
                        }
                        if !compatible(schema, &parent, condition) {
                            errors.push(GqlError::InvalidFragment(condition.clone()));
                        }
                        frontier.extend(
                            inline
                                .selection_set
                                .iter()
                                .rev()
                                .map(|child| (condition.clone(), child)),
                        );
                    }
                    // Without a condition the fragment applies to the
                    // enclosing type directly.
                    None => match schema.type_def(&parent) {
                        Some(definition) if definition.is_composite() => {
                            frontier.extend(
                                inline
                                    .selection_set
                                    .iter()
                                    .rev()
                                    .map(|child| (parent.clone(), child)),
                            );
                        }
                        _ => errors.push(GqlError::InvalidNamedType(parent)),
                    },
                }
            }
            Selection::FragmentSpread(spread) => {
                super::directive::validate_directives(
                    errors,
                    schema,
                    &spread.directives,
                    DirectiveLocation::FragmentSpread,
                    variables,
                );
                match document.fragment(&spread.fragment_name) {
                    None => {
                        // Fragment-to-fragment spreads are resolved by the
                        // fragment pass; reporting here too would double up.
                        if matches!(variables, VariableContext::Operation(_)) {
                            errors.push(GqlError::MissingDefinition(
                                spread.fragment_name.clone(),
                            ));
                        }
                    }
                    Some(fragment) => {
                        // The fragment's own selections are validated with
                        // its definition; only compatibility matters here.
                        if !compatible(schema, &parent, &fragment.type_condition) {
                            errors.push(GqlError::InvalidFragment(
                                fragment.type_condition.clone(),
                            ));
                        }
                    }
                }
            }
        }
    }
}

/// A fragment conditioned on `condition` may be spread into a selection on
/// `parent` when either type is covariantly related to the other: some
/// concrete object type could satisfy both.
fn compatible(schema: &SchemaContext, parent: &str, condition: &str) -> bool {
    schema.is_subtype(parent, condition) || schema.is_subtype(condition, parent)
}
