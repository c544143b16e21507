use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::collections::HashSet;
use crate::document::DocumentContext;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;
use crate::Name;

/// Phase 2: the operation definitions. Runs only when phase 1 found the
/// fragments well-formed, since the selection walk and the variable
/// correspondence both lean on them.
pub(crate) fn validate_operation_definitions(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    document: &DocumentContext,
) {
    // Named operations must be unique; anonymous ones stay out of it.
    let mut seen: HashSet<&str> = HashSet::default();
    for operation in document.operations() {
        if let Some(name) = &operation.name {
            if !seen.insert(name.as_str()) {
                errors.push(GqlError::NameNotUnique(name.clone()));
            }
        }
    }

    // An anonymous operation must be the only operation in the document.
    let anonymous = document
        .operations()
        .iter()
        .filter(|operation| operation.name.is_none())
        .count();
    if anonymous > 0 && document.operations().len() > 1 {
        errors.push(GqlError::AnonymousQueryNotAlone);
    }

    for operation in document.operations() {
        validate_operation(errors, schema, document, operation);
    }

    for operation in document.operations() {
        if operation.operation_type == OperationType::Subscription {
            validate_subscription_root(errors, document, operation);
        }
    }
}

fn validate_operation(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    document: &DocumentContext,
    operation: &OperationDefinition,
) {
    let variables = VariableContext::Operation(&operation.variables);

    super::directive::validate_directives(
        errors,
        schema,
        &operation.directives,
        operation.operation_type.into(),
        variables,
    );
    super::variable::validate_variable_definitions(errors, schema, operation);
    super::variable::validate_variable_usage(errors, document, operation);

    match schema.root_operation(operation.operation_type) {
        None => errors.push(GqlError::MissingDefinition(Name::new_static_unchecked(
            operation.operation_type.default_type_name(),
        ))),
        Some(root) => {
            super::selection::validate_selection_set(
                errors,
                schema,
                document,
                &root.name,
                &operation.selection_set,
                variables,
            );
        }
    }
}

/// A subscription must resolve to exactly one root field, counted through a
/// single level of inline fragment or fragment spread.
//
// TODO: also reject introspection fields (`__typename` and friends) at the
// subscription root; they never produce an event stream.
fn validate_subscription_root(
    errors: &mut DiagnosticList,
    document: &DocumentContext,
    operation: &OperationDefinition,
) {
    let multiple = match operation.selection_set.as_slice() {
        [Selection::Field(_)] => false,
        [Selection::InlineFragment(inline)] => inline.selection_set.len() != 1,
        [Selection::FragmentSpread(spread)] => match document.fragment(&spread.fragment_name) {
            // An unresolved spread is reported by the selection walk; the
            // root shape cannot be judged without it.
            None => false,
            Some(fragment) => fragment.selection_set.len() != 1,
        },
        _ => true,
    };
    if multiple {
        errors.push(GqlError::SubscriptionHasMultipleRoots(
            operation.name.clone(),
        ));
    }
}
