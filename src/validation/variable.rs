use crate::ast::DirectiveLocation;
use crate::ast::OperationDefinition;
use crate::collections::HashSet;
use crate::document::DocumentContext;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;

/// Check an operation's variable definitions in isolation: unique names,
/// input types, legal directives, and well-typed default values.
pub(crate) fn validate_variable_definitions(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    operation: &OperationDefinition,
) {
    let mut seen: HashSet<&str> = HashSet::default();
    for variable in &operation.variables {
        if !seen.insert(variable.name.as_str()) {
            errors.push(GqlError::NameNotUnique(variable.name.clone()));
        }

        // Variable definition directives cannot read other variables, so
        // their arguments are checked under the default-value rules.
        super::directive::validate_directives(
            errors,
            schema,
            &variable.directives,
            DirectiveLocation::VariableDefinition,
            VariableContext::DefaultValue,
        );

        let named = variable.ty.inner_named_type();
        if schema.type_def(named).is_none() {
            errors.push(GqlError::MissingTypeDefinition(named.clone()));
        } else if !schema.is_input_type(&variable.ty) {
            errors.push(GqlError::InvalidType((*variable.ty).clone()));
        }

        if let Some(default) = &variable.default_value {
            super::value::validate_value(
                errors,
                schema,
                default,
                &variable.ty,
                VariableContext::DefaultValue,
            );
        }
    }
}

/// Check the correspondence between the variables an operation declares and
/// the variables its selection tree — including transitively spread
/// fragments — actually uses.
pub(crate) fn validate_variable_usage(
    errors: &mut DiagnosticList,
    document: &DocumentContext,
    operation: &OperationDefinition,
) {
    let required = document.variable_requirements(operation);

    for name in &required {
        if operation.variable_definition(name).is_none() {
            errors.push(GqlError::MissingVariable(name.clone()));
        }
    }

    for variable in &operation.variables {
        if !required.contains(variable.name.as_str()) {
            errors.push(GqlError::UnusedDefinition(variable.name.clone()));
        }
    }
}
