use crate::ast::Argument;
use crate::ast::InputValueDefinition;
use crate::ast::Value;
use crate::collections::HashSet;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;
use crate::Node;

/// Check a field or directive call against its declared arguments:
/// no duplicate or unknown names, every required argument supplied, every
/// supplied value well-typed.
pub(crate) fn validate_arguments(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    arguments: &[Node<Argument>],
    declarations: &[Node<InputValueDefinition>],
    variables: VariableContext<'_>,
) {
    let mut seen: HashSet<&str> = HashSet::default();
    for argument in arguments {
        if !seen.insert(argument.name.as_str()) {
            errors.push(GqlError::NameNotUnique(argument.name.clone()));
        }
        match declarations.iter().find(|decl| decl.name == argument.name) {
            None => errors.push(GqlError::MissingDefinition(argument.name.clone())),
            Some(declaration) => {
                super::value::validate_value(
                    errors,
                    schema,
                    &argument.value,
                    &declaration.ty,
                    variables,
                );
            }
        }
    }

    for declaration in declarations {
        let supplied = arguments.iter().any(|arg| arg.name == declaration.name);
        // An argument left out coerces like an explicit null.
        if !supplied && declaration.ty.is_non_null() && declaration.default_value.is_none() {
            errors.push(GqlError::TypeMismatch {
                value: Value::Null,
                expected: (*declaration.ty).clone(),
            });
        }
    }
}
