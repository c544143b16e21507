use crate::ast::InputObjectTypeDefinition;
use crate::ast::Type;
use crate::ast::Value;
use crate::collections::HashSet;
use crate::schema::SchemaContext;
use crate::schema::TypeDef;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::Node;

/// Check that a literal value satisfies the type expected at its position.
///
/// Follows input coercion: a single value is accepted where a list is
/// expected, `Int` literals are accepted for `Float`, and `ID` accepts both
/// strings and integers. `Null` is valid anywhere the type is nullable.
pub(crate) fn validate_value(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    value: &Value,
    expected: &Type,
    variables: super::VariableContext<'_>,
) {
    if let Value::Variable(name) = value {
        match variables {
            super::VariableContext::Operation(definitions) => {
                match definitions.iter().find(|def| def.name == **name) {
                    None => errors.push(GqlError::MissingVariableDefinition(name.clone())),
                    Some(definition) => {
                        if *definition.ty != *expected {
                            errors.push(GqlError::TypeMismatch {
                                value: value.clone(),
                                expected: expected.clone(),
                            });
                        }
                    }
                }
            }
            super::VariableContext::Fragment => {}
            super::VariableContext::DefaultValue => {
                errors.push(GqlError::InvalidLocation {
                    name: name.clone(),
                    hint: Some("variables are not allowed in default values".to_owned()),
                });
            }
        }
        return;
    }

    match expected {
        Type::NonNull(inner) => {
            if value.is_null() {
                errors.push(GqlError::TypeMismatch {
                    value: value.clone(),
                    expected: expected.clone(),
                });
            } else {
                validate_value(errors, schema, value, inner, variables);
            }
        }
        Type::List(inner) => match value {
            Value::Null => {}
            Value::List(items) => {
                for item in items {
                    validate_value(errors, schema, item, inner, variables);
                }
            }
            // A single value coerces to a list of size one.
            _ => validate_value(errors, schema, value, inner, variables),
        },
        Type::Named(name) => {
            if value.is_null() {
                return;
            }
            let Some(definition) = schema.type_def(name) else {
                // The schema never declared this type; reported where the
                // type reference itself is checked.
                return;
            };
            match definition {
                TypeDef::Scalar(_) => {
                    let accepted = match name.as_str() {
                        "Int" => matches!(value, Value::Int(_)),
                        "Float" => matches!(value, Value::Int(_) | Value::Float(_)),
                        "String" => matches!(value, Value::String(_)),
                        "Boolean" => matches!(value, Value::Boolean(_)),
                        "ID" => matches!(value, Value::String(_) | Value::Int(_)),
                        // Custom scalars take any scalar literal.
                        _ => matches!(
                            value,
                            Value::Int(_)
                                | Value::Float(_)
                                | Value::String(_)
                                | Value::Boolean(_)
                        ),
                    };
                    if !accepted {
                        errors.push(GqlError::TypeMismatch {
                            value: value.clone(),
                            expected: expected.clone(),
                        });
                    }
                }
                TypeDef::Enum(definition) => {
                    let accepted = match value {
                        Value::Enum(chosen) => {
                            definition.values.iter().any(|declared| declared.value == *chosen)
                        }
                        _ => false,
                    };
                    if !accepted {
                        errors.push(GqlError::TypeMismatch {
                            value: value.clone(),
                            expected: expected.clone(),
                        });
                    }
                }
                TypeDef::InputObject(definition) => match value {
                    Value::Object(fields) => {
                        validate_input_object(errors, schema, fields, definition, variables);
                    }
                    _ => errors.push(GqlError::TypeMismatch {
                        value: value.clone(),
                        expected: expected.clone(),
                    }),
                },
                // Output-only kinds never accept a literal.
                TypeDef::Object(_) | TypeDef::Interface(_) | TypeDef::Union(_) => {
                    errors.push(GqlError::TypeMismatch {
                        value: value.clone(),
                        expected: expected.clone(),
                    });
                }
            }
        }
    }
}

/// The field rules for an input object literal mirror the argument rules:
/// no unknown names, no duplicate names, required fields present, each
/// value well-typed.
fn validate_input_object(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    fields: &[(crate::Name, Node<Value>)],
    definition: &InputObjectTypeDefinition,
    variables: super::VariableContext<'_>,
) {
    let mut seen: HashSet<&str> = HashSet::default();
    for (name, _) in fields {
        if !seen.insert(name.as_str()) {
            errors.push(GqlError::NameNotUnique(name.clone()));
        }
        if !definition.fields.iter().any(|field| field.name == *name) {
            errors.push(GqlError::MissingDefinition(name.clone()));
        }
    }

    for declared in &definition.fields {
        let supplied = fields.iter().find(|(name, _)| *name == declared.name);
        match supplied {
            Some((_, value)) => {
                validate_value(errors, schema, value, &declared.ty, variables);
            }
            None => {
                // An absent field coerces like an explicit null.
                if declared.ty.is_non_null() && declared.default_value.is_none() {
                    errors.push(GqlError::TypeMismatch {
                        value: Value::Null,
                        expected: (*declared.ty).clone(),
                    });
                }
            }
        }
    }
}
