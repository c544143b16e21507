use crate::ast::DirectiveList;
use crate::ast::DirectiveLocation;
use crate::collections::HashSet;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use crate::validation::GqlError;
use crate::validation::VariableContext;

/// Check every directive in a list against the schema: the directive must
/// be defined, must list `location` among its legal locations, must not
/// repeat unless declared `repeatable`, and its arguments must satisfy the
/// definition.
pub(crate) fn validate_directives(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    directives: &DirectiveList,
    location: DirectiveLocation,
    variables: VariableContext<'_>,
) {
    let mut seen: HashSet<&str> = HashSet::default();
    for directive in directives {
        let repeated = !seen.insert(directive.name.as_str());
        match schema.directive_definition(&directive.name) {
            None => errors.push(GqlError::MissingDefinition(directive.name.clone())),
            Some(definition) => {
                if repeated && !definition.repeatable {
                    errors.push(GqlError::NameNotUnique(directive.name.clone()));
                }
                if !definition.locations.contains(&location) {
                    let allowed: Vec<&str> = definition
                        .locations
                        .iter()
                        .map(|location| location.name())
                        .collect();
                    errors.push(GqlError::InvalidLocation {
                        name: directive.name.clone(),
                        hint: Some(format!(
                            "`@{}` may be used on: {}",
                            directive.name,
                            allowed.join(" | ")
                        )),
                    });
                }
                super::argument::validate_arguments(
                    errors,
                    schema,
                    &directive.arguments,
                    &definition.arguments,
                    variables,
                );
            }
        }
    }
}
