use crate::ast::Type;
use crate::ast::Value;
use crate::name::NamedType;
use crate::Name;
use thiserror::Error;

/// A rule violation found in an executable document.
///
/// Each variant carries the offending name(s) and enough context to act on
/// the message. Errors carry no source locations; embedders that keep
/// position information around can enrich them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GqlError {
    /// An operation, fragment, variable, argument, or non-repeatable
    /// directive name appears more than once where it must be unique.
    #[error("`{0}` is defined multiple times in the document")]
    NameNotUnique(Name),

    /// An anonymous operation shares the document with other operations.
    #[error("an anonymous operation must be the only operation in the document")]
    AnonymousQueryNotAlone,

    /// A subscription selects more than one root field.
    #[error("subscription `{}` must select exactly one root field", display_operation(.0))]
    SubscriptionHasMultipleRoots(Option<Name>),

    /// A referenced fragment, directive, argument, input field, or root
    /// operation type has no definition.
    #[error("cannot find a definition for `{0}` in this document")]
    MissingDefinition(Name),

    /// A selected field does not exist on the enclosing type.
    #[error("cannot query field `{field}` on type `{parent}`")]
    MissingField { field: Name, parent: NamedType },

    /// A composite-typed field is selected without subfields.
    #[error("field `{field}` on type `{parent}` requires a selection of subfields")]
    MissingSelection { field: Name, parent: NamedType },

    /// A leaf-typed field is selected with subfields.
    #[error("field `{field}` on type `{parent}` must not have a selection of subfields")]
    InvalidSelection { field: Name, parent: NamedType },

    /// A type referenced by the document is not declared in the schema.
    #[error("cannot find type `{0}` in the schema")]
    MissingTypeDefinition(NamedType),

    /// A named type is used in a position its kind does not permit, such as
    /// a scalar as a fragment type condition.
    #[error("type `{0}` cannot be used here; an object, interface, or union type is required")]
    InvalidNamedType(Name),

    /// A fragment's type condition can never apply to the type it is spread
    /// into.
    #[error("fragment on type `{0}` can never be spread here")]
    InvalidFragment(Name),

    /// Fragment definitions spread each other in a cycle.
    #[error("fragment definitions form a cycle: {}", display_cycles(.0))]
    CyclesDetected(Vec<Vec<Name>>),

    /// A type expression is illegal in its position, such as an object type
    /// declared for a variable.
    #[error("type `{0}` cannot be used here; an input type is required")]
    InvalidType(Type),

    /// A value references a variable the enclosing operation does not
    /// define.
    #[error("variable `${0}` is not defined")]
    MissingVariableDefinition(Name),

    /// An operation uses a variable, possibly through fragment spreads,
    /// without declaring it.
    #[error("variable `${0}` is used by the operation but never declared")]
    MissingVariable(Name),

    /// A fragment or variable is declared but never used.
    #[error("`{0}` is defined but never used")]
    UnusedDefinition(Name),

    /// A literal value does not satisfy the type expected at its position.
    #[error("expected a value of type `{expected}`, found {}", .value.kind())]
    TypeMismatch { value: Value, expected: Type },

    /// A directive or variable reference appears somewhere it is not
    /// allowed.
    #[error("`{name}` cannot be used in this position{}", display_hint(.hint))]
    InvalidLocation { name: Name, hint: Option<String> },

    /// An operation definition is malformed in a way no more specific kind
    /// covers.
    #[error("malformed operation definition{}", display_hint(.hint))]
    OperationDefinitionError { hint: Option<String> },
}

fn display_operation(name: &Option<Name>) -> &str {
    match name {
        Some(name) => name.as_str(),
        None => "<anonymous>",
    }
}

fn display_hint(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(": {hint}"),
        None => String::new(),
    }
}

fn display_cycles(cycles: &[Vec<Name>]) -> String {
    let rendered: Vec<String> = cycles
        .iter()
        .map(|cycle| {
            let names: Vec<&str> = cycle.iter().map(Name::as_str).collect();
            names.join(" -> ")
        })
        .collect();
    rendered.join(", ")
}
