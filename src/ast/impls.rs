use super::*;
use crate::schema::SchemaContext;
use crate::validation::DiagnosticList;
use std::fmt;

impl TypeSystemDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate this document against a schema.
    ///
    /// Returns the document unchanged when it conforms, or the accumulated
    /// diagnostics for every rule it breaks. See [`validate`][crate::validate].
    pub fn validate(self, schema: &SchemaContext) -> Result<Self, DiagnosticList> {
        crate::validate(self, schema)
    }
}

impl OperationDefinition {
    /// The definition for a variable of the given name, if this operation
    /// declares one.
    pub fn variable_definition(&self, name: &str) -> Option<&Node<VariableDefinition>> {
        self.variables.iter().find(|def| def.name == *name)
    }
}

impl Type {
    /// The name at the core of this type, with any `NonNull`/`List`
    /// wrappers stripped.
    pub fn inner_named_type(&self) -> &NamedType {
        let mut ty = self;
        loop {
            match ty {
                Type::Named(name) => return name,
                Type::NonNull(inner) | Type::List(inner) => ty = inner,
            }
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    pub fn non_null(self) -> Type {
        Type::NonNull(Box::new(self))
    }

    pub fn list(self) -> Type {
        Type::List(Box::new(self))
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A short English description of the kind of literal, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Enum(_) => "an enum value",
            Value::Variable(_) => "a variable",
            Value::String(_) => "a string",
            Value::Float(_) => "a float",
            Value::Int(_) => "an integer",
            Value::Boolean(_) => "a boolean",
            Value::List(_) => "a list",
            Value::Object(_) => "an input object",
        }
    }
}

impl OperationType {
    /// The keyword that introduces an operation of this type.
    pub fn name(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// The object type name used for this operation's root when the schema
    /// has no explicit `schema` definition.
    pub fn default_type_name(self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        }
    }
}

impl From<OperationType> for DirectiveLocation {
    fn from(operation_type: OperationType) -> Self {
        match operation_type {
            OperationType::Query => DirectiveLocation::Query,
            OperationType::Mutation => DirectiveLocation::Mutation,
            OperationType::Subscription => DirectiveLocation::Subscription,
        }
    }
}

impl DirectiveLocation {
    /// The location's name as it appears in a directive definition.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl DirectiveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<Directive>> {
        self.0.iter()
    }

    /// The first directive with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Node<Directive>> {
        self.0.iter().find(|directive| directive.name == *name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for DirectiveList {
    type Target = [Node<Directive>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DirectiveList {
    type Item = &'a Node<Directive>;
    type IntoIter = std::slice::Iter<'a, Node<Directive>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Node<Directive>> for DirectiveList {
    fn from_iter<T: IntoIterator<Item = Node<Directive>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for DirectiveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => name.fmt(f),
            Type::NonNull(inner) => write!(f, "{inner}!"),
            Type::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Enum(name) => name.fmt(f),
            Value::Variable(name) => write!(f, "${name}"),
            Value::String(value) => write!(f, "\"{}\"", value.escape_default()),
            Value::Float(value) => value.fmt(f),
            Value::Int(value) => value.fmt(f),
            Value::Boolean(value) => value.fmt(f),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
