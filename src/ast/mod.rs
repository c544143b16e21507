//! *Abstract syntax tree* for GraphQL documents.
//!
//! Two document types cover the two kinds of input this crate consumes: a
//! [`TypeSystemDocument`] describing the schema, and an
//! [`ExecutableDocument`] carrying the operations and fragments a client
//! submits. Both aim to faithfully represent documents that conform to the
//! GraphQL [syntactic grammar]; such documents may or may not be [valid].
//!
//! Nodes inside documents are wrapped in [`Node`], a reference-counted smart
//! pointer, so subtrees can be shared between documents without copying.
//!
//! [syntactic grammar]: https://spec.graphql.org/October2021/#sec-Language
//! [valid]: https://spec.graphql.org/October2021/#sec-Validation

use crate::Name;
use crate::Node;
use ordered_float::OrderedFloat;

mod impls;

pub use crate::name::NamedType;

/// The schema side of the input: type, directive, and schema definitions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeSystemDocument {
    pub definitions: Vec<TypeSystemDefinition>,
}

/// A query, mutation, or subscription payload: operations and the fragments
/// they spread.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExecutableDocument {
    pub definitions: Vec<ExecutableDefinition>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeSystemDefinition {
    Schema(Node<SchemaDefinition>),
    Directive(Node<DirectiveDefinition>),
    Scalar(Node<ScalarTypeDefinition>),
    Object(Node<ObjectTypeDefinition>),
    Interface(Node<InterfaceTypeDefinition>),
    Union(Node<UnionTypeDefinition>),
    Enum(Node<EnumTypeDefinition>),
    InputObject(Node<InputObjectTypeDefinition>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutableDefinition {
    Operation(Node<OperationDefinition>),
    Fragment(Node<FragmentDefinition>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    /// `None` for an anonymous operation.
    pub name: Option<Name>,
    pub variables: Vec<Node<VariableDefinition>>,
    pub directives: DirectiveList,
    pub selection_set: Vec<Selection>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: DirectiveList,
    pub selection_set: Vec<Selection>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SchemaDefinition {
    pub directives: DirectiveList,
    pub root_operations: Vec<Node<(OperationType, NamedType)>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScalarTypeDefinition {
    pub name: Name,
    pub directives: DirectiveList,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObjectTypeDefinition {
    pub name: Name,
    pub implements_interfaces: Vec<NamedType>,
    pub directives: DirectiveList,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InterfaceTypeDefinition {
    pub name: Name,
    pub implements_interfaces: Vec<NamedType>,
    pub directives: DirectiveList,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub directives: DirectiveList,
    pub members: Vec<NamedType>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub directives: DirectiveList,
    pub values: Vec<Node<EnumValueDefinition>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputObjectTypeDefinition {
    pub name: Name,
    pub directives: DirectiveList,
    pub fields: Vec<Node<InputValueDefinition>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub ty: Type,
    pub directives: DirectiveList,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputValueDefinition {
    pub name: Name,
    pub ty: Node<Type>,
    pub default_value: Option<Node<Value>>,
    pub directives: DirectiveList,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EnumValueDefinition {
    pub value: Name,
    pub directives: DirectiveList,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VariableDefinition {
    pub name: Name,
    pub ty: Node<Type>,
    pub default_value: Option<Node<Value>>,
    pub directives: DirectiveList,
}

/// A type reference as it appears in field, argument, and variable
/// positions.
///
/// The grammar forbids `NonNull` directly inside `NonNull`; this
/// representation nevertheless tolerates arbitrary nesting, as required of
/// consumers of parser output.
#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Type {
    Named(NamedType),
    NonNull(Box<Type>),
    List(Box<Type>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Null,
    Enum(Name),
    Variable(Name),
    String(String),
    Float(OrderedFloat<f64>),
    Int(i64),
    Boolean(bool),
    List(Vec<Node<Value>>),
    Object(Vec<(Name, Node<Value>)>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Argument {
    pub name: Name,
    pub value: Node<Value>,
}

#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct DirectiveList(pub Vec<Node<Directive>>);

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Selection {
    Field(Node<Field>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
    pub directives: DirectiveList,
    /// Possibly empty: leaf fields select nothing.
    pub selection_set: Vec<Selection>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: DirectiveList,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: DirectiveList,
    pub selection_set: Vec<Selection>,
}
