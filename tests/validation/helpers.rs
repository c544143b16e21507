//! Shared builders for the test documents.
//!
//! The crate consumes ASTs rather than source text, so the tests assemble
//! their documents programmatically. The schema is the dog-and-pet schema
//! the GraphQL specification uses for its own validation examples, plus a
//! subscription root and a couple of directives.

use graphql_validator::ast::*;
use graphql_validator::{name, DiagnosticList, GqlError, Name, Node, SchemaContext};

pub fn n(value: &str) -> Name {
    Name::new(value).unwrap()
}

pub fn named(value: &str) -> Type {
    Type::Named(n(value))
}

// ---------------------------------------------------------------------------
// Schema building

pub fn field_def(name: &str, ty: Type) -> Node<FieldDefinition> {
    field_def_with_args(name, Vec::new(), ty)
}

pub fn field_def_with_args(
    name: &str,
    arguments: Vec<Node<InputValueDefinition>>,
    ty: Type,
) -> Node<FieldDefinition> {
    Node::new(FieldDefinition {
        name: n(name),
        arguments,
        ty,
        directives: DirectiveList::new(),
    })
}

pub fn input_value(name: &str, ty: Type) -> Node<InputValueDefinition> {
    Node::new(InputValueDefinition {
        name: n(name),
        ty: Node::new(ty),
        default_value: None,
        directives: DirectiveList::new(),
    })
}

pub fn input_value_with_default(name: &str, ty: Type, default: Value) -> Node<InputValueDefinition> {
    Node::new(InputValueDefinition {
        name: n(name),
        ty: Node::new(ty),
        default_value: Some(Node::new(default)),
        directives: DirectiveList::new(),
    })
}

pub fn object(
    name: &str,
    interfaces: &[&str],
    fields: Vec<Node<FieldDefinition>>,
) -> TypeSystemDefinition {
    TypeSystemDefinition::Object(Node::new(ObjectTypeDefinition {
        name: n(name),
        implements_interfaces: interfaces.iter().map(|i| n(i)).collect(),
        directives: DirectiveList::new(),
        fields,
    }))
}

pub fn interface(
    name: &str,
    interfaces: &[&str],
    fields: Vec<Node<FieldDefinition>>,
) -> TypeSystemDefinition {
    TypeSystemDefinition::Interface(Node::new(InterfaceTypeDefinition {
        name: n(name),
        implements_interfaces: interfaces.iter().map(|i| n(i)).collect(),
        directives: DirectiveList::new(),
        fields,
    }))
}

pub fn union_type(name: &str, members: &[&str]) -> TypeSystemDefinition {
    TypeSystemDefinition::Union(Node::new(UnionTypeDefinition {
        name: n(name),
        directives: DirectiveList::new(),
        members: members.iter().map(|m| n(m)).collect(),
    }))
}

pub fn enum_type(name: &str, values: &[&str]) -> TypeSystemDefinition {
    TypeSystemDefinition::Enum(Node::new(EnumTypeDefinition {
        name: n(name),
        directives: DirectiveList::new(),
        values: values
            .iter()
            .map(|value| {
                Node::new(EnumValueDefinition {
                    value: n(value),
                    directives: DirectiveList::new(),
                })
            })
            .collect(),
    }))
}

pub fn input_object(name: &str, fields: Vec<Node<InputValueDefinition>>) -> TypeSystemDefinition {
    TypeSystemDefinition::InputObject(Node::new(InputObjectTypeDefinition {
        name: n(name),
        directives: DirectiveList::new(),
        fields,
    }))
}

pub fn directive_def(
    name: &str,
    arguments: Vec<Node<InputValueDefinition>>,
    repeatable: bool,
    locations: Vec<DirectiveLocation>,
) -> TypeSystemDefinition {
    TypeSystemDefinition::Directive(Node::new(DirectiveDefinition {
        name: n(name),
        arguments,
        repeatable,
        locations,
    }))
}

/// The canonical dog-and-pet schema:
///
/// ```graphql
/// type Query {
///   dog(id: ID): Dog
///   findDog(searchBy: FindDogInput): Dog
///   booleanList(booleanListArg: [Boolean!]): Boolean
///   human: Human
///   catOrDog: CatOrDog
/// }
/// type Subscription {
///   newMessage: Message
///   other: String
/// }
/// type Message { body: String  sender: String }
/// enum DogCommand { SIT DOWN HEEL }
/// enum CatCommand { JUMP }
/// interface Sentient { name: String! }
/// interface Pet { name: String! }
/// type Dog implements Pet {
///   name: String!
///   nickname: String
///   barkVolume: Int
///   doesKnowCommand(dogCommand: DogCommand!): Boolean!
///   isHouseTrained(atOtherHomes: Boolean): Boolean!
///   owner: Human
/// }
/// type Cat implements Pet {
///   name: String!
///   nickname: String
///   doesKnowCommand(catCommand: CatCommand!): Boolean!
///   meowVolume: Int
/// }
/// union CatOrDog = Cat | Dog
/// union DogOrHuman = Dog | Human
/// union HumanOrAlien = Human | Alien
/// type Human implements Sentient { name: String!  pets: [Pet] }
/// type Alien implements Sentient { name: String!  homePlanet: String }
/// input FindDogInput { name: String  owner: String }
/// scalar CustomData
/// directive @priority(level: Int!) on FIELD
/// directive @tag(name: String) repeatable on FIELD | FRAGMENT_DEFINITION | QUERY
/// ```
pub fn pet_schema() -> SchemaContext {
    let document = TypeSystemDocument {
        definitions: vec![
            object(
                "Query",
                &[],
                vec![
                    field_def_with_args("dog", vec![input_value("id", named("ID"))], named("Dog")),
                    field_def_with_args(
                        "findDog",
                        vec![input_value("searchBy", named("FindDogInput"))],
                        named("Dog"),
                    ),
                    field_def_with_args(
                        "booleanList",
                        vec![input_value(
                            "booleanListArg",
                            named("Boolean").non_null().list(),
                        )],
                        named("Boolean"),
                    ),
                    field_def("human", named("Human")),
                    field_def("catOrDog", named("CatOrDog")),
                ],
            ),
            object(
                "Subscription",
                &[],
                vec![
                    field_def("newMessage", named("Message")),
                    field_def("other", named("String")),
                ],
            ),
            object(
                "Message",
                &[],
                vec![
                    field_def("body", named("String")),
                    field_def("sender", named("String")),
                ],
            ),
            enum_type("DogCommand", &["SIT", "DOWN", "HEEL"]),
            enum_type("CatCommand", &["JUMP"]),
            interface("Sentient", &[], vec![field_def("name", named("String").non_null())]),
            interface("Pet", &[], vec![field_def("name", named("String").non_null())]),
            object(
                "Dog",
                &["Pet"],
                vec![
                    field_def("name", named("String").non_null()),
                    field_def("nickname", named("String")),
                    field_def("barkVolume", named("Int")),
                    field_def_with_args(
                        "doesKnowCommand",
                        vec![input_value("dogCommand", named("DogCommand").non_null())],
                        named("Boolean").non_null(),
                    ),
                    field_def_with_args(
                        "isHouseTrained",
                        vec![input_value("atOtherHomes", named("Boolean"))],
                        named("Boolean").non_null(),
                    ),
                    field_def("owner", named("Human")),
                ],
            ),
            object(
                "Cat",
                &["Pet"],
                vec![
                    field_def("name", named("String").non_null()),
                    field_def("nickname", named("String")),
                    field_def_with_args(
                        "doesKnowCommand",
                        vec![input_value("catCommand", named("CatCommand").non_null())],
                        named("Boolean").non_null(),
                    ),
                    field_def("meowVolume", named("Int")),
                ],
            ),
            union_type("CatOrDog", &["Cat", "Dog"]),
            union_type("DogOrHuman", &["Dog", "Human"]),
            union_type("HumanOrAlien", &["Human", "Alien"]),
            object(
                "Human",
                &["Sentient"],
                vec![
                    field_def("name", named("String").non_null()),
                    field_def("pets", named("Pet").list()),
                ],
            ),
            object(
                "Alien",
                &["Sentient"],
                vec![
                    field_def("name", named("String").non_null()),
                    field_def("homePlanet", named("String")),
                ],
            ),
            input_object(
                "FindDogInput",
                vec![
                    input_value("name", named("String")),
                    input_value("owner", named("String")),
                ],
            ),
            TypeSystemDefinition::Scalar(Node::new(ScalarTypeDefinition {
                name: name!("CustomData"),
                directives: DirectiveList::new(),
            })),
            directive_def(
                "priority",
                vec![input_value("level", named("Int").non_null())],
                false,
                vec![DirectiveLocation::Field],
            ),
            directive_def(
                "tag",
                vec![input_value("name", named("String"))],
                true,
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentDefinition,
                    DirectiveLocation::Query,
                ],
            ),
        ],
    };
    SchemaContext::new(&document)
}

// ---------------------------------------------------------------------------
// Executable document building

pub fn leaf(name: &str) -> Selection {
    field(name, Vec::new())
}

pub fn field(name: &str, selection_set: Vec<Selection>) -> Selection {
    Selection::Field(Node::new(Field {
        alias: None,
        name: n(name),
        arguments: Vec::new(),
        directives: DirectiveList::new(),
        selection_set,
    }))
}

pub fn field_with_args(
    name: &str,
    arguments: Vec<(&str, Value)>,
    selection_set: Vec<Selection>,
) -> Selection {
    Selection::Field(Node::new(Field {
        alias: None,
        name: n(name),
        arguments: arguments
            .into_iter()
            .map(|(name, value)| {
                Node::new(Argument {
                    name: n(name),
                    value: Node::new(value),
                })
            })
            .collect(),
        directives: DirectiveList::new(),
        selection_set,
    }))
}

pub fn field_with_directives(
    name: &str,
    directives: Vec<Node<Directive>>,
    selection_set: Vec<Selection>,
) -> Selection {
    Selection::Field(Node::new(Field {
        alias: None,
        name: n(name),
        arguments: Vec::new(),
        directives: DirectiveList(directives),
        selection_set,
    }))
}

pub fn directive(name: &str, arguments: Vec<(&str, Value)>) -> Node<Directive> {
    Node::new(Directive {
        name: n(name),
        arguments: arguments
            .into_iter()
            .map(|(name, value)| {
                Node::new(Argument {
                    name: n(name),
                    value: Node::new(value),
                })
            })
            .collect(),
    })
}

pub fn spread(name: &str) -> Selection {
    Selection::FragmentSpread(Node::new(FragmentSpread {
        fragment_name: n(name),
        directives: DirectiveList::new(),
    }))
}

pub fn inline(on: Option<&str>, selection_set: Vec<Selection>) -> Selection {
    Selection::InlineFragment(Node::new(InlineFragment {
        type_condition: on.map(n),
        directives: DirectiveList::new(),
        selection_set,
    }))
}

pub fn var_def(name: &str, ty: Type) -> Node<VariableDefinition> {
    Node::new(VariableDefinition {
        name: n(name),
        ty: Node::new(ty),
        default_value: None,
        directives: DirectiveList::new(),
    })
}

pub fn var_def_with_default(name: &str, ty: Type, default: Value) -> Node<VariableDefinition> {
    Node::new(VariableDefinition {
        name: n(name),
        ty: Node::new(ty),
        default_value: Some(Node::new(default)),
        directives: DirectiveList::new(),
    })
}

pub fn operation(
    operation_type: OperationType,
    name: Option<&str>,
    variables: Vec<Node<VariableDefinition>>,
    selection_set: Vec<Selection>,
) -> ExecutableDefinition {
    ExecutableDefinition::Operation(Node::new(OperationDefinition {
        operation_type,
        name: name.map(n),
        variables,
        directives: DirectiveList::new(),
        selection_set,
    }))
}

pub fn query(name: Option<&str>, selection_set: Vec<Selection>) -> ExecutableDefinition {
    operation(OperationType::Query, name, Vec::new(), selection_set)
}

pub fn fragment(name: &str, on: &str, selection_set: Vec<Selection>) -> ExecutableDefinition {
    ExecutableDefinition::Fragment(Node::new(FragmentDefinition {
        name: n(name),
        type_condition: n(on),
        directives: DirectiveList::new(),
        selection_set,
    }))
}

pub fn document(definitions: Vec<ExecutableDefinition>) -> ExecutableDocument {
    ExecutableDocument { definitions }
}

// ---------------------------------------------------------------------------
// Running the validator

pub fn validate(definitions: Vec<ExecutableDefinition>) -> Result<ExecutableDocument, DiagnosticList> {
    document(definitions).validate(&pet_schema())
}

/// Validate and return the diagnostics, which must be non-empty.
pub fn expect_errors(definitions: Vec<ExecutableDefinition>) -> Vec<GqlError> {
    match validate(definitions) {
        Ok(_) => panic!("expected validation to fail"),
        Err(diagnostics) => diagnostics.into_iter().collect(),
    }
}

/// A document around `{ dog { name } }` that uses the given fragment, so
/// fragment-focused tests do not trip the unused-fragment rule.
pub fn query_using(fragment_name: &str) -> ExecutableDefinition {
    query(Some("q"), vec![field("dog", vec![spread(fragment_name)])])
}
