//! A read-only index over a type-system document.

use crate::ast;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationType;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Type;
use crate::ast::UnionTypeDefinition;
use crate::collections::HashSet;
use crate::collections::IndexMap;
use crate::Name;
use crate::Node;
use std::collections::VecDeque;

/// Scalar types every schema provides whether or not it spells them out.
pub const BUILT_IN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// The definition of a named type, whichever of the six kinds it is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeDef {
    Scalar(Node<ScalarTypeDefinition>),
    Object(Node<ObjectTypeDefinition>),
    Interface(Node<InterfaceTypeDefinition>),
    Union(Node<UnionTypeDefinition>),
    Enum(Node<EnumTypeDefinition>),
    InputObject(Node<InputObjectTypeDefinition>),
}

/// An index over a [`TypeSystemDocument`][ast::TypeSystemDocument], built
/// once and then queried by every validation pass.
///
/// Immutable after construction: a single `SchemaContext` may be shared
/// freely between threads validating different documents.
#[derive(Clone, Debug)]
pub struct SchemaContext {
    schema_definition: Option<Node<SchemaDefinition>>,
    types: IndexMap<Name, TypeDef>,
    directive_definitions: IndexMap<Name, Node<DirectiveDefinition>>,
}

impl SchemaContext {
    /// Index a type-system document.
    ///
    /// The first definition of a name wins; later duplicates are kept out of
    /// the index so that lookups stay deterministic. The built-in scalars
    /// are synthesized if the document does not define them itself.
    pub fn new(document: &ast::TypeSystemDocument) -> Self {
        let mut schema_definition = None;
        let mut types = IndexMap::default();
        let mut directive_definitions = IndexMap::default();

        for definition in &document.definitions {
            match definition {
                ast::TypeSystemDefinition::Schema(def) => {
                    schema_definition.get_or_insert_with(|| def.clone());
                }
                ast::TypeSystemDefinition::Directive(def) => {
                    directive_definitions
                        .entry(def.name.clone())
                        .or_insert_with(|| def.clone());
                }
                ast::TypeSystemDefinition::Scalar(def) => {
                    insert_type(&mut types, &def.name, TypeDef::Scalar(def.clone()));
                }
                ast::TypeSystemDefinition::Object(def) => {
                    insert_type(&mut types, &def.name, TypeDef::Object(def.clone()));
                }
                ast::TypeSystemDefinition::Interface(def) => {
                    insert_type(&mut types, &def.name, TypeDef::Interface(def.clone()));
                }
                ast::TypeSystemDefinition::Union(def) => {
                    insert_type(&mut types, &def.name, TypeDef::Union(def.clone()));
                }
                ast::TypeSystemDefinition::Enum(def) => {
                    insert_type(&mut types, &def.name, TypeDef::Enum(def.clone()));
                }
                ast::TypeSystemDefinition::InputObject(def) => {
                    insert_type(&mut types, &def.name, TypeDef::InputObject(def.clone()));
                }
            }
        }

        for scalar in BUILT_IN_SCALARS {
            let name = Name::new_static_unchecked(scalar);
            types.entry(name.clone()).or_insert_with(|| {
                TypeDef::Scalar(Node::new(ScalarTypeDefinition {
                    name,
                    directives: Default::default(),
                }))
            });
        }

        Self {
            schema_definition,
            types,
            directive_definitions,
        }
    }

    /// The document's `schema { … }` definition, if it had one.
    pub fn schema_definition(&self) -> Option<&Node<SchemaDefinition>> {
        self.schema_definition.as_ref()
    }

    /// All type definitions, built-ins included, in declaration order.
    pub fn types(&self) -> &IndexMap<Name, TypeDef> {
        &self.types
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn directive_definition(&self, name: &str) -> Option<&Node<DirectiveDefinition>> {
        self.directive_definitions.get(name)
    }

    pub fn get_scalar(&self, name: &str) -> Option<&Node<ScalarTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::Scalar(def) => Some(def),
            _ => None,
        }
    }

    pub fn get_object(&self, name: &str) -> Option<&Node<ObjectTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::Object(def) => Some(def),
            _ => None,
        }
    }

    pub fn get_interface(&self, name: &str) -> Option<&Node<InterfaceTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::Interface(def) => Some(def),
            _ => None,
        }
    }

    pub fn get_union(&self, name: &str) -> Option<&Node<UnionTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::Union(def) => Some(def),
            _ => None,
        }
    }

    pub fn get_enum(&self, name: &str) -> Option<&Node<EnumTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::Enum(def) => Some(def),
            _ => None,
        }
    }

    pub fn get_input_object(&self, name: &str) -> Option<&Node<InputObjectTypeDefinition>> {
        match self.types.get(name)? {
            TypeDef::InputObject(def) => Some(def),
            _ => None,
        }
    }

    /// The object type serving as the root for operations of the given type.
    ///
    /// Consults the `schema` definition when one exists; otherwise falls
    /// back to the conventional `Query` / `Mutation` / `Subscription` type
    /// names.
    pub fn root_operation(&self, operation_type: OperationType) -> Option<&Node<ObjectTypeDefinition>> {
        let name = match &self.schema_definition {
            Some(def) => def
                .root_operations
                .iter()
                .find(|root| root.0 == operation_type)
                .map(|root| root.1.as_str())?,
            None => operation_type.default_type_name(),
        };
        self.get_object(name)
    }

    /// The definition of `field` on the named type, searching breadth-first
    /// through the type's own fields, then the interfaces it declares, then
    /// (for unions) its member types. The first hit in declaration order
    /// wins.
    pub fn field_definition(&self, parent: &str, field: &str) -> Option<&Node<FieldDefinition>> {
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut seen: HashSet<&str> = HashSet::default();
        queue.push_back(parent);
        while let Some(name) = queue.pop_front() {
            if !seen.insert(name) {
                continue;
            }
            match self.types.get(name) {
                Some(TypeDef::Object(def)) => {
                    if let Some(found) = def.fields.iter().find(|f| f.name == *field) {
                        return Some(found);
                    }
                    queue.extend(def.implements_interfaces.iter().map(Name::as_str));
                }
                Some(TypeDef::Interface(def)) => {
                    if let Some(found) = def.fields.iter().find(|f| f.name == *field) {
                        return Some(found);
                    }
                    queue.extend(def.implements_interfaces.iter().map(Name::as_str));
                }
                Some(TypeDef::Union(def)) => {
                    queue.extend(def.members.iter().map(Name::as_str));
                }
                // Scalars, enums, input objects, and unknown names have no
                // fields to offer.
                _ => {}
            }
        }
        None
    }

    /// Whether the named type is a leaf (scalar or enum), which selects no
    /// subfields.
    pub fn is_leaf(&self, name: &str) -> bool {
        matches!(
            self.types.get(name),
            Some(TypeDef::Scalar(_) | TypeDef::Enum(_))
        )
    }

    /// Whether a type is legal in argument and variable positions.
    pub fn is_input_type(&self, ty: &Type) -> bool {
        match self.types.get(ty.inner_named_type().as_str()) {
            Some(TypeDef::Scalar(_) | TypeDef::Enum(_) | TypeDef::InputObject(_)) => true,
            Some(_) => false,
            None => self.is_built_in_leaf(ty.inner_named_type()),
        }
    }

    /// Whether a type is legal as a field result type.
    pub fn is_output_type(&self, ty: &Type) -> bool {
        match self.types.get(ty.inner_named_type().as_str()) {
            Some(
                TypeDef::Scalar(_)
                | TypeDef::Object(_)
                | TypeDef::Interface(_)
                | TypeDef::Union(_)
                | TypeDef::Enum(_),
            ) => true,
            Some(TypeDef::InputObject(_)) => false,
            None => self.is_built_in_leaf(ty.inner_named_type()),
        }
    }

    fn is_built_in_leaf(&self, name: &str) -> bool {
        BUILT_IN_SCALARS.contains(&name)
    }

    /// The covariance relation between named types: values of `sub` are
    /// acceptable wherever `sup` is expected.
    ///
    /// Holds when the two are the same type, when `sub` is an object or
    /// interface implementing the interface `sup` (directly or
    /// transitively), or when `sub` is an object listed by the union `sup`.
    pub fn is_subtype(&self, sub: &str, sup: &str) -> bool {
        if sub == sup {
            return true;
        }
        match (self.types.get(sub), self.types.get(sup)) {
            (Some(TypeDef::Object(def)), Some(TypeDef::Interface(_))) => {
                self.implements_transitively(&def.implements_interfaces, sup)
            }
            (Some(TypeDef::Interface(def)), Some(TypeDef::Interface(_))) => {
                self.implements_transitively(&def.implements_interfaces, sup)
            }
            (Some(TypeDef::Object(_)), Some(TypeDef::Union(def))) => {
                def.members.iter().any(|member| member.as_str() == sub)
            }
            _ => false,
        }
    }

    fn implements_transitively(&self, declared: &[Name], target: &str) -> bool {
        let mut stack: Vec<&str> = declared.iter().map(Name::as_str).collect();
        let mut seen: HashSet<&str> = HashSet::default();
        while let Some(name) = stack.pop() {
            if name == target {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(TypeDef::Interface(def)) = self.types.get(name) {
                stack.extend(def.implements_interfaces.iter().map(Name::as_str));
            }
        }
        false
    }
}

fn insert_type(types: &mut IndexMap<Name, TypeDef>, name: &Name, def: TypeDef) {
    types.entry(name.clone()).or_insert(def);
}

impl TypeDef {
    pub fn name(&self) -> &Name {
        match self {
            TypeDef::Scalar(def) => &def.name,
            TypeDef::Object(def) => &def.name,
            TypeDef::Interface(def) => &def.name,
            TypeDef::Union(def) => &def.name,
            TypeDef::Enum(def) => &def.name,
            TypeDef::InputObject(def) => &def.name,
        }
    }

    /// Scalar or enum: selects no subfields.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TypeDef::Scalar(_) | TypeDef::Enum(_))
    }

    /// Object, interface, or union: selections and fragment conditions may
    /// target it.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TypeDef::Object(_) | TypeDef::Interface(_) | TypeDef::Union(_)
        )
    }

    /// What to call this kind of definition in a diagnostic.
    pub fn describe(&self) -> &'static str {
        match self {
            TypeDef::Scalar(_) => "a scalar type",
            TypeDef::Object(_) => "an object type",
            TypeDef::Interface(_) => "an interface type",
            TypeDef::Union(_) => "a union type",
            TypeDef::Enum(_) => "an enum type",
            TypeDef::InputObject(_) => "an input object type",
        }
    }
}
