//! A read-only index over an executable document.

use crate::ast;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::collections::IndexMap;
use crate::collections::IndexSet;
use crate::Name;
use crate::Node;

/// An index over an [`ExecutableDocument`][ast::ExecutableDocument], built
/// once per document and consulted by every validation pass.
///
/// Collects the operation and fragment definitions, the spread-dependency
/// graph between fragments, and the variables each fragment mentions, so
/// that passes can answer reachability and usage questions without
/// re-walking the tree.
#[derive(Clone, Debug)]
pub struct DocumentContext {
    operations: Vec<Node<OperationDefinition>>,
    fragments: Vec<Node<FragmentDefinition>>,
    fragments_by_name: IndexMap<Name, Node<FragmentDefinition>>,
    fragment_dependencies: IndexMap<Name, IndexSet<Name>>,
    fragment_variables: IndexMap<Name, IndexSet<Name>>,
}

impl DocumentContext {
    pub fn new(document: &ast::ExecutableDocument) -> Self {
        let mut operations = Vec::new();
        let mut fragments: Vec<Node<FragmentDefinition>> = Vec::new();
        for definition in &document.definitions {
            match definition {
                ast::ExecutableDefinition::Operation(def) => operations.push(def.clone()),
                ast::ExecutableDefinition::Fragment(def) => fragments.push(def.clone()),
            }
        }

        let mut fragments_by_name = IndexMap::default();
        let mut fragment_dependencies = IndexMap::default();
        let mut fragment_variables = IndexMap::default();
        for fragment in &fragments {
            fragments_by_name
                .entry(fragment.name.clone())
                .or_insert_with(|| fragment.clone());
            // For a duplicated name the first definition also provides the
            // dependency and variable sets; uniqueness is reported
            // separately.
            fragment_dependencies
                .entry(fragment.name.clone())
                .or_insert_with(|| direct_spreads(&fragment.selection_set));
            fragment_variables
                .entry(fragment.name.clone())
                .or_insert_with(|| selection_variables(&fragment.selection_set));
        }

        Self {
            operations,
            fragments,
            fragments_by_name,
            fragment_dependencies,
            fragment_variables,
        }
    }

    /// Operation definitions in document order.
    pub fn operations(&self) -> &[Node<OperationDefinition>] {
        &self.operations
    }

    /// Fragment definitions in document order, duplicates included.
    pub fn fragments(&self) -> &[Node<FragmentDefinition>] {
        &self.fragments
    }

    /// The fragment definition with the given name. When the document
    /// defines the name more than once, the first definition wins.
    pub fn fragment(&self, name: &str) -> Option<&Node<FragmentDefinition>> {
        self.fragments_by_name.get(name)
    }

    /// For each fragment, the set of fragment names it spreads anywhere in
    /// its selection tree.
    pub fn fragment_dependencies(&self) -> &IndexMap<Name, IndexSet<Name>> {
        &self.fragment_dependencies
    }

    /// Every fragment name transitively reachable from any operation's
    /// selection set.
    pub fn reachable_fragments(&self) -> IndexSet<Name> {
        let mut reachable = IndexSet::default();
        let mut stack: Vec<Name> = Vec::new();
        for operation in &self.operations {
            stack.extend(direct_spreads(&operation.selection_set));
        }
        while let Some(name) = stack.pop() {
            if let Some(dependencies) = self.fragment_dependencies.get(&name) {
                if reachable.insert(name) {
                    stack.extend(dependencies.iter().cloned());
                }
            } else {
                // Spread of an undefined fragment; still counts as a use.
                reachable.insert(name);
            }
        }
        reachable
    }

    /// Every variable the operation references, directly or through the
    /// fragments it transitively spreads.
    pub fn variable_requirements(&self, operation: &OperationDefinition) -> IndexSet<Name> {
        let mut required = selection_variables(&operation.selection_set);
        let mut seen: IndexSet<Name> = IndexSet::default();
        let mut stack: Vec<Name> = direct_spreads(&operation.selection_set)
            .into_iter()
            .collect();
        while let Some(name) = stack.pop() {
            if !seen.insert(name.clone()) {
                continue;
            }
            if let Some(variables) = self.fragment_variables.get(&name) {
                required.extend(variables.iter().cloned());
            }
            if let Some(dependencies) = self.fragment_dependencies.get(&name) {
                stack.extend(dependencies.iter().cloned());
            }
        }
        required
    }
}

/// Fragment names spread directly within a selection tree, in first-use
/// order.
fn direct_spreads(selection_set: &[Selection]) -> IndexSet<Name> {
    let mut spreads = IndexSet::default();
    let mut stack: Vec<&Selection> = selection_set.iter().rev().collect();
    while let Some(selection) = stack.pop() {
        match selection {
            Selection::Field(field) => {
                stack.extend(field.selection_set.iter().rev());
            }
            Selection::InlineFragment(inline) => {
                stack.extend(inline.selection_set.iter().rev());
            }
            Selection::FragmentSpread(spread) => {
                spreads.insert(spread.fragment_name.clone());
            }
        }
    }
    spreads
}

/// Variable names referenced anywhere in a selection tree: in field and
/// directive arguments, including nested list and object values. Spread
/// fragments are not entered.
fn selection_variables(selection_set: &[Selection]) -> IndexSet<Name> {
    let mut variables = IndexSet::default();
    let mut stack: Vec<&Selection> = selection_set.iter().rev().collect();
    while let Some(selection) = stack.pop() {
        match selection {
            Selection::Field(field) => {
                for argument in &field.arguments {
                    value_variables(&argument.value, &mut variables);
                }
                directive_variables(&field.directives, &mut variables);
                stack.extend(field.selection_set.iter().rev());
            }
            Selection::InlineFragment(inline) => {
                directive_variables(&inline.directives, &mut variables);
                stack.extend(inline.selection_set.iter().rev());
            }
            Selection::FragmentSpread(spread) => {
                directive_variables(&spread.directives, &mut variables);
            }
        }
    }
    variables
}

fn directive_variables(directives: &ast::DirectiveList, variables: &mut IndexSet<Name>) {
    for directive in directives {
        for argument in &directive.arguments {
            value_variables(&argument.value, variables);
        }
    }
}

fn value_variables(value: &Value, variables: &mut IndexSet<Name>) {
    let mut stack: Vec<&Value> = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Variable(name) => {
                variables.insert(name.clone());
            }
            Value::List(items) => stack.extend(items.iter().map(|item| &**item)),
            Value::Object(fields) => stack.extend(fields.iter().map(|(_, value)| &**value)),
            _ => {}
        }
    }
}
