//! Rule checking for executable documents.
//!
//! Validation runs in two phases. Phase 1 checks the fragment definitions:
//! uniqueness, usedness, spread resolution, acyclicity, and each fragment's
//! own type condition, directives, and selections. Phase 2 — gated on
//! phase 1, because it assumes fragments are well-formed and acyclic —
//! checks the operations: name uniqueness, anonymous-operation isolation,
//! directives, variable definitions and usage, the rooted selection tree,
//! and the subscription single-root rule.
//!
//! Within a phase, independent violations are all reported: checks
//! accumulate into a [`DiagnosticList`] instead of stopping at the first
//! failure.

pub(crate) mod argument;
mod diagnostics;
pub(crate) mod directive;
pub(crate) mod fragment;
pub(crate) mod operation;
pub(crate) mod selection;
pub(crate) mod value;
pub(crate) mod variable;

pub use diagnostics::GqlError;

use crate::ast::VariableDefinition;
use crate::document::DocumentContext;
use crate::schema::SchemaContext;
use crate::Node;
use std::fmt;

/// A non-empty accumulation of [`GqlError`]s, as returned by
/// [`validate`][crate::validate].
///
/// `Display` renders one message per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticList {
    diagnostics: Vec<GqlError>,
}

impl DiagnosticList {
    pub(crate) fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, error: GqlError) {
        self.diagnostics.push(error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GqlError> {
        self.diagnostics.iter()
    }
}

impl fmt::Display for DiagnosticList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?
        }
        Ok(())
    }
}

impl IntoIterator for DiagnosticList {
    type Item = GqlError;
    type IntoIter = std::vec::IntoIter<GqlError>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a GqlError;
    type IntoIter = std::slice::Iter<'a, GqlError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a value check resolves variable references, depending on where the
/// value occurs.
#[derive(Clone, Copy)]
pub(crate) enum VariableContext<'a> {
    /// Inside an operation: a reference must name one of these definitions
    /// and its declared type must match the expected type exactly.
    Operation(&'a [Node<VariableDefinition>]),
    /// Inside a fragment definition: references are accepted as-is; each
    /// operation spreading the fragment accounts for them separately.
    Fragment,
    /// Inside a default value: variables are not permitted at all.
    DefaultValue,
}

pub(crate) fn validate_executable_document(
    errors: &mut DiagnosticList,
    schema: &SchemaContext,
    document: &DocumentContext,
) {
    fragment::validate_fragment_definitions(errors, schema, document);
    if errors.is_empty() {
        operation::validate_operation_definitions(errors, schema, document);
    }
}
