#![doc = include_str!("../README.md")]

pub mod ast;
pub mod collections;
pub mod document;
mod name;
mod node;
pub mod schema;
pub mod topological;
pub mod validation;

pub use crate::ast::ExecutableDocument;
pub use crate::ast::TypeSystemDocument;
pub use crate::document::DocumentContext;
pub use crate::name::InvalidNameError;
pub use crate::name::Name;
pub use crate::node::Node;
pub use crate::schema::SchemaContext;
pub use crate::validation::DiagnosticList;
pub use crate::validation::GqlError;

/// Validate an executable document against a schema.
///
/// On success the document is returned unchanged. On failure the returned
/// [`DiagnosticList`] is non-empty and contains one [`GqlError`] per
/// violation; independent violations are all reported.
///
/// Validation is pure and deterministic. A [`SchemaContext`] is immutable
/// once built and may be shared between concurrent calls.
pub fn validate(
    document: ExecutableDocument,
    schema: &SchemaContext,
) -> Result<ExecutableDocument, DiagnosticList> {
    let mut errors = DiagnosticList::new();
    let context = DocumentContext::new(&document);
    validation::validate_executable_document(&mut errors, schema, &context);
    if errors.is_empty() {
        Ok(document)
    } else {
        Err(errors)
    }
}
