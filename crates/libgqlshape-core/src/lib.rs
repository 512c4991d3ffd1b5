//! Compiles statically declared result shapes into GraphQL query documents.
//!
//! A result shape is a tree of [`RecordShape`](shape::RecordShape)s whose
//! fields carry short metadata strings (variable references, literal
//! arguments, aliases, inline-fragment markers and directives). The
//! [`QueryBuilder`] scans the shape once to collect argument bindings and then
//! renders the selection set that would produce a payload of the same shape.

pub mod document;
mod field_directives;
mod naming;
mod query_builder;
pub mod render;
pub mod scan;
pub mod shape;

pub use field_directives::FieldDirective;
pub use field_directives::FieldDirectives;
pub use field_directives::parse_tags;
pub use naming::to_field_name;
pub use query_builder::BuildError;
pub use query_builder::QueryBuilder;
pub use query_builder::build;
