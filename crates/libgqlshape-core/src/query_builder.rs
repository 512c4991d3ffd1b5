use crate::document::Document;
use crate::document::OperationKind;
use crate::render::RenderError;
use crate::render::Renderer;
use crate::scan;
use crate::scan::ShapeError;
use crate::shape::QueryShape;
use crate::shape::RecordShape;
use crate::shape::RecordValue;
use crate::shape::ValueType;
use thiserror::Error;

type Result<T> = std::result::Result<T, BuildError>;

/// Build the `query` document for `shape` with default settings.
///
/// ```rust,ignore
/// #[derive(QueryShape)]
/// struct HeroQuery {
///     hero: Hero,
/// }
///
/// let query = libgqlshape::build(&HeroQuery::default())?;
/// ```
pub fn build<T: QueryShape>(shape: &T) -> Result<String> {
    QueryBuilder::new().build(shape)
}

/// Compiles record shapes into query documents.
///
/// Each build scans the shape for argument containers, then renders the
/// document; nothing is shared between builds, so one builder may be used
/// from several threads at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuilder {
    operation_kind: OperationKind,
    operation_name: Option<String>,
}
impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the document text for a typed shape instance.
    pub fn build<T: QueryShape>(&self, shape: &T) -> Result<String> {
        Ok(self.build_document(shape)?.to_graphql_string())
    }

    pub fn build_document<T: QueryShape>(&self, shape: &T) -> Result<Document> {
        self.build_record_document(T::record_shape(), &shape.record_value())
    }

    /// Build the document text for a record described at runtime.
    pub fn build_record(
        &self,
        shape: &RecordShape,
        value: &RecordValue,
    ) -> Result<String> {
        Ok(self.build_record_document(shape, value)?.to_graphql_string())
    }

    pub fn build_record_document(
        &self,
        shape: &RecordShape,
        value: &RecordValue,
    ) -> Result<Document> {
        log::debug!(
            "Building {} document for `{}`.",
            self.operation_kind,
            shape.type_name(),
        );

        let index = scan::scan_record(shape, value)?;
        log::trace!(
            "Found {} arguments in `{}`.",
            index.len(),
            shape.type_name(),
        );

        Ok(Renderer::new(&index).render(
            shape,
            value,
            self.operation_kind,
            self.operation_name.as_deref(),
        )?)
    }

    /// Build the document text for a dynamically described root, which must
    /// be a record (or an optional record). All instance values are zero.
    pub fn build_root(&self, root: &ValueType) -> Result<String> {
        let shape = scan::root_record(root)?;
        self.build_record(shape, &RecordValue::zero())
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn set_operation_kind(mut self, operation_kind: OperationKind) -> Self {
        self.operation_kind = operation_kind;
        self
    }

    /// Set the name rendered right after the operation keyword.
    pub fn set_operation_name(mut self, operation_name: Option<String>) -> Self {
        self.operation_name = operation_name;
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Failure to render the query document: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid record shape: {0}")]
    Shape(#[from] ShapeError),
}
