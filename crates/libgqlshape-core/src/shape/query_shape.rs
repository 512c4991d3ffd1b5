use crate::shape::RecordShape;
use crate::shape::RecordValue;
use crate::shape::ShapeField;

/// A record type that a query document can be built from.
///
/// Usually implemented with `#[derive(QueryShape)]`, which describes the
/// record once (the first time [`QueryShape::record_shape()`] is called) and
/// caches the description for the life of the process. Shapes that contain
/// themselves, directly or through other records, describe an infinite query
/// and are not supported.
pub trait QueryShape: ShapeField {
    /// The cached description of this record type.
    fn record_shape() -> &'static RecordShape;

    /// The values of this instance that matter to the query: nested records
    /// and argument literals.
    fn record_value(&self) -> RecordValue;
}
