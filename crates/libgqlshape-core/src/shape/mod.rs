mod argument_literal;
mod field_descriptor;
mod query_shape;
mod record_shape;
mod record_value;
mod shape_field;
mod type_resolution_error;
mod value_type;

pub use argument_literal::ArgumentLiteral;
pub use field_descriptor::ARGUMENTS_FIELD_NAME;
pub use field_descriptor::FieldDescriptor;
pub use query_shape::QueryShape;
pub use record_shape::RecordShape;
pub use record_value::FieldValue;
pub use record_value::RecordValue;
pub use shape_field::ShapeField;
pub use type_resolution_error::TypeResolutionError;
pub use value_type::ValueType;
