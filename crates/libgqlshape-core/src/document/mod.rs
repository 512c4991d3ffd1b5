#[allow(clippy::module_inception)]
mod document;
mod field_selection;
mod inline_fragment_selection;
mod operation_kind;
mod selection;
mod variable_definition;

pub use document::Document;
pub use field_selection::FieldSelection;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use variable_definition::VariableDefinition;

const INDENT: &str = "  ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
