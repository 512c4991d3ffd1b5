use crate::shape::TypeResolutionError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(
        "variable `${variable_name}` is declared as both `{first_declaration}` \
        and `{second_declaration}`"
    )]
    ConflictingVariable {
        first_declaration: String,
        second_declaration: String,
        variable_name: String,
    },

    #[error("argument {argument_name:?} at {path}: {source}")]
    VariableType {
        argument_name: String,
        path: String,
        source: TypeResolutionError,
    },
}
