use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeResolutionError {
    #[error("could not find type name for {type_description}")]
    NoTypeName {
        type_description: String,
    },
}
