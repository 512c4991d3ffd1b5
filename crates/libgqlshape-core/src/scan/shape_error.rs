use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("embedded fragment at {path} cannot declare arguments")]
    ArgumentsInEmbeddedFragment {
        path: String,
    },

    #[error("argument {argument_name:?} is declared more than once at {path}")]
    DuplicateArgument {
        argument_name: String,
        path: String,
    },

    #[error("must be a record or an optional record, found {found}")]
    NotARecord {
        found: String,
    },
}
