use proc_macro2::Span;
use thiserror::Error;

/// A derive input the macros cannot expand, along with where to point the
/// resulting compiler error.
#[derive(Clone, Debug)]
pub(crate) struct DeriveError {
    pub(crate) kind: DeriveErrorKind,
    pub(crate) span: Span,
}
impl DeriveError {
    pub(crate) fn new(kind: DeriveErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Converts this error into a `compile_error!` token stream
    pub(crate) fn into_compile_error(self) -> proc_macro2::TokenStream {
        let message = self.kind.to_string();
        let span = self.span;
        quote::quote_spanned! {span=>
            compile_error!(#message);
        }
    }
}
impl std::convert::From<syn::Error> for DeriveError {
    fn from(value: syn::Error) -> Self {
        Self::new(
            DeriveErrorKind::InvalidAttribute {
                details: value.to_string(),
            },
            value.span(),
        )
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum DeriveErrorKind {
    #[error("`#[derive({derive_name})]` does not support generic types")]
    GenericType {
        derive_name: &'static str,
    },

    #[error("invalid `#[graphql(...)]` attribute: {details}")]
    InvalidAttribute {
        details: String,
    },

    #[error("`#[derive({derive_name})]` only supports {supported}")]
    UnsupportedItem {
        derive_name: &'static str,
        supported: &'static str,
    },
}
