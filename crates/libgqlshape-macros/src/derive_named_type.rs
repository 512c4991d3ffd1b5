use crate::derive_error::DeriveError;
use crate::derive_error::DeriveErrorKind;
use crate::field_attributes::string_attribute;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::spanned::Spanned;

const DERIVE_NAME: &str = "NamedType";
const SUPPORTED: &str = "enums with only unit variants and single-field tuple structs";

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream, DeriveError> {
    if !input.generics.params.is_empty() {
        return Err(DeriveError::new(
            DeriveErrorKind::GenericType { derive_name: DERIVE_NAME },
            input.generics.span(),
        ));
    }

    let ident = &input.ident;
    let type_name =
        string_attribute(&input.attrs, "name")?
            .unwrap_or_else(|| ident.to_string());

    match &input.data {
        Data::Enum(data) if !data.variants.is_empty() => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(unsupported(variant.span()));
                }
                let variant_ident = &variant.ident;
                let literal =
                    string_attribute(&variant.attrs, "rename")?
                        .unwrap_or_else(|| to_screaming_snake_case(&variant_ident.to_string()));
                arms.push(quote! {
                    Self::#variant_ident => #literal.to_string(),
                });
            }

            Ok(quote! {
                impl libgqlshape::shape::ShapeField for #ident {
                    fn value_type() -> libgqlshape::shape::ValueType {
                        libgqlshape::shape::ValueType::named(
                            #type_name,
                            libgqlshape::shape::ValueType::String,
                        )
                    }
                }

                impl libgqlshape::shape::ArgumentLiteral for #ident {
                    fn to_argument_literal(&self) -> ::std::string::String {
                        match self {
                            #(#arms)*
                        }
                    }
                }
            })
        },

        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let inner_type = &fields.unnamed[0].ty;
                Ok(quote! {
                    impl libgqlshape::shape::ShapeField for #ident {
                        fn value_type() -> libgqlshape::shape::ValueType {
                            libgqlshape::shape::ValueType::named(
                                #type_name,
                                <#inner_type as libgqlshape::shape::ShapeField>::value_type(),
                            )
                        }
                    }

                    impl libgqlshape::shape::ArgumentLiteral for #ident {
                        fn to_argument_literal(&self) -> ::std::string::String {
                            libgqlshape::shape::ArgumentLiteral::to_argument_literal(&self.0)
                        }
                    }
                })
            },
            _ => Err(unsupported(ident.span())),
        },

        Data::Enum(_) | Data::Union(_) => Err(unsupported(ident.span())),
    }
}

fn unsupported(span: proc_macro2::Span) -> DeriveError {
    DeriveError::new(
        DeriveErrorKind::UnsupportedItem {
            derive_name: DERIVE_NAME,
            supported: SUPPORTED,
        },
        span,
    )
}

/// `NewHope` → `NEW_HOPE`, `HTTPError` → `HTTP_ERROR`.
pub(crate) fn to_screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in chars.iter().copied().enumerate() {
        if i > 0 && ch.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            let starts_word =
                prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
            if starts_word {
                out.push('_');
            }
        }
        out.extend(ch.to_uppercase());
    }
    out
}
