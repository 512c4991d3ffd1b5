use crate::derive_error::DeriveError;
use crate::derive_error::DeriveErrorKind;
use crate::field_attributes::FieldAttributes;
use crate::field_attributes::string_attribute;
use libgqlshape_core::FieldDirectives;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::spanned::Spanned;

/// Which derive is expanding a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum RecordRole {
    /// An argument container: sub-fields without a metadata value read
    /// their instance value as a literal.
    Arguments,
    Shape,
}
impl RecordRole {
    pub(crate) fn derive_name(self) -> &'static str {
        match self {
            Self::Arguments => "QueryArguments",
            Self::Shape => "QueryShape",
        }
    }
}

pub(crate) fn expand(
    input: &DeriveInput,
    role: RecordRole,
) -> Result<TokenStream, DeriveError> {
    let derive_name = role.derive_name();
    if !input.generics.params.is_empty() {
        return Err(DeriveError::new(
            DeriveErrorKind::GenericType { derive_name },
            input.generics.span(),
        ));
    }

    let unsupported = || DeriveError::new(
        DeriveErrorKind::UnsupportedItem {
            derive_name,
            supported: "structs with named fields",
        },
        input.ident.span(),
    );
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit | Fields::Unnamed(_) => return Err(unsupported()),
        },
        Data::Enum(_) | Data::Union(_) => return Err(unsupported()),
    };

    let ident = &input.ident;
    let type_name =
        string_attribute(&input.attrs, "name")?
            .unwrap_or_else(|| ident.to_string());

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue
        };
        let field_attrs = FieldAttributes::from_attributes(&field.attrs)?;
        let field_type = &field.ty;
        let ident_str = field_ident.to_string();
        let metadata = field_attrs.metadata.unwrap_or_default();
        let embed = field_attrs.embed;
        let name_override =
            field_attrs.rename
                .as_ref()
                .map(|name| quote! { .with_name_override(#name) });

        descriptors.push(quote! {
            libgqlshape::shape::FieldDescriptor::new(
                #ident_str,
                <#field_type as libgqlshape::shape::ShapeField>::value_type(),
                #metadata,
            )
            .with_embedded(#embed)
            #name_override
        });

        let reads_literal =
            role == RecordRole::Arguments
                && FieldDirectives::parse(&metadata).positional_value().is_none();
        values.push(if reads_literal {
            quote! {
                libgqlshape::shape::FieldValue::Literal(
                    libgqlshape::shape::ArgumentLiteral::to_argument_literal(
                        &self.#field_ident,
                    ),
                )
            }
        } else {
            quote! {
                libgqlshape::shape::ShapeField::field_value(&self.#field_ident)
            }
        });
    }

    Ok(quote! {
        impl libgqlshape::shape::QueryShape for #ident {
            fn record_shape() -> &'static libgqlshape::shape::RecordShape {
                static RECORD_SHAPE: ::std::sync::OnceLock<libgqlshape::shape::RecordShape> =
                    ::std::sync::OnceLock::new();
                RECORD_SHAPE.get_or_init(|| libgqlshape::shape::RecordShape::new(
                    #type_name,
                    ::std::vec![#(#descriptors),*],
                ))
            }

            fn record_value(&self) -> libgqlshape::shape::RecordValue {
                libgqlshape::shape::RecordValue::new(::std::vec![#(#values),*])
            }
        }

        impl libgqlshape::shape::ShapeField for #ident {
            fn value_type() -> libgqlshape::shape::ValueType {
                libgqlshape::shape::ValueType::Record(
                    <Self as libgqlshape::shape::QueryShape>::record_shape().clone(),
                )
            }

            fn field_value(&self) -> libgqlshape::shape::FieldValue {
                libgqlshape::shape::FieldValue::Record(
                    <Self as libgqlshape::shape::QueryShape>::record_value(self),
                )
            }
        }
    })
}
