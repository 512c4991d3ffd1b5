use crate::derive_error::DeriveError;
use syn::Attribute;
use syn::Ident;
use syn::LitStr;
use syn::Token;
use syn::parse::ParseStream;

/// Options declared on one field of a derived record.
///
/// Read from `#[graphql("metadata", rename = "name", embed)]`, plus the
/// parts of `#[serde(...)]` that affect how the field is emitted:
/// `rename = "..."` and `flatten`. An explicit `graphql` rename wins over a
/// serde one.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FieldAttributes {
    pub(crate) embed: bool,
    pub(crate) metadata: Option<String>,
    pub(crate) rename: Option<String>,
}
impl FieldAttributes {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> Result<Self, DeriveError> {
        let mut field_attrs = Self::default();
        let mut serde_rename = None;

        for attr in attrs {
            if attr.path().is_ident("graphql") {
                attr.parse_args_with(|input: ParseStream| {
                    field_attrs.parse_graphql_args(input)
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("flatten") {
                        field_attrs.embed = true;
                    } else if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                        serde_rename = Some(meta.value()?.parse::<LitStr>()?.value());
                    } else if meta.input.peek(Token![=]) {
                        meta.value()?.parse::<syn::Lit>()?;
                    } else if meta.input.peek(syn::token::Paren) {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        content.parse::<proc_macro2::TokenStream>()?;
                    }
                    Ok(())
                })?;
            }
        }

        if field_attrs.rename.is_none() {
            field_attrs.rename = serde_rename;
        }
        Ok(field_attrs)
    }

    fn parse_graphql_args(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(LitStr) {
                let metadata: LitStr = input.parse()?;
                if self.metadata.is_some() {
                    return Err(syn::Error::new(
                        metadata.span(),
                        "metadata string given more than once",
                    ));
                }
                self.metadata = Some(metadata.value());
            } else {
                let key: Ident = input.parse()?;
                match key.to_string().as_str() {
                    "embed" => self.embed = true,
                    "rename" => {
                        input.parse::<Token![=]>()?;
                        self.rename = Some(input.parse::<LitStr>()?.value());
                    },
                    other => return Err(syn::Error::new(
                        key.span(),
                        format!("unknown key `{other}`, expected `rename` or `embed`"),
                    )),
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(())
    }
}

/// Read `#[graphql(key = "value")]` from type- or variant-level attributes.
pub(crate) fn string_attribute(
    attrs: &[Attribute],
    key: &str,
) -> Result<Option<String>, DeriveError> {
    let mut value = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                value = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error(format!("expected `{key} = \"...\"`")))
            }
        })?;
    }
    Ok(value)
}
