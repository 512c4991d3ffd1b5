mod derive_error;
mod derive_named_type;
mod derive_query_shape;
mod field_attributes;


use derive_error::DeriveError;
use derive_query_shape::RecordRole;
use syn::DeriveInput;
use syn::parse_macro_input;

/// Implements [`QueryShape`](libgqlshape::shape::QueryShape) for a struct
/// with named fields, so that a query document can be built from it.
///
/// Each field is selected under its lowerCamelCase name. Per-field metadata
/// goes in a `#[graphql(...)]` attribute:
///
/// * `#[graphql("...")]`: the metadata string, e.g. `"alias=hero"`,
///   `"(episode: JEDI)"`, `"@include(if: $withFriends)"` or
///   `"... on Droid"`.
/// * `#[graphql(rename = "name")]`: emit the field under `name` instead.
///   `#[serde(rename = "name")]` is honored too.
/// * `#[graphql(embed)]`: the field's record contributes its fields directly
///   to the field's inline fragment. `#[serde(flatten)]` implies this.
///
/// A field named `graphql_arguments` declares the arguments of the selection
/// it appears in (see [`QueryArguments`](derive@QueryArguments)).
///
/// Example usage:
///
/// ```rust
/// use libgqlshape::macros::NamedType;
/// use libgqlshape::macros::QueryArguments;
/// use libgqlshape::macros::QueryShape;
///
/// #[derive(NamedType)]
/// enum Episode {
///     NewHope,
///     Empire,
///     Jedi,
/// }
///
/// #[derive(QueryArguments)]
/// struct HeroArguments {
///     #[graphql("$ep,notnull")]
///     episode: Episode,
/// }
///
/// #[derive(QueryShape)]
/// struct Character {
///     name: String,
/// }
///
/// #[derive(QueryShape)]
/// struct Hero {
///     graphql_arguments: HeroArguments,
///     name: String,
///     friends: Vec<Character>,
/// }
///
/// #[derive(QueryShape)]
/// struct HeroQuery {
///     hero: Hero,
/// }
///
/// let shape = HeroQuery {
///     hero: Hero {
///         graphql_arguments: HeroArguments { episode: Episode::Jedi },
///         name: String::new(),
///         friends: vec![],
///     },
/// };
///
/// assert_eq!(libgqlshape::build(&shape).unwrap(), "\
/// query($ep: Episode!) {
///   hero(episode: $ep) {
///     name
///     friends {
///       name
///     }
///   }
/// }");
/// ```
#[proc_macro_derive(QueryShape, attributes(graphql, serde))]
pub fn derive_query_shape(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_query_shape::expand(&input, RecordRole::Shape)
        .unwrap_or_else(DeriveError::into_compile_error)
        .into()
}

/// Implements [`QueryShape`](libgqlshape::shape::QueryShape) for an argument
/// container: a struct stored in a `graphql_arguments` field whose fields are
/// the arguments of the enclosing selection.
///
/// A field's metadata binds its value, either to a literal (`"10"`,
/// `"JEDI"`) or to a variable (`"$first"`, `"$first,notnull"`). Fields with
/// no metadata value are rendered from their current value through
/// [`ArgumentLiteral`](libgqlshape::shape::ArgumentLiteral).
#[proc_macro_derive(QueryArguments, attributes(graphql, serde))]
pub fn derive_query_arguments(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_query_shape::expand(&input, RecordRole::Arguments)
        .unwrap_or_else(DeriveError::into_compile_error)
        .into()
}

/// Declares a user-defined GraphQL type (an enum or a custom scalar) usable
/// as a field or argument type.
///
/// Enums with only unit variants become named string types whose values
/// render as bare `SCREAMING_SNAKE_CASE` identifiers; a variant's identifier
/// can be overridden with `#[graphql(rename = "...")]`. A single-field tuple
/// struct wraps its inner type and renders like it. The type name defaults
/// to the Rust identifier and can be overridden with
/// `#[graphql(name = "...")]`.
#[proc_macro_derive(NamedType, attributes(graphql))]
pub fn derive_named_type(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_named_type::expand(&input)
        .unwrap_or_else(DeriveError::into_compile_error)
        .into()
}
