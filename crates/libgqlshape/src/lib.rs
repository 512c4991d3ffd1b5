extern crate self as libgqlshape;

pub use libgqlshape_core::*;

/// Derives for declaring query shapes as plain Rust structs
/// (`#[derive(QueryShape)]`, `#[derive(QueryArguments)]` and
/// `#[derive(NamedType)]`).
#[cfg(feature = "macros")]
pub mod macros {
    pub use libgqlshape_macros::*;
}

#[cfg(feature = "macros")]
pub use libgqlshape_macros::NamedType;
#[cfg(feature = "macros")]
pub use libgqlshape_macros::QueryArguments;
#[cfg(feature = "macros")]
pub use libgqlshape_macros::QueryShape;

#[cfg(all(test, feature = "macros"))]
mod tests;
