//! Type Resolver
//!
//! Maps Python type annotations to the PostgreSQL type names a PL/Python
//! routine header needs, and renders caller-supplied overrides.
//!
//! # Resolution paths
//!
//! - **Override**: a [`TypeSpec`] from the caller. A [`ColumnType`] is
//!   rendered through its `Display`; a plain name is used verbatim.
//! - **Annotation**: the annotation text from the function header is looked
//!   up in a [`TypeMap`], keyed by the native Python types in [`NativeType`].
//!   Unmapped annotations fail with [`TypeError::Unresolved`].

mod column;
mod error;
mod native;
mod type_spec;
mod type_map;

pub use column::ColumnType;
pub use error::TypeError;
pub use native::NativeType;
pub use type_spec::TypeSpec;
pub use type_map::TypeMap;
