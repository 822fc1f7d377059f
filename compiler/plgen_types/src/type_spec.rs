//! Caller-supplied type overrides.

use std::fmt;

use crate::ColumnType;

/// An explicit type for a parameter or return value.
///
/// Overrides bypass annotation lookup entirely: nothing is validated, a
/// typed column is rendered and a name string is copied as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    Column(ColumnType),
    Name(String),
}

impl TypeSpec {
    /// The type name to place in a routine header.
    pub fn render(&self) -> String {
        match self {
            TypeSpec::Column(column) => column.to_string(),
            TypeSpec::Name(name) => name.clone(),
        }
    }

    /// True when the override renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            TypeSpec::Column(_) => false,
            TypeSpec::Name(name) => name.is_empty(),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Column(column) => column.fmt(f),
            TypeSpec::Name(name) => f.write_str(name),
        }
    }
}

impl From<ColumnType> for TypeSpec {
    fn from(column: ColumnType) -> Self {
        TypeSpec::Column(column)
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Name(name)
    }
}
