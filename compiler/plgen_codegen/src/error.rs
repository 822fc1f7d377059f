//! Code generation errors.

use std::fmt;

use plgen_source::SourceError;
use thiserror::Error;

/// A parameter or the return value of a routine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Param(String),
    Return,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Param(name) => write!(f, "`{name}`"),
            Slot::Return => f.write_str("`return`"),
        }
    }
}

/// Failure to build a definition. No partial text is ever produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(
        "`{routine}` is not fully type annotated: {slot} has no annotation \
         (annotate it or pass column types or type name strings as overrides)"
    )]
    MissingAnnotation { routine: String, slot: Slot },

    #[error(
        "`{routine}`: annotation `{annotation}` of {slot} could not be coerced to a \
         PostgreSQL type; pass a column type (or a type name string) as an override instead"
    )]
    UnresolvedType {
        routine: String,
        slot: Slot,
        annotation: String,
    },

    #[error("`{routine}` has {expected} parameter(s) but {found} argument type override(s) were given")]
    OverrideArity {
        routine: String,
        expected: usize,
        found: usize,
    },
}
