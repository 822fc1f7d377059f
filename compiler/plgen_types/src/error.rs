use thiserror::Error;

/// Type resolution failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error(
        "`{annotation}` could not be coerced to a PostgreSQL type; \
         pass a column type (or a type name string) as an override instead"
    )]
    Unresolved { annotation: String },
}
