//! Extraction errors.

use thiserror::Error;

/// Failure to turn an object into source text or a descriptor.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// No usable source text exists for the object.
    ///
    /// Fatal to that object only: nothing else in a registry is affected.
    #[error("source for `{name}` is unavailable: {reason}")]
    SourceUnavailable { name: String, reason: Unavailable },

    /// A class was handed to an operation that needs a function.
    #[error("`{name}` is a class; only functions can become standalone routines (share it instead)")]
    NotAFunction { name: String },
}

impl SourceError {
    pub(crate) fn unavailable(name: impl Into<String>, reason: Unavailable) -> Self {
        SourceError::SourceUnavailable {
            name: name.into(),
            reason,
        }
    }
}

/// Why source text could not be produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Unavailable {
    #[error("the object was created dynamically and has no source text")]
    Synthesized,
    #[error("no `def` or `class` header found")]
    NoHeader,
    #[error("no `def {name}` or `class {name}` in {file}")]
    NotFound { name: String, file: String },
    #[error("unterminated string literal at byte {offset}")]
    UnterminatedString { offset: u32 },
    #[error("the block has no body")]
    EmptyBody,
    #[error("could not read {file}: {message}")]
    Io { file: String, message: String },
}
