use std::path::PathBuf;

use plgen_codegen::CodegenError;
use plgen_source::SourceError;
use thiserror::Error;

/// Errors from registration, flushing and the CLI commands.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// The store refused a statement. Everything accepted before it stays
    /// applied and everything after it stays registered.
    #[error("store rejected the definition of `{routine}`: {source}")]
    Store {
        routine: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn store(
        routine: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Store {
            routine: routine.to_string(),
            source: Box::new(source),
        }
    }
}
