//! The `install` command: the shared-namespace installer for some objects.

use std::path::Path;

use plgen_source::SourceFile;
use plgen_types::TypeMap;

use super::Options;
use crate::{Error, Registry, ScriptStore};

/// Installer definition plus its invocation, as a SQL script.
pub fn install_sql(path: &Path, names: &[String], options: &Options) -> Result<String, Error> {
    let file = SourceFile::load(path)?;
    let mut registry = Registry::with_config(options.config.clone(), TypeMap::default());
    for name in names {
        registry.share(&file.object(name)?)?;
    }
    let mut store = ScriptStore::new(Vec::new());
    registry.flush(&mut store)?;
    Ok(String::from_utf8_lossy(&store.into_inner()).into_owned())
}
