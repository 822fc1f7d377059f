//! The `routine` command: one function as a standalone routine.

use std::path::Path;

use plgen_codegen::build_routine;
use plgen_source::SourceFile;
use plgen_types::TypeMap;

use super::Options;
use crate::Error;

/// The `CREATE OR REPLACE FUNCTION` statement for function `name` in `path`.
pub fn routine_sql(path: &Path, name: &str, options: &Options) -> Result<String, Error> {
    let file = SourceFile::load(path)?;
    let func = file.object(name)?;
    Ok(build_routine(
        &func,
        &options.routine_types(),
        &TypeMap::default(),
        &options.config,
    )?)
}
