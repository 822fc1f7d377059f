//! The `flush` command: shared objects and deferred routines in one script.

use std::io::Write;
use std::path::Path;

use plgen_source::SourceFile;
use plgen_types::TypeMap;

use super::Options;
use crate::{Error, FlushReport, Registry, ScriptStore};

/// Register `options.share` and `options.defer` from `path` and flush them
/// to `out` as one script.
///
/// With neither list given, every top-level function and class is shared.
/// Type overrides in `options` apply to every deferred function.
pub fn flush_file<W: Write>(path: &Path, options: &Options, out: W) -> Result<FlushReport, Error> {
    let file = SourceFile::load(path)?;
    let mut registry = Registry::with_config(options.config.clone(), TypeMap::default());

    if options.share.is_empty() && options.defer.is_empty() {
        for obj in file.objects()? {
            registry.share(&obj)?;
        }
    } else {
        for name in &options.share {
            registry.share(&file.object(name)?)?;
        }
        for name in &options.defer {
            registry.defer_with(file.object(name)?, options.routine_types())?;
        }
    }

    let mut store = ScriptStore::new(out);
    registry.flush(&mut store)
}
