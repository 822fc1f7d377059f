//! Namespace Installer Builder
//!
//! Concatenates the full source of shared functions and classes, each
//! followed by an assignment into the shared namespace, and wraps the
//! script in a parameterless routine that runs it once.

use plgen_source::text::dedent;
use plgen_source::{PyObject, SourceError};

use crate::{CodegenConfig, Emitter, StringEmitter};

/// Build the installer script for `objects`, in order.
///
/// Each object's dedented source is followed by
/// `<namespace>["<name>"] = <name>`, with two blank lines between every
/// piece. The script ends with a single newline. An empty slice gives
/// an empty script.
#[tracing::instrument(level = "debug", skip_all, fields(objects = objects.len()))]
pub fn install_script(objects: &[PyObject], config: &CodegenConfig) -> Result<String, SourceError> {
    let mut out = StringEmitter::new();
    for obj in objects {
        if !out.is_empty() {
            out.emit_newline();
            out.emit_newline();
        }
        out.emit(&dedent(obj.source()?));
        out.ensure_trailing_newline();
        out.emit_newline();
        out.emit(&config.namespace);
        out.emit("[\"");
        out.emit(obj.name());
        out.emit("\"] = ");
        out.emit(obj.name());
        out.emit_newline();
        tracing::trace!(name = obj.name(), kind = %obj.kind(), "shared object");
    }
    Ok(out.output())
}

/// The `CREATE OR REPLACE FUNCTION` statement for the installer routine.
pub fn install_routine(script: &str, config: &CodegenConfig) -> String {
    let mut out = StringEmitter::with_capacity(script.len() + 96);
    out.emit("CREATE OR REPLACE FUNCTION ");
    out.emit(&config.install_routine);
    out.emit("()");
    out.emit_newline();
    out.emit("RETURNS ");
    out.emit(&config.install_returns);
    out.emit(" AS $$");
    out.emit_newline();
    out.emit(script);
    out.emit_newline();
    out.emit("$$ LANGUAGE ");
    out.emit(&config.language);
    out.emit(";");
    out.emit_newline();
    out.output()
}

/// Statement that runs a parameterless routine once.
pub fn invoke_statement(routine: &str) -> String {
    format!("SELECT {routine}()")
}

#[cfg(test)]
mod tests;
