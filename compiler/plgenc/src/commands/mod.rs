//! Command handlers for the `plgen` CLI.
//!
//! Each handler loads a Python module, registers the named objects and
//! renders the resulting SQL. Argument parsing lives here so it can be
//! tested without spawning the binary.

use std::path::PathBuf;

use plgen_codegen::{CodegenConfig, RoutineTypes};
use plgen_types::TypeSpec;

mod flush;
mod install;
mod routine;

pub use flush::flush_file;
pub use install::install_sql;
pub use routine::routine_sql;

/// Options shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Code generation settings (`--language=`, `--namespace=`, `--install-routine=`)
    pub config: CodegenConfig,
    /// Argument type overrides (`--arg-types=t1,t2`)
    pub arg_types: Vec<TypeSpec>,
    /// Return type override (`--returns=t`); an empty value drops the clause
    pub returns: Option<TypeSpec>,
    /// Objects for the shared namespace (`--share=a,b`)
    pub share: Vec<String>,
    /// Functions to create as routines (`--defer=c,d`)
    pub defer: Vec<String>,
    /// Output file (`-o <path>`); stdout when absent
    pub output: Option<PathBuf>,
}

impl Options {
    /// Type overrides for a single routine.
    pub fn routine_types(&self) -> RoutineTypes {
        RoutineTypes {
            args: self.arg_types.clone(),
            returns: self.returns.clone(),
        }
    }
}

/// Split command arguments into positional arguments and [`Options`].
///
/// Returns a message naming the offending argument on an unknown flag or a
/// `-o` with no path.
pub fn parse_options(args: &[String]) -> Result<(Vec<String>, Options), String> {
    let mut positional = Vec::new();
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" || arg == "--output" {
            let Some(path) = args.get(i + 1) else {
                return Err(format!("missing path after `{arg}`"));
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--arg-types=") {
            options.arg_types = split_list(value).into_iter().map(TypeSpec::from).collect();
        } else if let Some(value) = arg.strip_prefix("--returns=") {
            options.returns = Some(TypeSpec::from(value));
        } else if let Some(value) = arg.strip_prefix("--share=") {
            options.share.extend(split_list(value));
        } else if let Some(value) = arg.strip_prefix("--defer=") {
            options.defer.extend(split_list(value));
        } else if let Some(value) = arg.strip_prefix("--language=") {
            options.config.language = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--namespace=") {
            options.config.namespace = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--install-routine=") {
            options.config.install_routine = value.to_string();
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            positional.push(arg.clone());
        }
        i += 1;
    }
    Ok((positional, options))
}

/// Comma-separated list with surrounding whitespace trimmed and empty
/// entries dropped.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests;
