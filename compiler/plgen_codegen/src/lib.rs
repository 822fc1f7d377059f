//! Routine Definition Builder and Namespace Installer Builder.
//!
//! Turns extracted Python functions into `CREATE OR REPLACE FUNCTION`
//! statements for PL/Python, and registered functions and classes into the
//! installer routine that copies them into the shared namespace (`GD`).
//!
//! All output is produced through an [`Emitter`], so the text is built in
//! one pass with no post-processing beyond what each builder documents.

mod config;
mod emitter;
mod error;
mod installer;
mod routine;

pub use config::CodegenConfig;
pub use emitter::{Emitter, StringEmitter};
pub use error::{CodegenError, Slot};
pub use installer::{install_routine, install_script, invoke_statement};
pub use routine::{build, build_routine, resolve_signature, RoutineTypes, Signature};
