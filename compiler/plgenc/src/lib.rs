//! Registry/Flush Orchestrator
//!
//! A [`Registry`] collects Python objects on two tracks and a flush turns
//! them into statements for a [`Store`]:
//!
//! - **shared**: functions and classes copied into the shared namespace by
//!   one installer routine, which is created and invoked once per flush;
//! - **deferred**: functions compiled into standalone routines, one
//!   `CREATE OR REPLACE FUNCTION` each.
//!
//! The shared track is always flushed first, so routines created in the
//! same flush can use the names the installer just populated.

pub mod commands;
mod error;
mod registry;
mod store;
mod tracing_setup;

pub use error::Error;
pub use registry::{DeferredRoutine, FlushReport, Registry};
pub use store::{RecordingStore, Rejected, ScriptStore, Store};
pub use tracing_setup::init_tracing;

pub use plgen_codegen::{CodegenConfig, RoutineTypes};
pub use plgen_source::{ObjectKind, PyObject, SourceFile};
pub use plgen_types::{ColumnType, TypeMap, TypeSpec};
