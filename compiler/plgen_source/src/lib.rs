//! Source Extractor
//!
//! Reads the source of a Python function or class the way `inspect.getsource`
//! does and cuts it into the pieces code generation needs.
//!
//! # Pipeline
//!
//! ```text
//! SourceFile / PyObject::parse
//!     │  block cut (decorators + header + deeper-indented lines)
//!     ▼
//! PyObject { name, kind, source }
//!     │  dedent ──► logical lines ──► header + body statements
//!     ▼
//! Descriptor { name, params, annotations, body }
//! ```
//!
//! # Modules
//!
//! - [`text`]: `textwrap`-compatible dedent/indent helpers
//! - `lines`: logical line grouping over raw tokens
//! - `header`: `def`/`class` header parsing
//! - `block`: block extent and top-level body statements
//! - [`object`]: registered objects and source files
//! - [`extract`]: the function descriptor

mod block;
mod error;
pub mod extract;
mod header;
mod lines;
pub mod object;
pub mod text;

pub use error::{SourceError, Unavailable};
pub use extract::{extract, Annotations, Descriptor, RETURN_KEY};
pub use object::{ObjectKind, PyObject, SourceFile};
