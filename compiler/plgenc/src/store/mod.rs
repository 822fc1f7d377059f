//! Store collaborators.
//!
//! A [`Store`] executes generated SQL against something: a live connection,
//! a script file, or an in-memory log for tests.

use std::io::{self, Write};

use plgen_codegen::invoke_statement;
use thiserror::Error;

/// Executes definition and invocation statements.
///
/// Routine definitions always use `CREATE OR REPLACE`, so a store may see
/// the same definition again after a failed flush is retried.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one statement.
    fn execute(&mut self, sql: &str) -> Result<(), Self::Error>;

    /// Call a parameterless routine by name.
    fn invoke(&mut self, routine: &str) -> Result<(), Self::Error> {
        self.execute(&invoke_statement(routine))
    }
}

/// Failure injected by [`RecordingStore`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("statement #{index} rejected")]
pub struct Rejected {
    /// Zero-based position of the rejected statement in the store's log.
    pub index: usize,
}

/// In-memory store that records every statement it accepts.
#[derive(Clone, Debug, Default)]
pub struct RecordingStore {
    statements: Vec<String>,
    fail_after: Option<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that accepts `accepted` statements and rejects every later one.
    pub fn failing_after(accepted: usize) -> Self {
        RecordingStore {
            statements: Vec::new(),
            fail_after: Some(accepted),
        }
    }

    /// Stop rejecting statements.
    pub fn recover(&mut self) {
        self.fail_after = None;
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Store for RecordingStore {
    type Error = Rejected;

    fn execute(&mut self, sql: &str) -> Result<(), Rejected> {
        let index = self.statements.len();
        if self.fail_after.is_some_and(|limit| index >= limit) {
            return Err(Rejected { index });
        }
        self.statements.push(sql.to_string());
        Ok(())
    }
}

/// Store that writes an executable SQL script.
///
/// Statements are separated by a blank line; a statement that does not end
/// in a newline is terminated with `;`.
pub struct ScriptStore<W: Write> {
    out: W,
}

impl<W: Write> ScriptStore<W> {
    pub fn new(out: W) -> Self {
        ScriptStore { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Store for ScriptStore<W> {
    type Error = io::Error;

    fn execute(&mut self, sql: &str) -> io::Result<()> {
        self.out.write_all(sql.as_bytes())?;
        if !sql.ends_with('\n') {
            self.out.write_all(b";\n")?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
