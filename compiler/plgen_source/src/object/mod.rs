//! Registered objects and the source files they come from.
//!
//! A [`PyObject`] is what a caller registers: a Python function or class
//! together with the block of source that defines it. Its name is read from
//! the defining header, so it is the object's own name no matter what the
//! caller calls the value.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::block::{block_at, find_header, Block};
use crate::header::parse_header;
use crate::lines::logical_lines;
use crate::{SourceError, Unavailable};

/// What a registered object is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Function,
    Class,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Function => f.write_str("function"),
            ObjectKind::Class => f.write_str("class"),
        }
    }
}

/// A Python function or class value.
///
/// Cloning shares the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PyObject {
    name: Arc<str>,
    kind: ObjectKind,
    /// The defining block as it appears in its file (original indentation,
    /// newline-terminated), or `None` for synthesized objects.
    source: Option<Arc<str>>,
}

impl PyObject {
    /// Build an object from the first `def` or `class` block in `text`.
    ///
    /// Lines before the block (imports, other statements) are skipped and
    /// lines after it are ignored.
    pub fn parse(text: &str) -> Result<PyObject, SourceError> {
        let text = normalize_newlines(text);
        cut_object(&text, "<source>", |_| true)?
            .ok_or_else(|| SourceError::unavailable("<source>", Unavailable::NoHeader))
    }

    /// An object created at run time with no source text behind it.
    ///
    /// Every operation that needs source fails with `SourceUnavailable`.
    pub fn synthesized(kind: ObjectKind, name: impl Into<Arc<str>>) -> PyObject {
        PyObject {
            name: name.into(),
            kind,
            source: None,
        }
    }

    /// The intrinsic name from the defining header.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The defining block, newline-terminated.
    pub fn source(&self) -> Result<&str, SourceError> {
        self.source
            .as_deref()
            .ok_or_else(|| SourceError::unavailable(self.name(), Unavailable::Synthesized))
    }
}

/// A Python module's text, searchable for function and class blocks.
#[derive(Clone, Debug)]
pub struct SourceFile {
    label: String,
    text: String,
}

impl SourceFile {
    /// Wrap in-memory module text; `label` names it in error messages.
    pub fn new(label: impl Into<String>, text: &str) -> SourceFile {
        SourceFile {
            label: label.into(),
            text: normalize_newlines(text),
        }
    }

    /// Read a module from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<SourceFile, SourceError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(SourceFile::new(label, text.trim_start_matches('\u{feff}'))),
            Err(err) => Err(SourceError::unavailable(
                label.clone(),
                Unavailable::Io {
                    file: label,
                    message: err.to_string(),
                },
            )),
        }
    }

    /// The first function or class named `name`, at any nesting depth.
    pub fn object(&self, name: &str) -> Result<PyObject, SourceError> {
        cut_object(&self.text, name, |header_name| header_name == name)?.ok_or_else(|| {
            SourceError::unavailable(
                name,
                Unavailable::NotFound {
                    name: name.to_string(),
                    file: self.label.clone(),
                },
            )
        })
    }

    /// Every top-level function and class, in file order.
    pub fn objects(&self) -> Result<Vec<PyObject>, SourceError> {
        let lines = logical_lines(&self.text)
            .map_err(|reason| SourceError::unavailable(self.label.clone(), reason))?;
        let mut objects = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if line.indent != 0 || parse_header(line, &self.text).is_none() {
                continue;
            }
            let block = block_at(&lines, idx, &self.text)
                .map_err(|reason| SourceError::unavailable(self.label.clone(), reason))?;
            objects.push(object_from(&block, &self.text));
        }
        Ok(objects)
    }
}

/// Cut the first block whose header name satisfies `accept`.
///
/// `Ok(None)` means no header matched; errors name the object as `label`.
fn cut_object(
    text: &str,
    label: &str,
    accept: impl Fn(&str) -> bool,
) -> Result<Option<PyObject>, SourceError> {
    let lines = logical_lines(text).map_err(|reason| SourceError::unavailable(label, reason))?;
    let Some(idx) = find_header(&lines, text, |header| accept(header.name.as_str())) else {
        return Ok(None);
    };
    let block =
        block_at(&lines, idx, text).map_err(|reason| SourceError::unavailable(label, reason))?;
    Ok(Some(object_from(&block, text)))
}

fn object_from(block: &Block, text: &str) -> PyObject {
    let cut = block.extent.slice(text);
    let source: Arc<str> = if cut.ends_with('\n') {
        cut.into()
    } else {
        format!("{cut}\n").into()
    };
    PyObject {
        name: block.header.name.as_str().into(),
        kind: block.header.kind,
        source: Some(source),
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
