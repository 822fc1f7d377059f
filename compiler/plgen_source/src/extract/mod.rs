//! Function descriptors.
//!
//! [`extract`] turns a registered function into the view code generation
//! works from: the intrinsic name, the positional parameters, every
//! annotation as source text, and the body with the header, comments and
//! the function's own indentation removed.

use rustc_hash::FxHashMap;

use crate::block::{block_at, find_header};
use crate::header::ParamKind;
use crate::lines::logical_lines;
use crate::text::{dedent, dedent_statement};
use crate::{ObjectKind, PyObject, SourceError, Unavailable};

/// Annotation key under which the return annotation is stored.
pub const RETURN_KEY: &str = "return";

/// Parameter and return annotations, as normalized source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    map: FxHashMap<String, String>,
}

impl Annotations {
    /// Annotation of parameter `name`, or of the return value for [`RETURN_KEY`].
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn returns(&self) -> Option<&str> {
        self.get(RETURN_KEY)
    }

    fn insert(&mut self, name: String, annotation: String) {
        self.map.insert(name, annotation);
    }
}

/// A function as code generation sees it. Built fresh by every [`extract`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    /// Positional parameter names in declaration order.
    pub params: Vec<String>,
    pub annotations: Annotations,
    /// Top-level body statements joined by newlines, starting at column zero.
    pub body: String,
}

/// Extract the descriptor of a function.
///
/// Classes are rejected with [`SourceError::NotAFunction`]; objects without
/// source fail with [`SourceError::SourceUnavailable`].
#[tracing::instrument(level = "debug", skip_all, fields(name = obj.name()))]
pub fn extract(obj: &PyObject) -> Result<Descriptor, SourceError> {
    if obj.kind() == ObjectKind::Class {
        return Err(SourceError::NotAFunction {
            name: obj.name().to_string(),
        });
    }
    let unavailable = |reason| SourceError::unavailable(obj.name(), reason);

    let source = dedent(obj.source()?);
    let lines = logical_lines(&source).map_err(unavailable)?;
    let idx = find_header(&lines, &source, |header| {
        header.kind == ObjectKind::Function && header.name == obj.name()
    })
    .ok_or_else(|| unavailable(Unavailable::NoHeader))?;
    let block = block_at(&lines, idx, &source).map_err(unavailable)?;

    let body_indent = block.body_indent as usize;
    let body = block
        .statements
        .iter()
        .map(|span| dedent_statement(span.slice(&source), body_indent))
        .collect::<Vec<_>>()
        .join("\n");

    let mut params = Vec::new();
    let mut annotations = Annotations::default();
    for param in block.header.params {
        if param.kind == ParamKind::Positional {
            params.push(param.name.clone());
        }
        if let Some(annotation) = param.annotation {
            annotations.insert(param.name, annotation);
        }
    }
    if let Some(returns) = block.header.returns {
        annotations.insert(RETURN_KEY.to_string(), returns);
    }

    tracing::debug!(
        params = params.len(),
        statements = block.statements.len(),
        "extracted function"
    );
    Ok(Descriptor {
        name: block.header.name,
        params,
        annotations,
        body,
    })
}
