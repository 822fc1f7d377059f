//! Routine Definition Builder
//!
//! Compiles one Python function into a PL/Python `CREATE OR REPLACE
//! FUNCTION` statement:
//!
//! ```text
//! CREATE OR REPLACE FUNCTION name (a INTEGER, b INTEGER)
//!   RETURNS INTEGER
//! AS $$
//!     <body>
//! $$ LANGUAGE plpython3u;
//! ```
//!
//! A routine with no parameters gets `name()` with no space, and one with
//! no return type gets ` AS $$` on the argument line instead of the
//! `RETURNS` line.

use plgen_source::{extract, Descriptor, PyObject};
use plgen_types::{TypeMap, TypeSpec};

use crate::{CodegenConfig, CodegenError, Emitter, Slot, StringEmitter};

/// Caller-supplied type overrides for one routine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutineTypes {
    /// One type per positional parameter, or empty to use annotations.
    pub args: Vec<TypeSpec>,
    /// `None` resolves the return annotation. `Some` is used as given; an
    /// override that renders empty means no `RETURNS` clause.
    pub returns: Option<TypeSpec>,
}

impl RoutineTypes {
    /// Resolve everything from annotations.
    pub fn annotated() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeSpec>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_returns(mut self, returns: impl Into<TypeSpec>) -> Self {
        self.returns = Some(returns.into());
        self
    }
}

/// Resolved parameter and return types of a routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// `(parameter, type name)` pairs in declaration order.
    pub params: Vec<(String, String)>,
    /// Empty when the routine has no return clause.
    pub returns: String,
}

/// Resolve the parameter and return types of `descriptor`.
pub fn resolve_signature(
    descriptor: &Descriptor,
    types: &RoutineTypes,
    map: &TypeMap,
) -> Result<Signature, CodegenError> {
    let routine = &descriptor.name;

    let arg_types: Vec<String> = if types.args.is_empty() {
        descriptor
            .params
            .iter()
            .map(|param| {
                let slot = Slot::Param(param.clone());
                let annotation = descriptor.annotations.get(param).ok_or_else(|| {
                    CodegenError::MissingAnnotation {
                        routine: routine.clone(),
                        slot: slot.clone(),
                    }
                })?;
                map.resolve(annotation)
                    .map_err(|_| unresolved(routine, slot, annotation))
            })
            .collect::<Result<_, _>>()?
    } else if types.args.len() == descriptor.params.len() {
        types.args.iter().map(TypeSpec::render).collect()
    } else {
        return Err(CodegenError::OverrideArity {
            routine: routine.clone(),
            expected: descriptor.params.len(),
            found: types.args.len(),
        });
    };

    let returns = match &types.returns {
        Some(spec) => spec.render(),
        None => {
            let annotation = descriptor.annotations.returns().ok_or_else(|| {
                CodegenError::MissingAnnotation {
                    routine: routine.clone(),
                    slot: Slot::Return,
                }
            })?;
            map.resolve_return(annotation)
                .map_err(|_| unresolved(routine, Slot::Return, annotation))?
        }
    };

    Ok(Signature {
        params: descriptor.params.iter().cloned().zip(arg_types).collect(),
        returns,
    })
}

fn unresolved(routine: &str, slot: Slot, annotation: &str) -> CodegenError {
    CodegenError::UnresolvedType {
        routine: routine.to_string(),
        slot,
        annotation: annotation.to_string(),
    }
}

/// Build the routine definition for an extracted function.
#[tracing::instrument(level = "debug", skip_all, fields(routine = %descriptor.name))]
pub fn build(
    descriptor: &Descriptor,
    types: &RoutineTypes,
    map: &TypeMap,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    let signature = resolve_signature(descriptor, types, map)?;

    let mut out = StringEmitter::with_capacity(descriptor.body.len() + 128);
    out.emit("CREATE OR REPLACE FUNCTION ");
    out.emit(&descriptor.name);
    if !signature.params.is_empty() {
        out.emit_space();
    }
    out.emit("(");
    for (i, (param, ty)) in signature.params.iter().enumerate() {
        if i > 0 {
            out.emit(", ");
        }
        out.emit(param);
        out.emit_space();
        out.emit(ty);
    }
    out.emit(")");

    if signature.returns.is_empty() {
        out.emit_space();
    } else {
        out.emit_newline();
        out.emit_indent(config.clause_indent);
        out.emit("RETURNS ");
        out.emit(&signature.returns);
        out.emit_newline();
    }
    out.emit("AS $$");
    out.emit_newline();
    out.emit_block(&descriptor.body, config.block_indent);
    out.emit_newline();
    out.emit("$$ LANGUAGE ");
    out.emit(&config.language);
    out.emit(";");
    out.emit_newline();

    tracing::debug!(
        params = signature.params.len(),
        returns = %signature.returns,
        "built routine definition"
    );
    Ok(out.output())
}

/// Extract `obj` and build its routine definition.
pub fn build_routine(
    obj: &PyObject,
    types: &RoutineTypes,
    map: &TypeMap,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    let descriptor = extract(obj)?;
    build(&descriptor, types, map, config)
}
