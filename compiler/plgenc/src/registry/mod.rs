//! The registry and its flush.

use std::collections::VecDeque;
use std::fmt;

use plgen_codegen::{build_routine, install_routine, install_script, CodegenConfig, RoutineTypes};
use plgen_source::{ObjectKind, PyObject, SourceError};
use plgen_types::TypeMap;

use crate::{Error, Store};

/// Handle returned for a deferred function.
///
/// The function now only exists as a database routine: the handle names it
/// and offers nothing to call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeferredRoutine {
    name: String,
}

impl DeferredRoutine {
    /// Name of the routine the flush will create.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DeferredRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What a flush sent to the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Shared objects installed, in registration order.
    pub installed: Vec<String>,
    /// Routines created, in registration order.
    pub routines: Vec<String>,
}

impl FlushReport {
    /// True when the flush touched the store not at all.
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty() && self.routines.is_empty()
    }
}

/// Ordered collections of shared objects and deferred functions.
///
/// Registration order is emission order. A flush empties both tracks.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    config: CodegenConfig,
    types: TypeMap,
    shared: Vec<PyObject>,
    routines: VecDeque<(PyObject, RoutineTypes)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodegenConfig, types: TypeMap) -> Self {
        Registry {
            config,
            types,
            ..Registry::default()
        }
    }

    /// Copy `obj` into the shared namespace on the next flush.
    ///
    /// The caller keeps its object. Registering the same name twice is
    /// allowed; the later assignment wins inside the database.
    pub fn share(&mut self, obj: &PyObject) -> Result<(), Error> {
        obj.source()?;
        tracing::debug!(name = obj.name(), kind = %obj.kind(), "shared");
        self.shared.push(obj.clone());
        Ok(())
    }

    /// Compile `func` into a standalone routine on the next flush, with
    /// types resolved from its annotations.
    pub fn defer(&mut self, func: PyObject) -> Result<DeferredRoutine, Error> {
        self.defer_with(func, RoutineTypes::annotated())
    }

    /// Like [`defer`](Self::defer) with explicit type overrides.
    pub fn defer_with(
        &mut self,
        func: PyObject,
        types: RoutineTypes,
    ) -> Result<DeferredRoutine, Error> {
        if func.kind() == ObjectKind::Class {
            return Err(SourceError::NotAFunction {
                name: func.name().to_string(),
            }
            .into());
        }
        func.source()?;
        let handle = DeferredRoutine {
            name: func.name().to_string(),
        };
        tracing::debug!(name = handle.name(), "deferred");
        self.routines.push_back((func, types));
        Ok(handle)
    }

    /// Names on the shared track, in order.
    pub fn shared_names(&self) -> impl Iterator<Item = &str> {
        self.shared.iter().map(PyObject::name)
    }

    /// Names on the deferred track, in order.
    pub fn deferred_names(&self) -> impl Iterator<Item = &str> {
        self.routines.iter().map(|(func, _)| func.name())
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.routines.is_empty()
    }

    /// Send everything registered to `store`.
    ///
    /// The shared track goes first: the installer routine is created,
    /// invoked once, and the track is cleared. Then each deferred function
    /// is built and created in order; a function leaves the registry only
    /// once the store has accepted its definition. On error the flush stops
    /// and a retry picks up exactly what is still registered.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(shared = self.shared.len(), routines = self.routines.len())
    )]
    pub fn flush<S: Store>(&mut self, store: &mut S) -> Result<FlushReport, Error> {
        let mut report = FlushReport::default();

        if !self.shared.is_empty() {
            let script = install_script(&self.shared, &self.config)?;
            let sql = install_routine(&script, &self.config);
            let installer = &self.config.install_routine;
            store
                .execute(&sql)
                .map_err(|err| Error::store(installer, err))?;
            store
                .invoke(installer)
                .map_err(|err| Error::store(installer, err))?;
            report.installed = self.shared.drain(..).map(|obj| obj.name().to_string()).collect();
            tracing::debug!(objects = report.installed.len(), "installed shared namespace");
        }

        while let Some((func, types)) = self.routines.front() {
            let sql = build_routine(func, types, &self.types, &self.config)?;
            store
                .execute(&sql)
                .map_err(|err| Error::store(func.name(), err))?;
            tracing::debug!(routine = func.name(), "created routine");
            if let Some((func, _)) = self.routines.pop_front() {
                report.routines.push(func.name().to_string());
            }
        }

        Ok(report)
    }
}
