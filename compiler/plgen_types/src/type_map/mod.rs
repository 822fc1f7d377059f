//! Annotation lookup table.

use rustc_hash::FxHashMap;

use crate::{ColumnType, NativeType, TypeError};

/// Lookup table from annotation keys to PostgreSQL types.
///
/// Keys are bare type names (`int`, `Decimal`, `date`). Module-qualified
/// annotations such as `datetime.date` or `dt.date` fall back to their last
/// dotted segment when the full text is not a key itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMap {
    entries: FxHashMap<String, ColumnType>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut entries = FxHashMap::default();
        for native in NativeType::ALL {
            entries.insert(native.short_name().to_string(), native.column_type());
        }
        entries.insert("NoneType".to_string(), ColumnType::Null);
        TypeMap { entries }
    }
}

impl TypeMap {
    /// Map `key` to `column`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, column: ColumnType) -> Option<ColumnType> {
        self.entries.insert(key.into(), column)
    }

    /// The column type for an annotation, if mapped.
    pub fn lookup(&self, annotation: &str) -> Option<&ColumnType> {
        let key = normalize(annotation);
        if let Some(column) = self.entries.get(&key) {
            return Some(column);
        }
        let (_, last) = key.rsplit_once('.')?;
        tracing::trace!(annotation, fallback = last, "qualified annotation");
        self.entries.get(last)
    }

    /// Resolve a parameter annotation to a type name.
    pub fn resolve(&self, annotation: &str) -> Result<String, TypeError> {
        self.lookup(annotation)
            .map(ToString::to_string)
            .ok_or_else(|| TypeError::Unresolved {
                annotation: annotation.to_string(),
            })
    }

    /// Resolve a return annotation; the absent-value marker yields an empty
    /// name, meaning "no return clause".
    pub fn resolve_return(&self, annotation: &str) -> Result<String, TypeError> {
        if NativeType::is_none_marker(&normalize(annotation)) {
            return Ok(String::new());
        }
        self.resolve(annotation)
    }
}

/// Strip string-annotation quotes and all whitespace.
fn normalize(annotation: &str) -> String {
    let trimmed = annotation.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed);
    unquoted.split_whitespace().collect()
}

#[cfg(test)]
mod tests;
