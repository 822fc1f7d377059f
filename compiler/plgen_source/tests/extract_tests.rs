//! End-to-end extraction from module files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use plgen_source::{extract, ObjectKind, PyObject, SourceError, SourceFile, Unavailable};
use pretty_assertions::assert_eq;

const MODULE: &str = r#"import datetime as dt
from decimal import Decimal


def plpy_func(fn):
    return fn


@plpy_func
def pymax(a: int, b: int) -> int:
    if (a is None) or (b is None):
        return None
    elif a > b:
        return a
    return b


class Rates:
    """Exchange rates."""

    def __init__(self):
        self.cache = {}

    def convert(self, amount: Decimal, on: dt.date) -> Decimal:
        """Convert at the rate for `on`."""
        rate = self.cache.get(on, 1)  # default to parity
        # multiply

        return amount * rate
"#;

fn module_on_disk() -> (tempfile::TempDir, SourceFile) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("shared.py");
    fs::write(&path, MODULE).expect("write module");
    let file = SourceFile::load(&path).expect("load module");
    (dir, file)
}

#[test]
fn loads_and_lists_top_level_objects() {
    let (_dir, file) = module_on_disk();
    let objects = file.objects().unwrap();
    let listed: Vec<(&str, ObjectKind)> = objects.iter().map(|o| (o.name(), o.kind())).collect();
    assert_eq!(
        listed,
        vec![
            ("plpy_func", ObjectKind::Function),
            ("pymax", ObjectKind::Function),
            ("Rates", ObjectKind::Class),
        ]
    );
}

#[test]
fn if_elif_chain_body() {
    let (_dir, file) = module_on_disk();
    let d = extract(&file.object("pymax").unwrap()).unwrap();
    assert_eq!(d.params, vec!["a", "b"]);
    assert_eq!(
        d.body,
        "if (a is None) or (b is None):\n    return None\nelif a > b:\n    return a\nreturn b"
    );
}

#[test]
fn method_docstring_survives_and_comments_vanish() {
    let (_dir, file) = module_on_disk();
    let d = extract(&file.object("convert").unwrap()).unwrap();
    assert_eq!(d.params, vec!["self", "amount", "on"]);
    assert_eq!(d.annotations.get("on"), Some("dt.date"));
    assert_eq!(
        d.body,
        "\"\"\"Convert at the rate for `on`.\"\"\"\nrate = self.cache.get(on, 1)\nreturn amount * rate"
    );
    assert!(!d.body.contains("parity"));
    assert!(!d.body.contains("multiply"));
}

#[test]
fn aliasing_never_changes_the_name() {
    let (_dir, file) = module_on_disk();
    let original = file.object("pymax").unwrap();
    let renamed_binding = original.clone();
    assert_eq!(renamed_binding.name(), "pymax");
    assert_eq!(extract(&renamed_binding).unwrap().name, "pymax");
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = SourceFile::load(dir.path().join("gone.py")).unwrap_err();
    assert!(matches!(
        err,
        SourceError::SourceUnavailable {
            reason: Unavailable::Io { .. },
            ..
        }
    ));
}

#[test]
fn unterminated_string_is_source_unavailable() {
    let err = PyObject::parse("def f():\n    return 'oops\n").unwrap_err();
    assert!(matches!(
        err,
        SourceError::SourceUnavailable {
            reason: Unavailable::UnterminatedString { .. },
            ..
        }
    ));
}
