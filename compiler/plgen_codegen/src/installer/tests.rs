#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use plgen_source::{ObjectKind, SourceFile, Unavailable};
use pretty_assertions::assert_eq;

use super::*;

const MODULE: &str = r#"
class Outer:
    def func(x="hello", y="world"):
        """ This is a docstring. """
        # This is a comment
        return f"{x}, {y}"

    class Class:
        pass
"#;

#[test]
fn script_keeps_comments_and_assigns_by_name() {
    let file = SourceFile::new("t.py", MODULE);
    let objects = [file.object("func").unwrap(), file.object("Class").unwrap()];
    let script = install_script(&objects, &CodegenConfig::default()).unwrap();
    assert_eq!(
        script,
        r#"def func(x="hello", y="world"):
    """ This is a docstring. """
    # This is a comment
    return f"{x}, {y}"


GD["func"] = func


class Class:
    pass


GD["Class"] = Class
"#
    );
}

#[test]
fn empty_script() {
    assert_eq!(install_script(&[], &CodegenConfig::default()).unwrap(), "");
}

#[test]
fn namespace_is_configurable() {
    let obj = PyObject::parse("def f():\n    return 1\n").unwrap();
    let config = CodegenConfig {
        namespace: "SD".to_string(),
        ..CodegenConfig::default()
    };
    let script = install_script(&[obj], &config).unwrap();
    assert!(script.ends_with("\n\nSD[\"f\"] = f\n"));
}

#[test]
fn same_name_is_assigned_twice_in_order() {
    let objects = [
        PyObject::parse("def f():\n    return 1\n").unwrap(),
        PyObject::parse("def f():\n    return 2\n").unwrap(),
    ];
    let script = install_script(&objects, &CodegenConfig::default()).unwrap();
    assert_eq!(
        script,
        "def f():
    return 1


GD[\"f\"] = f


def f():
    return 2


GD[\"f\"] = f
"
    );
    let first = script.find("return 1").unwrap();
    let second = script.find("return 2").unwrap();
    assert!(first < second);
}

#[test]
fn synthesized_object_fails_the_script() {
    let objects = [
        PyObject::parse("def f():\n    return 1\n").unwrap(),
        PyObject::synthesized(ObjectKind::Class, "Dyn"),
    ];
    assert_eq!(
        install_script(&objects, &CodegenConfig::default()),
        Err(SourceError::SourceUnavailable {
            name: "Dyn".to_string(),
            reason: Unavailable::Synthesized,
        })
    );
}

#[test]
fn install_routine_wraps_the_script() {
    let sql = install_routine("GD[\"f\"] = f\n", &CodegenConfig::default());
    assert_eq!(
        sql,
        "CREATE OR REPLACE FUNCTION _add_to_gd()\nRETURNS TEXT AS $$\nGD[\"f\"] = f\n\n$$ LANGUAGE plpython3u;\n"
    );
}

#[test]
fn invoke_by_name() {
    assert_eq!(invoke_statement("_add_to_gd"), "SELECT _add_to_gd()");
}
