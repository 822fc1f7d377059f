#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn positional_and_type_overrides() {
    let (positional, options) = parse_options(&args(&[
        "funcs.py",
        "pymax",
        "--arg-types=integer, bigint",
        "--returns=SETOF greeting",
    ]))
    .unwrap();
    assert_eq!(positional, ["funcs.py", "pymax"]);
    assert_eq!(
        options.routine_types(),
        RoutineTypes {
            args: vec![TypeSpec::from("integer"), TypeSpec::from("bigint")],
            returns: Some(TypeSpec::from("SETOF greeting")),
        }
    );
}

#[test]
fn empty_returns_means_no_clause() {
    let (_, options) = parse_options(&args(&["--returns="])).unwrap();
    assert_eq!(options.returns, Some(TypeSpec::from("")));
}

#[test]
fn track_lists_accumulate() {
    let (_, options) =
        parse_options(&args(&["--share=a,b", "--defer=c", "--share=d", "-o", "out.sql"])).unwrap();
    assert_eq!(options.share, ["a", "b", "d"]);
    assert_eq!(options.defer, ["c"]);
    assert_eq!(options.output, Some(PathBuf::from("out.sql")));
}

#[test]
fn config_flags() {
    let (_, options) = parse_options(&args(&[
        "--language=plpython3",
        "--namespace=SD",
        "--install-routine=load_shared",
    ]))
    .unwrap();
    assert_eq!(options.config.language, "plpython3");
    assert_eq!(options.config.namespace, "SD");
    assert_eq!(options.config.install_routine, "load_shared");
    assert_eq!(options.config.block_indent, 4);
}

#[test]
fn bad_arguments_are_reported() {
    assert_eq!(
        parse_options(&args(&["--frobnicate"])),
        Err("unknown option `--frobnicate`".to_string())
    );
    assert_eq!(
        parse_options(&args(&["x.py", "-o"])),
        Err("missing path after `-o`".to_string())
    );
}
