use super::*;
use pretty_assertions::assert_eq;

#[test]
fn dedent_removes_common_margin() {
    let text = "    def f():\n        return 1\n";
    assert_eq!(dedent(text), "def f():\n    return 1\n");
}

#[test]
fn dedent_keeps_relative_indentation() {
    let text = "        if x:\n            y\n        z";
    assert_eq!(dedent(text), "if x:\n    y\nz");
}

#[test]
fn dedent_ignores_and_empties_blank_lines() {
    let text = "    a\n  \n\n    b\n";
    assert_eq!(dedent(text), "a\n\n\nb\n");
}

#[test]
fn dedent_tabs_and_spaces_do_not_mix() {
    let text = "\ta\n    b\n";
    assert_eq!(dedent(text), text);
}

#[test]
fn dedent_without_margin_is_identity() {
    let text = "def f():\n    pass\n";
    assert_eq!(dedent(text), text);
}

#[test]
fn dedent_empty() {
    assert_eq!(dedent(""), "");
}

#[test]
fn indent_skips_blank_lines() {
    let text = "a\n\n  \nb";
    assert_eq!(indent(text, "    "), "    a\n\n  \n    b");
}

#[test]
fn indent_keeps_trailing_newline() {
    assert_eq!(indent("x\n", "  "), "  x\n");
}

#[test]
fn dedent_statement_one_level() {
    let segment = "if a > b:\n        return a";
    assert_eq!(dedent_statement(segment, 4), "if a > b:\n    return a");
}

#[test]
fn dedent_statement_keeps_deeper_relative() {
    let segment = "for x in y:\n        if x:\n            yield x";
    assert_eq!(
        dedent_statement(segment, 4),
        "for x in y:\n    if x:\n        yield x"
    );
}

#[test]
fn dedent_statement_aligns_clauses_with_their_opener() {
    let segment = "if a:\n        x()\n    elif b:\n        y()\n    else:\n        z()";
    assert_eq!(
        dedent_statement(segment, 4),
        "if a:\n    x()\nelif b:\n    y()\nelse:\n    z()"
    );
}

#[test]
fn dedent_statement_aligns_decorated_def() {
    let segment = "@cache\n    def g():\n        return 1";
    assert_eq!(
        dedent_statement(segment, 4),
        "@cache\ndef g():\n    return 1"
    );
}

#[test]
fn dedent_statement_leaves_shallow_continuations() {
    let segment = "x = [\n  1,\n  2]";
    assert_eq!(dedent_statement(segment, 4), segment);
}

#[test]
fn dedent_statement_leaves_string_contents() {
    let segment = "\"\"\" Doc.\n    more text\n        indented\n    \"\"\"";
    assert_eq!(dedent_statement(segment, 4), segment);
}

#[test]
fn dedent_statement_shifts_code_after_a_string() {
    let segment = "if a:\n        s = \"\"\"one\n  two\"\"\"\n    else:\n        s = ''";
    assert_eq!(
        dedent_statement(segment, 4),
        "if a:\n    s = \"\"\"one\n  two\"\"\"\nelse:\n    s = ''"
    );
}

#[test]
fn dedent_statement_zero_width_is_identity() {
    let segment = "x = [\n        1]";
    assert_eq!(dedent_statement(segment, 0), segment);
}
