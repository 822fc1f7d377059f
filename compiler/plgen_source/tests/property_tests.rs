//! Property tests for dedent and body extraction.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use plgen_source::text::{dedent, indent};
use plgen_source::{extract, PyObject};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("( {0,8})[a-z][a-z0-9_ ]{0,12}|").expect("valid regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..8).prop_map(|lines| lines.join("\n"))
}

fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("v_[a-z0-9]{0,6}").expect("valid regex")
}

proptest! {
    #[test]
    fn dedent_is_idempotent(text in text_strategy()) {
        let once = dedent(&text);
        prop_assert_eq!(dedent(&once), once);
    }

    #[test]
    fn dedent_undoes_indent(text in text_strategy(), width in 1usize..9) {
        let flat = dedent(&text);
        let prefix = " ".repeat(width);
        prop_assert_eq!(dedent(&indent(&flat, &prefix)), flat);
    }

    #[test]
    fn nesting_depth_does_not_change_the_body(
        names in prop::collection::vec(ident_strategy(), 1..5),
        depth in 0usize..4,
    ) {
        let body: Vec<String> = names.iter().map(|n| format!("{n} = 1")).collect();
        let flat = format!("def f():\n    {}\n", body.join("\n    "));
        let nested = indent(&flat, &"    ".repeat(depth));
        let descriptor = extract(&PyObject::parse(&nested).unwrap()).unwrap();
        prop_assert_eq!(descriptor.body, body.join("\n"));
    }
}
