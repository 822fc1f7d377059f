use super::*;
use pretty_assertions::assert_eq;

fn lines(source: &str) -> Vec<LogicalLine> {
    logical_lines(source).unwrap_or_default()
}

fn line_texts(source: &str) -> Vec<(u32, String)> {
    lines(source)
        .iter()
        .map(|l| (l.indent, l.span().slice(source).to_string()))
        .collect()
}

#[test]
fn simple_lines_with_indent() {
    let source = "def f():\n    x = 1\n    return x\n";
    assert_eq!(
        line_texts(source),
        vec![
            (0, "def f():".to_string()),
            (4, "x = 1".to_string()),
            (4, "return x".to_string()),
        ]
    );
}

#[test]
fn comments_and_blank_lines_are_not_lines() {
    let source = "a = 1  # note\n\n    # lonely comment\nb = 2\n";
    assert_eq!(
        line_texts(source),
        vec![(0, "a = 1".to_string()), (0, "b = 2".to_string())]
    );
}

#[test]
fn brackets_join_physical_lines() {
    let source = "x = call(\n    1,\n    2,\n)\ny";
    assert_eq!(
        line_texts(source),
        vec![(0, "x = call(\n    1,\n    2,\n)".to_string()), (0, "y".to_string())]
    );
}

#[test]
fn backslash_continuation_joins_lines() {
    let source = "x = 1 + \\\n    2\n";
    let found = lines(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].span().slice(source), "x = 1 + \\\n    2");
}

#[test]
fn triple_quoted_string_spans_lines() {
    let source = "    \"\"\"Doc.\n\n    More.\n    \"\"\"\n    return 1\n";
    assert_eq!(
        line_texts(source),
        vec![
            (4, "\"\"\"Doc.\n\n    More.\n    \"\"\"".to_string()),
            (4, "return 1".to_string()),
        ]
    );
}

#[test]
fn line_start_points_at_physical_line() {
    let source = "a\n    b\n";
    let found = lines(source);
    assert_eq!(found[1].line_start, 2);
    assert_eq!(found[1].indent, 4);
}

#[test]
fn unterminated_string_is_reported() {
    assert_eq!(
        logical_lines("x = 'oops\n"),
        Err(Unavailable::UnterminatedString { offset: 4 })
    );
}

#[test]
fn split_top_level_ignores_nested_separators() {
    let source = "a, f(b, c), [d, e]";
    let tokens = lines(source).remove(0).tokens;
    let parts: Vec<String> = split_top_level(&tokens, RawTag::Comma)
        .iter()
        .filter_map(|part| tokens_text(part, source))
        .collect();
    assert_eq!(parts, vec!["a", "f(b, c)", "[d, e]"]);
}

#[test]
fn matching_close_skips_nested() {
    let source = "(a, (b), c) d";
    let tokens = lines(source).remove(0).tokens;
    assert_eq!(matching_close(&tokens, 0), Some(8));
}

#[test]
fn tokens_text_collapses_whitespace() {
    let source = "Dict[str,\n     int]";
    let tokens = lines(source).remove(0).tokens;
    assert_eq!(tokens_text(&tokens, source).as_deref(), Some("Dict[str, int]"));
}
