//! Indentation helpers with `textwrap` semantics.
//!
//! Generated bodies must match what Python's `textwrap.dedent` and
//! `textwrap.indent` produce byte for byte, so these follow the stdlib
//! rules rather than a "nicer" normalization. [`dedent_statement`] is the
//! one helper that needs tokens, to keep string contents intact.

use plgen_lexer_core::{tokenize, RawTag, Span};

/// Remove the longest common leading whitespace from every line.
///
/// Lines made only of spaces and tabs are emptied (their line break is
/// kept) and do not take part in computing the margin. Tabs and spaces are
/// not interchangeable: `"\t"` and `"    "` share no margin.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        let content = line.trim_end_matches('\r');
        if is_blank(content) {
            continue;
        }
        let indent = leading_whitespace(content);
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin_len = margin.map_or(0, str::len);

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_blank(line.trim_end_matches('\r')) {
            if line.ends_with('\r') {
                out.push('\r');
            }
            continue;
        }
        out.push_str(&line[margin_len..]);
    }
    out
}

/// Prefix every line that contains non-whitespace with `prefix`.
///
/// Whitespace-only lines are copied unchanged.
pub fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len() * 8);
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}

/// Shift one body statement left by `body_indent` columns.
///
/// `body_indent` is the column of the body's statements in the dedented
/// function source. The statement's first line starts at its first token, so
/// every continuation line that starts with `body_indent` columns of
/// indentation loses them: nested blocks, `elif`/`else`/`except`/`finally`
/// clauses and decorated definitions keep their place relative to the first
/// line. Shallower lines (bracket continuations) and lines that begin inside
/// a multi-line string literal are left alone.
pub fn dedent_statement(segment: &str, body_indent: usize) -> String {
    if body_indent == 0 {
        return segment.to_string();
    }
    let strings: Vec<Span> = tokenize(segment)
        .into_iter()
        .filter(|t| t.tag == RawTag::String)
        .map(|t| t.span)
        .collect();
    let in_string = |offset: usize| {
        strings
            .iter()
            .any(|s| (s.start as usize) < offset && offset < s.end as usize)
    };

    let mut out = String::with_capacity(segment.len());
    let mut offset = 0;
    for (i, line) in segment.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let shifted = i > 0
            && !in_string(offset)
            && line.len() >= body_indent
            && line.as_bytes()[..body_indent]
                .iter()
                .all(|&b| b == b' ' || b == b'\t');
        out.push_str(if shifted { &line[body_indent..] } else { line });
        offset += line.len() + 1;
    }
    out
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .bytes()
        .position(|b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests;
