//! Block extent and top-level body statements.
//!
//! A block is a `def` or `class` header, the decorator lines directly above
//! it, and every following logical line indented deeper than the header.
//! Its body is cut into top-level statements whose spans stop at their last
//! significant token, so trailing comments fall between statements and
//! disappear when the spans are joined.

use plgen_lexer_core::{RawTag, Span, Token};

use crate::header::{parse_header, Header};
use crate::lines::{split_top_level, LogicalLine};
use crate::Unavailable;

/// Keywords that continue the compound statement above them at the same indent.
const CLAUSE_KEYWORDS: [&str; 4] = ["elif", "else", "except", "finally"];

/// Keywords whose line is a compound statement header; never split on `;`.
const COMPOUND_KEYWORDS: [&str; 12] = [
    "if", "elif", "else", "for", "while", "with", "try", "except", "finally", "def", "class",
    "async",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Block {
    pub header: Header,
    /// Spans of the top-level body statements, in order.
    pub statements: Vec<Span>,
    /// Column of the body statements; 0 for a body on the header line.
    pub body_indent: u32,
    /// Whole physical lines from the first decorator through the last body
    /// line, including that line's break and trailing comment.
    pub extent: Span,
}

/// Index of the first header line accepted by `accept`.
pub(crate) fn find_header(
    lines: &[LogicalLine],
    source: &str,
    accept: impl Fn(&Header) -> bool,
) -> Option<usize> {
    lines
        .iter()
        .position(|line| parse_header(line, source).is_some_and(|h| accept(&h)))
}

/// Cut the block whose header is `lines[header_idx]`.
pub(crate) fn block_at(
    lines: &[LogicalLine],
    header_idx: usize,
    source: &str,
) -> Result<Block, Unavailable> {
    let header_line = &lines[header_idx];
    let header = parse_header(header_line, source).ok_or(Unavailable::NoHeader)?;

    let mut first_line = header_idx;
    while first_line > 0
        && lines[first_line - 1].starts_with(RawTag::At)
        && lines[first_line - 1].indent == header_line.indent
    {
        first_line -= 1;
    }

    let (statements, body_indent, last) = if header.body_start < header_line.tokens.len() {
        let inline = simple_statements(&header_line.tokens[header.body_start..]);
        (inline, 0, header_line.span())
    } else {
        let body: Vec<&LogicalLine> = lines[header_idx + 1..]
            .iter()
            .take_while(|line| line.indent > header_line.indent)
            .collect();
        let (Some(first), Some(last)) = (body.first(), body.last()) else {
            return Err(Unavailable::EmptyBody);
        };
        let indent = first.indent;
        (group_statements(&body, indent, source), indent, last.span())
    };

    let end = source[last.end as usize..]
        .find('\n')
        .map_or(source.len(), |offset| last.end as usize + offset + 1);
    let extent = Span::new(
        lines[first_line].line_start,
        u32::try_from(end).unwrap_or(u32::MAX),
    );

    tracing::trace!(
        name = %header.name,
        statements = statements.len(),
        body_indent,
        "cut block"
    );
    Ok(Block {
        header,
        statements,
        body_indent,
        extent,
    })
}

/// Group body lines (all at or deeper than `indent`) into top-level statements.
fn group_statements(body: &[&LogicalLine], indent: u32, source: &str) -> Vec<Span> {
    let mut statements = Vec::new();
    let mut current: Option<Span> = None;
    let mut after_decorator = false;

    for line in body {
        let continues = line.indent != indent
            || after_decorator
            || CLAUSE_KEYWORDS
                .iter()
                .any(|kw| line.starts_with_word(source, kw));
        after_decorator = line.indent == indent && line.starts_with(RawTag::At);

        match current {
            Some(span) if continues => current = Some(span.merge(line.span())),
            _ => {
                statements.extend(current.take());
                if after_decorator || is_compound(line, source) {
                    current = Some(line.span());
                } else {
                    let mut parts = simple_statements(&line.tokens);
                    current = parts.pop();
                    statements.extend(parts);
                }
            }
        }
    }
    statements.extend(current);
    statements
}

fn is_compound(line: &LogicalLine, source: &str) -> bool {
    COMPOUND_KEYWORDS
        .iter()
        .any(|kw| line.starts_with_word(source, kw))
}

/// One span per `;`-separated simple statement.
fn simple_statements(tokens: &[Token]) -> Vec<Span> {
    split_top_level(tokens, RawTag::Semicolon)
        .into_iter()
        .filter_map(|part| Some(part.first()?.span.merge(part.last()?.span)))
        .collect()
}
