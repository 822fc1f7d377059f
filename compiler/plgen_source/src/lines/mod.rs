//! Logical line grouping.
//!
//! A logical line is what Python's tokenizer ends with a `NEWLINE` token:
//! line breaks inside brackets or after a backslash continuation do not end
//! it, and comment-only or blank lines never form one.

use plgen_lexer_core::{tokenize, RawTag, Span, Token};

use crate::Unavailable;

/// One logical line: its significant tokens and where it sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LogicalLine {
    /// Column (in bytes) of the first token on its physical line.
    pub indent: u32,
    /// Byte offset where the first token's physical line begins.
    pub line_start: u32,
    /// Tokens with trivia (whitespace, comments, breaks) removed. Never empty.
    pub tokens: Vec<Token>,
}

impl LogicalLine {
    /// From the first token's start to the last token's end.
    ///
    /// Trailing comments are outside this span.
    pub fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::new(self.line_start, self.line_start),
        }
    }

    /// The line's first token if it is the identifier `word`.
    pub fn starts_with_word(&self, source: &str, word: &str) -> bool {
        self.tokens
            .first()
            .is_some_and(|t| t.tag == RawTag::Ident && t.text(source) == word)
    }

    pub fn starts_with(&self, tag: RawTag) -> bool {
        self.tokens.first().is_some_and(|t| t.tag == tag)
    }
}

/// Group the tokens of `source` into logical lines.
///
/// Fails only on an unterminated string literal, which leaves the rest of
/// the text impossible to segment.
pub(crate) fn logical_lines(source: &str) -> Result<Vec<LogicalLine>, Unavailable> {
    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut depth: u32 = 0;
    let mut physical_start: u32 = 0;
    let mut indent = 0;
    let mut line_start = 0;

    for token in tokenize(source) {
        match token.tag {
            RawTag::Newline => {
                if depth == 0 && !current.is_empty() {
                    lines.push(LogicalLine {
                        indent,
                        line_start,
                        tokens: std::mem::take(&mut current),
                    });
                }
                physical_start = token.span.end;
            }
            RawTag::LineContinuation => physical_start = token.span.end,
            tag if tag.is_trivia() => {}
            RawTag::UnterminatedString => {
                return Err(Unavailable::UnterminatedString {
                    offset: token.span.start,
                });
            }
            tag => {
                if current.is_empty() {
                    indent = token.span.start - physical_start;
                    line_start = physical_start;
                }
                match tag {
                    RawTag::LeftParen | RawTag::LeftBracket | RawTag::LeftBrace => depth += 1,
                    RawTag::RightParen | RawTag::RightBracket | RawTag::RightBrace => {
                        depth = depth.saturating_sub(1);
                    }
                    _ => {}
                }
                current.push(token);
            }
        }
    }
    if !current.is_empty() {
        lines.push(LogicalLine {
            indent,
            line_start,
            tokens: current,
        });
    }
    tracing::trace!(count = lines.len(), "grouped logical lines");
    Ok(lines)
}

/// Index of the first token with `tag` outside any brackets.
pub(crate) fn find_top_level(tokens: &[Token], tag: RawTag) -> Option<usize> {
    let mut depth = 0u32;
    for (i, token) in tokens.iter().enumerate() {
        match token.tag {
            RawTag::LeftParen | RawTag::LeftBracket | RawTag::LeftBrace => depth += 1,
            RawTag::RightParen | RawTag::RightBracket | RawTag::RightBrace => {
                depth = depth.saturating_sub(1);
            }
            t if t == tag && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split `tokens` on `separator` outside any brackets. Empty parts are dropped.
pub(crate) fn split_top_level(tokens: &[Token], separator: RawTag) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut rest = tokens;
    while let Some(at) = find_top_level(rest, separator) {
        if at > 0 {
            parts.push(&rest[..at]);
        }
        rest = &rest[at + 1..];
    }
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts
}

/// Index of the bracket closing the one at `open`, if balanced.
pub(crate) fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0u32;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.tag {
            RawTag::LeftParen | RawTag::LeftBracket | RawTag::LeftBrace => depth += 1,
            RawTag::RightParen | RawTag::RightBracket | RawTag::RightBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Source text covering `tokens`, whitespace runs collapsed to one space.
pub(crate) fn tokens_text(tokens: &[Token], source: &str) -> Option<String> {
    let (first, last) = (tokens.first()?, tokens.last()?);
    let raw = first.span.merge(last.span).slice(source);
    Some(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests;
