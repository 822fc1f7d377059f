//! Low-level scanner for Python source text.
//!
//! This crate knows just enough Python lexical structure to cut a function's
//! source into statements: string literals (including triple-quoted and
//! prefixed forms), comments, brackets, line continuations and the handful of
//! punctuation marks that matter for a `def` header. It does not classify
//! keywords or validate anything; the extractor in `plgen_source` gives the
//! tokens their meaning.
//!
//! # Layers
//!
//! ```text
//! &str ──► SourceBuffer (sentinel-terminated copy)
//!              │
//!              ▼
//!          Cursor ──► RawScanner ──► RawToken { tag, len }
//!                                        │
//!                                        ▼
//!                              tokenize() ──► Vec<Token { tag, span }>
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod span;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use tag::{RawTag, RawToken};

/// A raw token with its absolute position in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: RawTag,
    pub span: Span,
}

impl Token {
    /// Source text covered by this token.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

/// Scan the whole source into positioned tokens (the trailing `Eof` is not included).
///
/// The token lengths always add up to the source length: whitespace and
/// comments are tokens too, so callers decide what is trivia.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    let mut pos = 0u32;
    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        tokens.push(Token {
            tag: raw.tag,
            span: Span::new(pos, pos + raw.len),
        });
        pos += raw.len;
    }
    tokens
}
