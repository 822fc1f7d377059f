//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, decode escapes, or parse numeric values.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.
//!
//! String literals follow pre-3.12 rules: an f-string ends at the first
//! unescaped matching quote, even inside a replacement field.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\x0c' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'#' => self.comment(start),
            b'\\' => self.backslash(start),
            b'"' | b'\'' => self.string(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80..=0xFF => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.followed_by_equal(start, RawTag::Colon),
            b'@' => self.followed_by_equal(start, RawTag::At),
            b'=' => self.followed_by_equal(start, RawTag::Equal),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'/' => self.slash(start),
            b'<' | b'>' => self.angle(start),
            b'+' | b'%' | b'&' | b'|' | b'^' | b'!' | b'~' => self.compound_operator(start),
            1..=8 | 11 | 14..=31 | b'$' | b'?' | b'`' | 127 => self.single(start, RawTag::InvalidByte),
        }
    }

    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Newline)
    }

    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::Comment)
    }

    fn backslash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'\n' => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::LineContinuation)
            }
            b'\r' => {
                self.cursor.advance_n(2);
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                self.token(start, RawTag::LineContinuation)
            }
            _ => self.single(start, RawTag::StrayBackslash),
        }
    }

    // ─── Names & Literals ──────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current().to_ascii_lowercase();
        let second = self.cursor.peek().to_ascii_lowercase();
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.cursor.advance();
            } else if b >= 0x80 {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        let quote = self.cursor.current();
        if quote == b'"' || quote == b'\'' {
            let is_prefix = match self.cursor.pos() - start {
                1 => matches!(first, b'r' | b'u' | b'f' | b'b'),
                2 => matches!((first, second), (b'r', b'b' | b'f') | (b'b' | b'f', b'r')),
                _ => false,
            };
            if is_prefix {
                return self.string(start);
            }
        }
        self.token(start, RawTag::Ident)
    }

    /// Scan a string literal starting at the cursor's current quote.
    ///
    /// `start` may be earlier than the quote when a prefix was consumed.
    fn string(&mut self, start: u32) -> RawToken {
        let quote = self.cursor.current();
        if self.cursor.peek() == quote && self.cursor.peek2() == quote {
            self.cursor.advance_n(3);
            self.triple_quoted_body(start, quote)
        } else {
            self.cursor.advance();
            self.single_quoted_body(start, quote)
        }
    }

    fn single_quoted_body(&mut self, start: u32, quote: u8) -> RawToken {
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => return self.token(start, RawTag::UnterminatedString),
                b'\\' => {
                    if !self.skip_escape() {
                        return self.token(start, RawTag::UnterminatedString);
                    }
                }
                b'\n' | b'\r' => return self.token(start, RawTag::UnterminatedString),
                _ => {
                    self.cursor.advance();
                    return self.token(start, RawTag::String);
                }
            }
        }
    }

    fn triple_quoted_body(&mut self, start: u32, quote: u8) -> RawToken {
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => return self.token(start, RawTag::UnterminatedString),
                b'\\' => {
                    if !self.skip_escape() {
                        return self.token(start, RawTag::UnterminatedString);
                    }
                }
                b'\n' | b'\r' => self.cursor.advance(),
                _ => {
                    if self.cursor.peek() == quote && self.cursor.peek2() == quote {
                        self.cursor.advance_n(3);
                        return self.token(start, RawTag::String);
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    /// Skip a backslash and the character it escapes.
    ///
    /// Raw strings share this rule: `r"\""` does not end at the escaped quote.
    /// Returns `false` if the backslash is the last byte of the source.
    fn skip_escape(&mut self) -> bool {
        self.cursor.advance();
        if self.cursor.is_eof() {
            return false;
        }
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance_char();
        }
        true
    }

    fn number(&mut self, start: u32) -> RawToken {
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' {
                self.cursor.advance();
                let sign = self.cursor.current();
                if (b == b'e' || b == b'E') && (sign == b'+' || sign == b'-') {
                    self.cursor.advance();
                }
            } else {
                break;
            }
        }
        self.token(start, RawTag::Number)
    }

    // ─── Punctuation ───────────────────────────────────────────────

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.number(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::Dot);
        }
        self.single(start, RawTag::Dot)
    }

    /// `tag` alone, or a two-byte operator when followed by `=`.
    fn followed_by_equal(&mut self, start: u32, tag: RawTag) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::Operator);
        }
        self.single(start, tag)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'>' => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::Arrow)
            }
            _ => self.compound_operator(start),
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'*', b'=') => {
                self.cursor.advance_n(3);
                self.token(start, RawTag::Operator)
            }
            (b'*', _) => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::DoubleStar)
            }
            (b'=', _) => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::Operator)
            }
            _ => self.single(start, RawTag::Star),
        }
    }

    fn slash(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'/', b'=') => {
                self.cursor.advance_n(3);
                self.token(start, RawTag::Operator)
            }
            (b'/' | b'=', _) => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::Operator)
            }
            _ => self.single(start, RawTag::Slash),
        }
    }

    /// `<`, `>`, `<<`, `>>`, `<=`, `>=`, `<<=`, `>>=`, `<>`.
    fn angle(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();
        if self.cursor.current() == first || (first == b'<' && self.cursor.current() == b'>') {
            self.cursor.advance();
        }
        if self.cursor.current() == b'=' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Operator)
    }

    /// A one-byte operator, or its augmented-assignment form.
    fn compound_operator(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Operator)
    }
}
