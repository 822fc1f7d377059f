//! Raw token tags produced by the scanner.
//!
//! Tags are grouped by semantic range in their `u8` discriminant:
//! names and literals first, then punctuation, trivia, errors, and `Eof`
//! pinned at 255.

/// Kind of a raw token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Names & Literals: 0-15 ===
    /// Identifier or keyword (keywords are not distinguished here).
    Ident = 0,
    /// Numeric literal of any base, including imaginary suffixes.
    Number = 1,
    /// Complete string literal, prefix and quotes included.
    String = 2,

    // === Punctuation: 32-63 ===
    LeftParen = 32,
    RightParen = 33,
    LeftBracket = 34,
    RightBracket = 35,
    LeftBrace = 36,
    RightBrace = 37,
    /// `:` (but not `:=`).
    Colon = 38,
    Comma = 39,
    Semicolon = 40,
    /// `@` (decorator or matrix multiply).
    At = 41,
    /// `=` (assignment or default value; not `==`).
    Equal = 42,
    /// `->`
    Arrow = 43,
    /// `*` alone.
    Star = 44,
    /// `**` alone.
    DoubleStar = 45,
    /// `/` alone (positional-only marker or division).
    Slash = 46,
    /// `.` or `...`
    Dot = 47,
    /// Any other operator (`==`, `+=`, `:=`, `<<`, ...).
    Operator = 48,

    // === Trivia: 112-115 ===
    Whitespace = 112,
    /// `\n`, `\r\n` or lone `\r`.
    Newline = 113,
    /// `# ...` up to (not including) the line break.
    Comment = 114,
    /// Backslash followed by a line break.
    LineContinuation = 115,

    // === Errors: 240-243 ===
    /// Control byte with no meaning in Python source.
    InvalidByte = 240,
    /// String literal with no closing quote before the end of its line (or file).
    UnterminatedString = 241,
    /// Backslash not followed by a line break.
    StrayBackslash = 242,
    /// `0x00` inside the source content.
    InteriorNull = 243,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for tokens that carry no syntax of their own.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::Comment | RawTag::LineContinuation
        )
    }
}

/// A scanned token: its tag and byte length.
///
/// Positions are implicit; the caller accumulates lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
