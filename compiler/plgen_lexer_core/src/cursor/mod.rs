//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length. A null byte before that point is an
//! interior null, which the scanner reports as its own tag.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when we need more needles
/// than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is just a copy.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after `source_len` are `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the padding guarantees valid reads past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Used to skip comment bodies. Never moves into the sentinel padding.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes are the closing `quote`, `\`, `\n` and `\r`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past horizontal whitespace (space, tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t' || b == b'\x0c');
    }
}

#[cfg(test)]
mod tests;
