use crate::SourceBuffer;

#[test]
fn current_and_peek() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_past_end_reads_padding() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn eof_detection() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_whitespace_stops_at_text() {
    let buf = SourceBuffer::new(" \t\x0c x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("# comment\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_stops_before_carriage_return() {
    let buf = SourceBuffer::new("# comment\r\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let buf = SourceBuffer::new("# trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("hello' rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\'');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_string_delim_finds_backslash_first() {
    let buf = SourceBuffer::new("a\\\"b\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_ignores_other_quote() {
    let buf = SourceBuffer::new("it's\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_to_string_delim_eof() {
    let buf = SourceBuffer::new("never closed");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_handles_multibyte() {
    let buf = SourceBuffer::new("\u{e9}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
}
