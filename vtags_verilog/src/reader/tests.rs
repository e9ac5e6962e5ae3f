use super::*;
use vtags_basics::source::{SourceChunk, SourceManager};

fn chunk<'a>(sm: &'a SourceManager, text: &str) -> &'a SourceChunk {
    sm.add_file("meh.sv", text)
}

fn drain(reader: &mut Reader) -> String {
    let mut res = String::new();
    while let Some(c) = reader.next() {
        res.push(c);
    }
    res
}

#[test]
fn test_line_comment() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "a// comment\nb"));
    // The comment is consumed; the scanner sees the newline.
    assert_eq!(drain(&mut reader), "a\nb");
}

#[test]
fn test_block_comment() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "a/* long\ncomment */b"));
    assert_eq!(drain(&mut reader), "a b");
}

#[test]
fn test_string_literal() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, r#"a"some // string"b"#));
    assert_eq!(drain(&mut reader), "a@b");
}

#[test]
fn test_string_unclosed() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "a\"runs off"));
    assert_eq!(drain(&mut reader), "a@");
}

#[test]
fn test_plain_slash() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "a/b"));
    assert_eq!(drain(&mut reader), "a/b");
}

#[test]
fn test_unget() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "ab"));
    let c = reader.next();
    assert_eq!(c, Some('a'));
    reader.unget(c);
    assert_eq!(reader.next(), Some('a'));
    assert_eq!(reader.next(), Some('b'));
    // Ungetting end of input is allowed too.
    let c = reader.next();
    assert_eq!(c, None);
    reader.unget(c);
    assert_eq!(reader.next(), None);
}

#[test]
#[should_panic]
fn test_double_unget() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "ab"));
    let c = reader.next();
    reader.unget(c);
    reader.unget(c);
}

#[test]
fn test_skip_past_match() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "(a(b)c)d"));
    assert_eq!(reader.next(), Some('('));
    assert_eq!(reader.skip_past_match('(', ')'), Some('d'));
}

#[test]
fn test_skip_dimension() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "[3:0] [WIDTH-1:0] x"));
    let c = reader.next();
    assert_eq!(reader.skip_dimension(c), Some('x'));
}

#[test]
fn test_skip_expression() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "a + f(b, c) - {d, e}, rest"));
    let c = reader.next();
    // The commas inside the call and the concatenation do not count.
    assert_eq!(reader.skip_expression(c), Some(','));
    assert_eq!(reader.next_nonwhite(), Some('r'));
}

#[test]
fn test_skip_to_newline_continuation() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "one \\\ntwo\nthree"));
    reader.skip_to_newline();
    assert_eq!(reader.next(), Some('t'));
    assert_eq!(reader.next(), Some('h'));
}

#[test]
fn test_skip_delay() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "#10 x"));
    let c = reader.next();
    assert_eq!(reader.skip_delay(c), Some('x'));

    let mut reader = Reader::new(chunk(&sm, "#(T1, T2) y"));
    let c = reader.next();
    assert_eq!(reader.skip_delay(c), Some('y'));

    // The ## shorthand overshoots all the way to the semicolon.
    let mut reader = Reader::new(chunk(&sm, "##1 b[*2:3];"));
    let c = reader.next();
    assert_eq!(reader.skip_delay(c), Some(';'));
}

#[test]
fn test_read_word() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "  module m;"));
    let mut token = Token::new();
    let c = reader.next_nonwhite();
    assert!(reader.read_word(c, &mut token));
    assert_eq!(token.name, "module");
    assert_eq!(token.pos, 2);
    // The char after the word is pushed back.
    assert_eq!(reader.next(), Some(' '));

    let c = reader.next_nonwhite();
    assert!(reader.read_word(c, &mut token));
    assert_eq!(token.name, "m");
    assert_eq!(reader.next(), Some(';'));
}

#[test]
fn test_read_word_directive() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "`define X"));
    let mut token = Token::new();
    let c = reader.next();
    assert!(reader.read_word(c, &mut token));
    assert_eq!(token.name, "`define");
}

#[test]
fn test_read_word_reject() {
    let sm = SourceManager::new();
    let mut reader = Reader::new(chunk(&sm, "(x"));
    let mut token = Token::new();
    let c = reader.next();
    assert!(!reader.read_word(c, &mut token));
}
