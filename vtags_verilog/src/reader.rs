//! The character stream feeding the scanner.
//!
//! [Reader] walks a [SourceChunk] one char at a time with a single pushback
//! slot, and sanitizes the stream on the way: line comments are consumed
//! (the scanner sees the terminating newline), block comments collapse to
//! one space, and string literals collapse to a single `@`, a filler that
//! can neither start an identifier nor unbalance a bracket.  Numeric
//! literals are not treated specially; they fall out later as words no
//! recognizer acts on.
//!
//! The skip primitives live here too.  They all take the current char and
//! return the char to continue with, reading as much input as the construct
//! they step over needs.

use crate::token::{is_word_char, is_word_start, Token};
use vtags_basics::source::SourceChunk;

pub struct Reader<'sm> {
    chunk: &'sm SourceChunk,
    /// Byte index of the next raw char.
    pos: usize,
    /// Byte index where the most recently delivered char started.
    prev_pos: usize,
    /// The single pushback slot.
    pushback: Option<Option<char>>,
}

impl<'sm> Reader<'sm> {
    pub fn new(chunk: &'sm SourceChunk) -> Self {
        Reader {
            chunk,
            pos: 0,
            prev_pos: 0,
            pushback: None,
        }
    }

    pub fn chunk(&self) -> &'sm SourceChunk {
        self.chunk
    }

    /// Byte position where the most recently delivered char started.
    pub fn prev_pos(&self) -> usize {
        self.prev_pos
    }

    /// Reads one raw char.
    fn getc(&mut self) -> Option<char> {
        let c = self.chunk.text[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Peeks one raw char.
    fn peekc(&self) -> Option<char> {
        self.chunk.text[self.pos..].chars().next()
    }

    /// Pushes the last delivered char back.  Only one char can be pending;
    /// a double unget is a scanner bug.
    pub fn unget(&mut self, c: Option<char>) {
        assert!(self.pushback.is_none());
        self.pushback = Some(c);
    }

    /// Returns the next char of the sanitized stream.
    pub fn next(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.take() {
            return c;
        }
        self.prev_pos = self.pos;
        let c = self.getc()?;
        match c {
            '/' => match self.peekc() {
                None => None,
                Some('/') => {
                    // Strip the comment up to and including the newline;
                    // the newline is what the scanner sees.
                    loop {
                        match self.getc() {
                            Some('\n') => return Some('\n'),
                            Some(_) => (),
                            None => return None,
                        }
                    }
                }
                Some('*') => {
                    self.getc();
                    self.skip_block_comment();
                    Some(' ')
                }
                _ => Some('/'),
            },
            '"' => {
                // Strip string contents.
                while !matches!(self.getc(), Some('"') | None) {}
                Some('@')
            }
            _ => Some(c),
        }
    }

    fn skip_block_comment(&mut self) {
        loop {
            match self.getc() {
                Some('*') => {
                    if self.peekc() == Some('/') {
                        self.getc();
                        return;
                    }
                }
                None => return,
                _ => (),
            }
        }
    }

    /// If c is whitespace, reads until a non-whitespace char and returns it.
    pub fn skip_white(&mut self, mut c: Option<char>) -> Option<char> {
        while matches!(c, Some(ch) if ch.is_whitespace()) {
            c = self.next();
        }
        c
    }

    /// Reads the next char, skipping whitespace.
    pub fn next_nonwhite(&mut self) -> Option<char> {
        let c = self.next();
        self.skip_white(c)
    }

    /// The opening bracket has already been consumed; reads up to the
    /// matching closer, counting nesting, and returns the char after it.
    pub fn skip_past_match(&mut self, open: char, close: char) -> Option<char> {
        let mut match_level = 1;
        loop {
            match self.next() {
                None => return None,
                Some(c) if c == open => match_level += 1,
                Some(c) if c == close => {
                    match_level -= 1;
                    if match_level == 0 {
                        return self.next();
                    }
                }
                _ => (),
            }
        }
    }

    /// While looking at `[`, skips the bracketed range and any whitespace
    /// after it.
    pub fn skip_dimension(&mut self, mut c: Option<char>) -> Option<char> {
        while c == Some('[') {
            let after = self.skip_past_match('[', ']');
            c = self.skip_white(after);
        }
        c
    }

    pub fn skip_to_semicolon(&mut self) -> Option<char> {
        loop {
            match self.next() {
                None => return None,
                Some(';') => return Some(';'),
                _ => (),
            }
        }
    }

    /// Reads until an unbalanced `,`, `;`, `)`, `}`, or `]`, honoring
    /// nested parens, braces, and brackets.
    pub fn skip_expression(&mut self, mut c: Option<char>) -> Option<char> {
        loop {
            match c {
                None | Some(',' | ';' | ')' | '}' | ']') => return c,
                Some('(') => c = self.skip_past_match('(', ')'),
                Some('{') => c = self.skip_past_match('{', '}'),
                Some('[') => c = self.skip_past_match('[', ']'),
                _ => c = self.next_nonwhite(),
            }
        }
    }

    /// Skips to the end of the line.  A newline preceded by a backslash is
    /// a continuation, not the end.
    pub fn skip_to_newline(&mut self) {
        let mut escape = false;
        loop {
            match self.next() {
                Some('\n') if !escape => return,
                None => return,
                c => escape = c == Some('\\'),
            }
        }
    }

    /// Steps over a delay: `#(...)`, `# <ident/number/.>`, or the `##`
    /// shorthand, which skips all the way to the `;` so that constructs
    /// like `x ##1 y[*2:3];` inside sequences cannot derail recognition.
    pub fn skip_delay(&mut self, c: Option<char>) -> Option<char> {
        if c != Some('#') {
            return c;
        }
        let c = match self.next_nonwhite() {
            Some('(') => self.skip_past_match('(', ')'),
            Some('#') => self.skip_to_semicolon(),
            // Time literals.
            mut c => {
                while matches!(c, Some(ch) if is_word_char(ch) || ch == '.') {
                    c = self.next();
                }
                c
            }
        };
        self.skip_white(c)
    }

    /// Reads an identifier, keyword, compiler directive, or macro reference
    /// into the token and pushes back the char after it.  Returns false if
    /// c cannot start a word.
    pub fn read_word(&mut self, c: Option<char>, token: &mut Token) -> bool {
        let mut ch = match c {
            Some(ch) if is_word_start(ch) => ch,
            _ => return false,
        };
        token.clear(self.prev_pos);
        loop {
            token.name.push(ch);
            match self.next() {
                Some(c2) if is_word_char(c2) => ch = c2,
                c2 => {
                    self.unget(c2);
                    return true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
