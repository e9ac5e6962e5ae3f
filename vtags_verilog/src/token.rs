use crate::kind::{lookup_keyword, Kind};
use crate::lang::Lang;

/// True for chars that can start a word: identifiers, keywords, and
/// compiler directives / macro references (which begin with a backtick).
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '`'
}

/// True for chars that can continue a word.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '`' || c == '$'
}

/// One scanned word, together with what the recognizers and the emitter
/// need to know about it.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: Kind,
    pub name: String,
    /// Byte position of the first char of the word.
    pub pos: usize,
    /// Base class name, when this token names a class with `extends`.
    pub inheritance: String,
    /// The token represents a parameter whose value can be overridden.
    pub parameter: bool,
}

impl Token {
    pub fn new() -> Self {
        Token {
            kind: Kind::Undefined,
            name: String::new(),
            pos: 0,
            inheritance: String::new(),
            parameter: false,
        }
    }

    /// Resets all fields before a new word is read into the token.
    pub fn clear(&mut self, pos: usize) {
        // The kind is settled later, by update_kind.
        self.kind = Kind::Undefined;
        self.name.clear();
        self.pos = pos;
        self.inheritance.clear();
        self.parameter = false;
    }

    /// simple_identifier ::= [a-zA-Z_] { [a-zA-Z0-9_$] }
    fn is_identifier(&self) -> bool {
        if self.kind != Kind::Undefined {
            return false;
        }
        let mut chars = self.name.chars();
        match chars.next() {
            Some(c) if is_word_start(c) && c != '`' => (),
            _ => return false,
        }
        chars.all(is_word_char)
    }

    /// Classifies the word: a keyword kind from the table, or
    /// [Kind::Identifier] for identifier-shaped words the table does not
    /// know.  Words starting with a backtick stay [Kind::Undefined].
    pub fn update_kind(&mut self, lang: Lang) {
        self.kind = lookup_keyword(&self.name, lang);
        if self.kind == Kind::Undefined && self.is_identifier() {
            self.kind = Kind::Identifier;
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::new()
    }
}

#[cfg(test)]
mod tests;
