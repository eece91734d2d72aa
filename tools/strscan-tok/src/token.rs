//! Token types produced by the tokenizer.

use std::fmt;

use strscan::LineColumn;

/// What a token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of whitespace. Only produced when spaces are requested.
    Space,
    /// `[a-zA-Z_][a-zA-Z_0-9]*`
    Ident,
    /// Decimal integer.
    Number,
    /// Double-quoted string, quotes included.
    Str,
    /// Any other single character.
    Char,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Space => "SPACE",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Char => "CHAR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its source text and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Codepoint offset of the first character.
    pub pos: usize,
    /// Location of the first character.
    pub start: LineColumn,
    /// Location just past the last character.
    pub end: LineColumn,
}
