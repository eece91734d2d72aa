//! Priority-ordered tokenizer loop over a [`Scanner`].
//!
//! At each position the rules are tried in order and the first one that
//! matches at the cursor wins. With the default rules the last one accepts
//! any character, so tokenizing only fails for custom rule sets.

use regex::Regex;
use strscan::Scanner;
use thiserror::Error;
use tracing::debug;

use crate::{Token, TokenKind};

/// Default rules, highest priority first.
const DEFAULT_RULES: [(TokenKind, &str); 5] = [
    (TokenKind::Space, r"^\s+"),
    (TokenKind::Ident, r"^[a-zA-Z_][a-zA-Z_0-9]*"),
    (TokenKind::Number, r"^\d+"),
    (TokenKind::Str, r#"^".*?""#),
    (TokenKind::Char, r"(?s)^."),
];

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// No rule consumed input at `pos`.
    #[error("no rule matches at {line}:{column} (position {pos})")]
    Stuck {
        pos: usize,
        line: usize,
        column: usize,
    },
}

/// Compiled token patterns in priority order.
#[derive(Clone, Debug)]
pub struct TokenRules {
    rules: Vec<(TokenKind, Regex)>,
}

impl TokenRules {
    /// Whitespace, identifier, integer, string, then any single character.
    pub fn new() -> Result<Self, TokenizeError> {
        Self::from_patterns(DEFAULT_RULES)
    }

    /// Compile custom rules. Earlier rules take priority.
    pub fn from_patterns<'p>(
        patterns: impl IntoIterator<Item = (TokenKind, &'p str)>,
    ) -> Result<Self, TokenizeError> {
        let rules = patterns
            .into_iter()
            .map(|(kind, pattern)| Regex::new(pattern).map(|re| (kind, re)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(TokenRules { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Tokenizer driving a [`Scanner`] with a borrowed rule set.
#[derive(Debug)]
pub struct Tokenizer<'r> {
    scanner: Scanner,
    rules: &'r TokenRules,
    keep_spaces: bool,
    failed: bool,
}

impl<'r> Tokenizer<'r> {
    pub fn new(source: impl Into<String>, rules: &'r TokenRules) -> Self {
        Tokenizer {
            scanner: Scanner::new(source),
            rules,
            keep_spaces: false,
            failed: false,
        }
    }

    /// Emit [`TokenKind::Space`] tokens instead of skipping them.
    #[must_use]
    pub fn keep_spaces(mut self, keep: bool) -> Self {
        self.keep_spaces = keep;
        self
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scan the next token, or `None` at end of input.
    ///
    /// A rule that matches without consuming anything counts as no match
    /// at all, so a bad rule set reports [`TokenizeError::Stuck`] instead of
    /// looping forever.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        let rules = self.rules;
        loop {
            if self.scanner.is_eof() {
                return Ok(None);
            }

            let pos = self.scanner.pos();
            let kind = rules
                .rules
                .iter()
                .find(|(_, re)| self.scanner.try_match(re) && self.scanner.pos() > pos)
                .map(|(kind, _)| *kind);

            let Some(kind) = kind else {
                let at = self.scanner.location(pos);
                return Err(TokenizeError::Stuck {
                    pos,
                    line: at.line,
                    column: at.column,
                });
            };

            if kind == TokenKind::Space && !self.keep_spaces {
                continue;
            }

            let token = Token {
                kind,
                text: self.scanner.matched().to_owned(),
                pos,
                start: self.scanner.location(pos),
                end: self.scanner.location(self.scanner.pos()),
            };
            debug!(%kind, pos, text = %token.text, "token");
            return Ok(Some(token));
        }
    }
}

/// Yields tokens until end of input; stops after the first error.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.next_token().transpose();
        self.failed = matches!(next, Some(Err(_)));
        next
    }
}

/// Tokenize `source` with the default rules, skipping whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let rules = TokenRules::new()?;
    Tokenizer::new(source, &rules).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
