//! Match collaborators consumed by the scanner.
//!
//! A [`Matcher`] reports where it matches inside a haystack. The scanner
//! hands it the unscanned rest of the subject and accepts the result only
//! when the span starts at offset 0, so implementations are free to search
//! forward (as `regex::Regex::find` does); such interior matches simply
//! count as "no match".
//!
//! # Regular Expressions
//!
//! `Regex::find` searches the whole haystack for the leftmost match. When
//! a pattern often fails at the cursor, anchoring it with `^` stops the
//! search at the first character instead of scanning to the end of input.

use std::ops::Range;

/// Capability to find a match in a text.
pub trait Matcher {
    /// Byte span of the leftmost match in `haystack`, or `None`.
    fn find(&self, haystack: &str) -> Option<Range<usize>>;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        (**self).find(haystack)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        (**self).find(haystack)
    }
}

/// Literal prefix. The empty literal is a zero-width match.
impl Matcher for str {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        haystack.starts_with(self).then_some(0..self.len())
    }
}

impl Matcher for String {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        Matcher::find(self.as_str(), haystack)
    }
}

/// Single character.
impl Matcher for char {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        haystack.starts_with(*self).then_some(0..self.len_utf8())
    }
}

/// Exactly one codepoint, whatever it is.
///
/// The usual last resort of a priority chain: it fails only at end of input.
///
/// ```
/// use strscan::{AnyChar, Matcher};
///
/// assert_eq!(AnyChar.find("é!"), Some(0..2));
/// assert_eq!(AnyChar.find(""), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnyChar;

impl Matcher for AnyChar {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        haystack.chars().next().map(|c| 0..c.len_utf8())
    }
}

/// Non-empty run of characters accepted by a predicate.
///
/// A run, not a single character: `CharClass(|_| true)` swallows the whole
/// rest of the input. Use [`AnyChar`] for a one-codepoint fallback.
///
/// ```
/// use strscan::{CharClass, Matcher};
///
/// let digits = CharClass(|c: char| c.is_ascii_digit());
/// assert_eq!(digits.find("2024-10"), Some(0..4));
/// assert_eq!(digits.find("v2"), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CharClass<F>(pub F);

impl<F: Fn(char) -> bool> Matcher for CharClass<F> {
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        let end = haystack
            .char_indices()
            .find(|&(_, c)| !(self.0)(c))
            .map_or(haystack.len(), |(i, _)| i);
        (end > 0).then_some(0..end)
    }
}

#[cfg(feature = "regex")]
impl Matcher for regex::Regex {
    #[inline]
    fn find(&self, haystack: &str) -> Option<Range<usize>> {
        regex::Regex::find(self, haystack).map(|m| m.range())
    }
}

#[cfg(test)]
mod tests;
