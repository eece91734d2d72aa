//! The scanner: a codepoint cursor over an immutable subject.
//!
//! # Positions
//!
//! Every position the public API accepts or returns counts Unicode
//! codepoints from the start of the subject, never bytes. The subject is
//! stored as a `String`; `Scanner::byte_offset` is the single place that
//! translates a codepoint position into a byte index, so slices handed to
//! matchers always start on a character boundary. Pure-ASCII subjects skip
//! the translation entirely.
//!
//! # Caches
//!
//! Two pieces of derived state are kept as explicit fields:
//!
//! - the rest-of-string cache, a `(cursor, byte offset)` pair locating the
//!   unscanned suffix. It is valid only while its cursor equals the current
//!   cursor and is refreshed lazily by the next match attempt, so a priority
//!   chain of attempts at one position translates the cursor once.
//! - the line/column memo, filled on demand by [`Scanner::location`].
//!
//! Neither cache changes any observable result.

use tracing::{debug, trace};

use crate::location::{LineColumn, LocationMemo};
use crate::{Matcher, PositionError};

/// Location of the unscanned suffix, valid while `pos` equals the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RestCache {
    pos: usize,
    byte: usize,
}

/// Position-tracking scanner.
///
/// Owns the subject and is mutated in place while scanning. Not [`Sync`]:
/// a scanner belongs to one caller at a time.
#[derive(Clone, Debug)]
pub struct Scanner {
    subject: String,
    /// Codepoint length of `subject`.
    len: usize,
    /// `subject` is pure ASCII, so codepoint and byte positions coincide.
    ascii: bool,
    /// Scan pointer, in codepoints. Invariant: `pos <= len`.
    pos: usize,
    /// Text of the last successful match; empty after a failed attempt.
    matched: String,
    is_matched: bool,
    rest: Option<RestCache>,
    locations: LocationMemo,
}

impl Scanner {
    /// Create a scanner at position 0 over `subject`.
    pub fn new(subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let ascii = subject.is_ascii();
        let len = if ascii {
            subject.len()
        } else {
            subject.chars().count()
        };
        Scanner {
            subject,
            len,
            ascii,
            pos: 0,
            matched: String::new(),
            is_matched: false,
            rest: None,
            locations: LocationMemo::default(),
        }
    }

    /// The full subject text.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Codepoint length of the subject.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once the whole subject has been scanned.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current scan pointer, in codepoints.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the scan pointer.
    ///
    /// A negative `n` counts back from the end of the subject: `-1` is the
    /// last codepoint. The resolved position must lie in `0..len`; the end
    /// of input itself is not a valid target, so an empty subject rejects
    /// every position.
    ///
    /// Repositioning does not touch [`matched`](Self::matched) or
    /// [`is_matched`](Self::is_matched); they keep describing the last match
    /// attempt.
    pub fn set_pos(&mut self, n: isize) -> Result<(), PositionError> {
        let target = if n < 0 {
            self.len.checked_sub(n.unsigned_abs())
        } else {
            usize::try_from(n).ok()
        };
        match target {
            Some(pos) if pos < self.len => {
                self.pos = pos;
                Ok(())
            }
            _ => {
                debug!(requested = n, len = self.len, "rejected cursor reposition");
                Err(PositionError {
                    requested: n,
                    len: self.len,
                })
            }
        }
    }

    /// The unscanned rest of the subject.
    pub fn rest(&self) -> &str {
        &self.subject[self.byte_offset(self.pos)..]
    }

    /// Text captured by the most recent match attempt.
    ///
    /// Empty before the first attempt and after any failed attempt.
    #[inline]
    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// Returns `true` if the most recent match attempt succeeded.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Try `matcher` at the scan pointer, advancing past the match on success.
    ///
    /// The matcher sees the rest of the subject. Its result counts only if
    /// the span starts at offset 0 and ends on a character boundary inside
    /// the rest; anything else, including an interior match, is a failure.
    ///
    /// On success the matched text is recorded and the pointer advances by
    /// its codepoint length. Zero-width matches succeed without moving the
    /// pointer, so a scan loop must make progress some other way. At end of
    /// input every attempt fails, the same rule that makes an empty subject
    /// reject everything. An end-of-text anchor (`\z`, or `$` without the
    /// `m` flag) therefore never matches: before the end it can only match
    /// past the cursor, and at the end it is not tried.
    ///
    /// On failure the pointer stays put and the last match is cleared.
    ///
    /// Anything implementing [`Matcher`] can be passed by value or by
    /// reference; a priority chain usually borrows matchers built once.
    pub fn try_match<M: Matcher>(&mut self, matcher: M) -> bool {
        self.matched.clear();
        self.is_matched = false;

        if self.is_eof() {
            trace!(pos = self.pos, "match attempt at end of input");
            return false;
        }

        let start = self.refresh_rest();
        let rest = &self.subject[start..];
        let end = match matcher.find(rest) {
            Some(span) if span.start == 0 && rest.is_char_boundary(span.end) => span.end,
            Some(span) => {
                trace!(pos = self.pos, ?span, "match not anchored at cursor");
                return false;
            }
            None => {
                trace!(pos = self.pos, "no match");
                return false;
            }
        };

        let text = &rest[..end];
        let advance = if self.ascii {
            end
        } else {
            text.chars().count()
        };
        self.matched.push_str(text);
        self.is_matched = true;
        trace!(pos = self.pos, len = advance, "matched");
        self.pos += advance;
        true
    }

    /// Zero-based `(line, column)` of codepoint position `pos`.
    ///
    /// See [`location`](Self::location).
    pub fn line_and_column(&self, pos: usize) -> (usize, usize) {
        self.location(pos).into()
    }

    /// Zero-based line and column of codepoint position `pos`.
    ///
    /// Counts over the codepoints before `pos`: each `\n` starts a new line,
    /// anything else advances the column. Results are memoized per position
    /// for the lifetime of the scanner.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is greater than [`len`](Self::len).
    pub fn location(&self, pos: usize) -> LineColumn {
        assert!(
            pos <= self.len,
            "position {pos} out of range (subject length {})",
            self.len
        );
        self.locations.get_or_insert_with(pos, || {
            LineColumn::measure(&self.subject[..self.byte_offset(pos)])
        })
    }

    /// Byte offset of the unscanned suffix, refreshing the cache if the
    /// pointer moved since it was filled.
    fn refresh_rest(&mut self) -> usize {
        if let Some(cache) = self.rest {
            if cache.pos == self.pos {
                return cache.byte;
            }
        }
        let byte = self.byte_offset(self.pos);
        trace!(pos = self.pos, byte, "rest cache refreshed");
        self.rest = Some(RestCache {
            pos: self.pos,
            byte,
        });
        byte
    }

    /// Translate codepoint position `pos` into a byte offset.
    ///
    /// Walks forward from the rest cache when it lies at or before `pos`
    /// (the common case after a match advanced the pointer), otherwise from
    /// the start. A stale cache entry is still a correct anchor since the
    /// subject never changes.
    fn byte_offset(&self, pos: usize) -> usize {
        debug_assert!(pos <= self.len, "position {pos} beyond subject");
        if self.ascii {
            return pos;
        }
        let (anchor_pos, anchor_byte) = match self.rest {
            Some(cache) if cache.pos <= pos => (cache.pos, cache.byte),
            _ => (0, 0),
        };
        self.subject[anchor_byte..]
            .char_indices()
            .nth(pos - anchor_pos)
            .map_or(self.subject.len(), |(i, _)| anchor_byte + i)
    }

    #[cfg(test)]
    fn rest_cache(&self) -> Option<(usize, usize)> {
        self.rest.map(|cache| (cache.pos, cache.byte))
    }

    #[cfg(test)]
    fn memoized_locations(&self) -> usize {
        self.locations.len()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
