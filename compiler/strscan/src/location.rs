//! Line/column translation for scanner positions.
//!
//! Lines and columns are zero-based and counted in codepoints. A newline
//! (`\n`) bumps the line and resets the column; every other codepoint,
//! `\r` included, bumps the column.

use std::cell::RefCell;
use std::fmt;

use rustc_hash::FxHashMap;

/// Zero-based line and column of a position in the subject.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    /// Start of the subject.
    pub const START: LineColumn = LineColumn { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        LineColumn { line, column }
    }

    /// Measure the location just past the end of `head`.
    ///
    /// `head` is the subject prefix up to the queried position. Newlines are
    /// located bytewise with `memchr`, which is safe on UTF-8 because `0x0A`
    /// never occurs inside a multi-byte sequence; the column is then the
    /// codepoint count of the last line.
    pub(crate) fn measure(head: &str) -> Self {
        let bytes = head.as_bytes();
        let line = memchr::memchr_iter(b'\n', bytes).count();
        let line_start = memchr::memrchr(b'\n', bytes).map_or(0, |i| i + 1);
        let column = head[line_start..].chars().count();
        LineColumn { line, column }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<LineColumn> for (usize, usize) {
    fn from(loc: LineColumn) -> Self {
        (loc.line, loc.column)
    }
}

/// Memo of previously measured positions.
///
/// Entries live as long as the owning scanner. Interior mutability lets
/// lookups go through `&Scanner`, so a borrowed `matched()` string and a
/// location query can coexist in caller code.
#[derive(Clone, Debug, Default)]
pub(crate) struct LocationMemo {
    entries: RefCell<FxHashMap<usize, LineColumn>>,
}

impl LocationMemo {
    /// Return the memoized location for `pos`, computing it on first use.
    pub(crate) fn get_or_insert_with(
        &self,
        pos: usize,
        measure: impl FnOnce() -> LineColumn,
    ) -> LineColumn {
        let cached = self.entries.borrow().get(&pos).copied();
        if let Some(loc) = cached {
            return loc;
        }
        let loc = measure();
        self.entries.borrow_mut().insert(pos, loc);
        loc
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
