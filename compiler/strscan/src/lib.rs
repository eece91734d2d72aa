//! Position-tracking string scanner.
//!
//! A [`Scanner`] owns an immutable subject text and a cursor measured in
//! Unicode codepoints. Callers repeatedly ask whether a [`Matcher`] matches
//! at the cursor; a successful attempt advances the cursor past the match,
//! a failed one leaves it where it was. Chaining attempts in priority order
//! is enough to build a hand-written tokenizer:
//!
//! ```
//! use strscan::{AnyChar, CharClass, Scanner};
//!
//! let mut s = Scanner::new("let x = 42;");
//! let space = CharClass(char::is_whitespace);
//! let word = CharClass(|c: char| c.is_alphanumeric() || c == '_');
//!
//! let mut words = Vec::new();
//! while !s.is_eof() {
//!     if s.try_match(&space) {
//!         continue;
//!     }
//!     if s.try_match(&word) {
//!         words.push(s.matched().to_owned());
//!     } else {
//!         s.try_match(AnyChar);
//!     }
//! }
//! assert_eq!(words, ["let", "x", "42"]);
//! ```
//!
//! # Crate Boundary
//!
//! The scanner has no pattern engine of its own. Regular expressions are
//! supported through the `regex` feature (on by default), which implements
//! [`Matcher`] for `regex::Regex`.
//!
//! # Logging
//!
//! Match attempts and cache refreshes are reported as `tracing` events at
//! `trace` level under the `strscan` target. The library never installs a
//! subscriber.

mod error;
mod location;
mod matcher;
mod scanner;

pub use error::PositionError;
pub use location::LineColumn;
pub use matcher::{AnyChar, CharClass, Matcher};
pub use scanner::Scanner;
