//! Example tokenizer built on `strscan`.
//!
//! Recognizes whitespace, identifiers, integers, double-quoted strings and
//! falls back to single characters, trying each rule in that order at every
//! position. Each token carries its zero-based start and end location.
//!
//! # Logging
//!
//! - `RUST_LOG=strscan_tok=debug`: one event per token.
//! - `RUST_LOG=strscan=trace`: every match attempt inside the scanner.

mod token;
mod tokenizer;

use std::sync::Once;

pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, TokenRules, TokenizeError, Tokenizer};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
