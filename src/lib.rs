#![allow(clippy::module_inception)]

use std::sync::Once;

pub mod errors;
pub mod golden;
pub mod lexer;
pub mod macros;
pub mod render;

extern crate regex;

pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// A 1-based line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Byte range of a token inside the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
/// `RUST_LOG=scanner=debug` shows dual emissions and swallowed comments,
/// `RUST_LOG=scanner=trace` shows every emitted token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
