//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token anchored at a cursor
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler that emits one token

/// Creates a Token for `$lexeme` starting at cursor `$at`.
///
/// The column range and byte span are derived from the lexeme, so the
/// range always covers exactly the characters of the lexeme.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$value` - The normalized display value, if any
/// * `$at` - The `ScanCursor` at the first character of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConstant, "0x1A", Some("26".to_string()), cursor);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $value:expr, $at:expr) => {{
        let kind: $crate::lexer::tokens::TokenKind = $kind;
        let lexeme: &str = $lexeme;
        let at: $crate::lexer::cursor::ScanCursor = $at;
        let width = lexeme.chars().count() as u32;

        $crate::lexer::tokens::Token {
            kind,
            lexeme: lexeme.to_string(),
            line: at.line,
            col_start: at.column,
            col_end: at.column + width.saturating_sub(1),
            value: $value,
            truncated: kind == $crate::lexer::tokens::TokenKind::TruncatedIdentifier,
            span: $crate::Span {
                start: at.offset,
                end: at.offset + lexeme.len(),
            },
        }
    }};
}

/// Creates a handler that emits a single token of `$kind` for the match.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::IntConstant))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |scanner: &mut $crate::lexer::lexer::Scanner<'_>, matched: &str| {
            scanner.emit($kind, matched);
        }
    };
}
