use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    cursor::ScanCursor,
    tokens::{Token, TokenKind, MAX_IDENTIFIER_LEN, RESERVED_WORDS},
    values::normalize,
};

pub type RegexHandler = fn(&mut Scanner<'_>, &str);
pub type ErrorConstructor = fn(&str) -> ErrorImpl;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in lexer pattern must compile")
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// One rule of the primary table. Patterns are `^`-anchored and matched
/// against the unscanned tail of the source.
#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
    // Match must be followed by a non-word character or the end of input
    word_bounded: bool,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> RegexPattern {
        RegexPattern {
            regex: compile(pattern),
            handler,
            word_bounded: false,
        }
    }

    fn bounded(pattern: &str, handler: RegexHandler) -> RegexPattern {
        RegexPattern {
            word_bounded: true,
            ..RegexPattern::new(pattern, handler)
        }
    }

    fn find<'s>(&self, rest: &'s str) -> Option<&'s str> {
        let matched = self.regex.find(rest)?;
        if self.word_bounded && rest[matched.end()..].starts_with(is_word_char) {
            return None;
        }
        Some(matched.as_str())
    }
}

/// One rule of the error table, applied to the lexeme of an Unknown token.
#[derive(Clone)]
pub struct ErrorPattern {
    regex: Regex,
    constructor: ErrorConstructor,
}

impl ErrorPattern {
    fn new(pattern: &str, constructor: ErrorConstructor) -> ErrorPattern {
        ErrorPattern {
            regex: compile(pattern),
            constructor,
        }
    }
}

/// Immutable scanner configuration: both ordered pattern tables.
///
/// Build it once and reuse it for every input.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    error_patterns: Vec<ErrorPattern>,
    identifier: Regex,
}

impl Lexer {
    pub fn new() -> Lexer {
        let keywords = RESERVED_WORDS
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let identifier = format!("[a-zA-Z][a-zA-Z0-9_]{{0,{}}}", MAX_IDENTIFIER_LEN - 1);

        Lexer {
            patterns: vec![
                RegexPattern::bounded(&format!("^(?:{keywords})"), MK_DEFAULT_HANDLER!(TokenKind::Keyword)),
                RegexPattern::bounded("^(?:true|false)", MK_DEFAULT_HANDLER!(TokenKind::BoolConstant)),
                RegexPattern::bounded(&format!("^{identifier}"), MK_DEFAULT_HANDLER!(TokenKind::Identifier)),
                RegexPattern::new("^0[xX][0-9a-fA-F]+", MK_DEFAULT_HANDLER!(TokenKind::IntConstant)),
                RegexPattern::new("^[0-9]+\\.[0-9]*(?:[eE][+-]?[0-9]+)?", MK_DEFAULT_HANDLER!(TokenKind::DoubleConstant)),
                RegexPattern::new("^[0-9]+\\.[0-9]*", MK_DEFAULT_HANDLER!(TokenKind::DoubleConstant)),
                RegexPattern::new("^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::IntConstant)),
                RegexPattern::new("^\"[^\"\\n]*\"", MK_DEFAULT_HANDLER!(TokenKind::StringConstant)),
                RegexPattern::new("^(?:<=|>=|==|!=|&&|\\|\\||[-+*/%<>=!;,.(){}])", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
                RegexPattern::new("^\\S+", unknown_handler),
            ],
            error_patterns: vec![
                ErrorPattern::new("^[a-zA-Z][a-zA-Z0-9_]*", |matched| ErrorImpl::IdentifierTooLong { identifier: matched.to_string() }),
                ErrorPattern::new("^\"[^\"\\n]*", |matched| ErrorImpl::UnterminatedString { literal: matched.to_string() }),
                ErrorPattern::new("^#\\S+", |matched| ErrorImpl::InvalidDirective { directive: matched.to_string() }),
                ErrorPattern::new("^.", |matched| ErrorImpl::UnrecognizedChar { character: matched.chars().next().unwrap_or_default() }),
            ],
            identifier: compile(&format!("^{identifier}$")),
        }
    }

    /// Scans `source` to the end and returns every token in source order.
    ///
    /// Lexical errors surface as `TokenKind::Unknown` tokens; use
    /// [`Lexer::classify_error`] to turn one into a diagnostic.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(self, source);

        loop {
            scanner.skip_trivia();
            if scanner.at_eof() {
                break;
            }

            let rest = scanner.remainder();
            let rule = self
                .patterns
                .iter()
                .find_map(|pattern| pattern.find(rest).map(|matched| (pattern.handler, matched)));

            match rule {
                Some((handler, matched)) => handler(&mut scanner, matched),
                None => {
                    let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
                    unknown_handler(&mut scanner, &rest[..width]);
                }
            }
        }

        debug!(
            tokens = scanner.tokens.len(),
            errors = scanner.tokens.iter().filter(|token| token.is_error()).count(),
            lines = scanner.cursor.line,
            "scan finished"
        );
        scanner.tokens
    }

    /// Assigns a lexical error category to an Unknown token.
    pub fn classify_error(&self, token: &Token) -> Error {
        let error = self
            .error_patterns
            .iter()
            .find_map(|pattern| {
                pattern
                    .regex
                    .find(&token.lexeme)
                    .map(|matched| (pattern.constructor)(matched.as_str()))
            })
            .unwrap_or_else(|| ErrorImpl::GenericUnrecognized {
                token: token.lexeme.clone(),
            });

        Error::new(error, token.start_position())
    }

    pub fn is_identifier(&self, text: &str) -> bool {
        self.identifier.is_match(text)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// Mutable state of one scan: the cursor and the tokens emitted so far.
pub struct Scanner<'a> {
    lexer: &'a Lexer,
    source: &'a str,
    cursor: ScanCursor,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(lexer: &'a Lexer, source: &'a str) -> Scanner<'a> {
        Scanner {
            lexer,
            source,
            cursor: ScanCursor::new(),
            tokens: vec![],
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.cursor.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    pub fn push(&mut self, token: Token) {
        trace!(%token, "emit");
        self.tokens.push(token);
    }

    /// Emits `matched` as a token of `kind` and moves the cursor past it.
    pub fn emit(&mut self, kind: TokenKind, matched: &str) {
        let token = MK_TOKEN!(kind, matched, normalize(kind, matched), self.cursor);
        self.push(token);
        self.cursor.advance(matched);
    }

    /// Skips whitespace, `//` line comments and `/* */` block comments in any
    /// interleaving.
    fn skip_trivia(&mut self) {
        loop {
            let rest = self.remainder();

            let skipped = if rest.starts_with("//") {
                match rest.find('\n') {
                    Some(newline) => &rest[..=newline],
                    None => rest,
                }
            } else if rest.starts_with("/*") {
                match rest[2..].find("*/") {
                    Some(close) => &rest[..close + 4],
                    None => {
                        debug!(
                            line = self.cursor.line,
                            column = self.cursor.column,
                            "unterminated block comment swallows the rest of the input"
                        );
                        rest
                    }
                }
            } else {
                let whitespace = rest.len() - rest.trim_start().len();
                if whitespace == 0 {
                    return;
                }
                &rest[..whitespace]
            };

            self.cursor.advance(skipped);
        }
    }
}

/// Emits the Unknown token, then a TruncatedIdentifier twin when the run is
/// longer than an identifier may be but starts with a full-length one.
fn unknown_handler(scanner: &mut Scanner<'_>, matched: &str) {
    let start = scanner.cursor();
    scanner.emit(TokenKind::Unknown, matched);

    let Some((cut, _)) = matched.char_indices().nth(MAX_IDENTIFIER_LEN) else {
        return;
    };
    let prefix = &matched[..cut];

    if scanner.lexer.is_identifier(prefix) {
        debug!(line = start.line, identifier = prefix, "over-long identifier truncated");
        let kind = TokenKind::TruncatedIdentifier;
        scanner.push(MK_TOKEN!(kind, matched, normalize(kind, matched), start));
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new().tokenize(source)
}
