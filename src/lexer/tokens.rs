use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

/// Identifiers are significant up to this many characters.
pub const MAX_IDENTIFIER_LEN: usize = 31;

pub const RESERVED_WORDS: [&str; 15] = [
    "void",
    "int",
    "double",
    "bool",
    "string",
    "null",
    "for",
    "while",
    "if",
    "else",
    "return",
    "break",
    "Print",
    "ReadInteger",
    "ReadLine",
];

lazy_static! {
    /// Reserved word -> report tag (`int` -> `T_Int`).
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, String> = {
        let mut map = HashMap::new();
        for word in RESERVED_WORDS {
            let mut chars = word.chars();
            let tag = match chars.next() {
                Some(first) => format!("T_{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::from("T_"),
            };
            map.insert(word, tag);
        }
        map
    };

    /// Multi-character operators render as named tags.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("<=", "T_LessEqual");
        map.insert(">=", "T_GreaterEqual");
        map.insert("==", "T_Equal");
        map.insert("!=", "T_NotEqual");
        map.insert("&&", "T_And");
        map.insert("||", "T_Or");
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    BoolConstant,
    Identifier,
    IntConstant,
    DoubleConstant,
    StringConstant,
    Operator,
    Unknown,
    // Synthetic twin of an over-long Unknown run
    TruncatedIdentifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub col_start: u32,
    pub col_end: u32,
    pub value: Option<String>,
    pub truncated: bool,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} ({}:{}-{})",
            self.kind, self.lexeme, self.line, self.col_start, self.col_end
        )
    }
}

impl Token {
    pub fn start_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.col_start,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Unknown
    }

    /// Number of characters covered, as given by the column range.
    pub fn width(&self) -> u32 {
        self.col_end - self.col_start + 1
    }
}
