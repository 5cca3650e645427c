use crate::{
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP},
    },
};

/// Renders one token. Unknown tokens become a diagnostic block.
pub fn render_token(lexer: &Lexer, token: &Token) -> String {
    let tag = match token.kind {
        TokenKind::Keyword => RESERVED_LOOKUP
            .get(token.lexeme.as_str())
            .cloned()
            .unwrap_or_else(|| format!("T_{}", token.lexeme)),
        TokenKind::Operator => match OPERATOR_LOOKUP.get(token.lexeme.as_str()) {
            Some(tag) => tag.to_string(),
            None => format!("'{}'", token.lexeme),
        },
        TokenKind::Identifier => String::from("T_Identifier"),
        TokenKind::TruncatedIdentifier => format!(
            "T_Identifier (truncated to {})",
            token.value.as_deref().unwrap_or_default()
        ),
        TokenKind::IntConstant => with_value("T_IntConstant", token),
        TokenKind::DoubleConstant => with_value("T_DoubleConstant", token),
        TokenKind::BoolConstant => with_value("T_BoolConstant", token),
        TokenKind::StringConstant => with_value("T_StringConstant", token),
        TokenKind::Unknown => return render_error(&lexer.classify_error(token)),
    };

    format!(
        "{:<12} line {} cols {}-{} is {}\n",
        token.lexeme, token.line, token.col_start, token.col_end, tag
    )
}

fn with_value(tag: &str, token: &Token) -> String {
    match &token.value {
        Some(value) => format!("{tag} (value = {value})"),
        None => tag.to_string(),
    }
}

pub fn render_error(error: &Error) -> String {
    format!(
        "\n*** Error line {}.\n*** {}\n\n",
        error.get_position().line,
        error
    )
}

/// Renders a whole token stream as one report.
pub fn render(lexer: &Lexer, tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| render_token(lexer, token))
        .collect()
}

/// Scans `source` and renders the report.
pub fn scan_report(lexer: &Lexer, source: &str) -> String {
    render(lexer, &lexer.tokenize(source))
}
