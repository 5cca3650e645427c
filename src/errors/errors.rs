use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalErrorKind {
    IdentifierTooLong,
    InvalidDirective,
    UnterminatedString,
    UnrecognizedChar,
    GenericUnrecognized,
}

/// A lexical diagnostic anchored at the first character of the offending run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> LexicalErrorKind {
        match &self.internal_error {
            ErrorImpl::IdentifierTooLong { .. } => LexicalErrorKind::IdentifierTooLong,
            ErrorImpl::InvalidDirective { .. } => LexicalErrorKind::InvalidDirective,
            ErrorImpl::UnterminatedString { .. } => LexicalErrorKind::UnterminatedString,
            ErrorImpl::UnrecognizedChar { .. } => LexicalErrorKind::UnrecognizedChar,
            ErrorImpl::GenericUnrecognized { .. } => LexicalErrorKind::GenericUnrecognized,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            LexicalErrorKind::IdentifierTooLong => "IdentifierTooLong",
            LexicalErrorKind::InvalidDirective => "InvalidDirective",
            LexicalErrorKind::UnterminatedString => "UnterminatedString",
            LexicalErrorKind::UnrecognizedChar => "UnrecognizedChar",
            LexicalErrorKind::GenericUnrecognized => "GenericUnrecognized",
        }
    }
}

// Messages are part of the report format and must stay byte-exact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Identifier too long: \"{identifier}\"")]
    IdentifierTooLong { identifier: String },
    #[error("Invalid # directive")]
    InvalidDirective { directive: String },
    #[error("Unterminated string constant: {literal}")]
    UnterminatedString { literal: String },
    #[error("Unrecognized char: '{character}'")]
    UnrecognizedChar { character: char },
    #[error("Unrecognized token: {token}")]
    GenericUnrecognized { token: String },
}

/// Failures of the command line and the golden-file harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to list fixtures in {path:?}: {source}")]
    ListDir { path: PathBuf, source: io::Error },
    #[error("failed to create output directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
}
