//! Lexical analysis module.
//!
//! This module turns source text into a flat stream of classified tokens:
//!
//! - Ordered regex pattern tables, first match wins
//! - Line/column tracking across whitespace and comments
//! - Canonical display values for numeric, boolean and string literals
//! - Lazy classification of unknown runs into lexical errors
//! - Dual emission of over-long identifiers

pub mod cursor;
pub mod lexer;
pub mod tokens;
pub mod values;
