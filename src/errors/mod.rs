//! Error types.
//!
//! - Lexical diagnostics for unknown runs, with their verbatim messages
//! - I/O failures of the command line and the golden-file harness

pub mod errors;
