//! Golden-file verification.
//!
//! Runs the scanner over `*.frag` fixtures, writes each report next to the
//! others in an output directory, and compares it with the recorded `*.out`
//! file. The comparison is an unordered set difference over lines, so line
//! order and duplicated lines are not checked.

pub mod golden;

#[cfg(test)]
mod tests;
