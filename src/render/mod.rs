//! Report rendering.
//!
//! Formats tokens as `lexeme line N cols A-B is TAG` lines and unknown runs as
//! `*** Error line N.` diagnostic blocks, in scan order.

pub mod render;
