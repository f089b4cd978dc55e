//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into an
//! ordered list of classified tokens plus an ordered list of rejected
//! lexemes. It handles:
//!
//! - Whitespace and `//` / `/* */` comment skipping
//! - Keyword and underscore-identifier recognition
//! - Numeric literals through an explicit finite-state machine
//! - Operator and punctuation disambiguation with one-character lookahead

pub mod lexer;
pub mod number;
pub mod operators;
pub mod tokens;

#[cfg(test)]
mod tests;
