#![allow(clippy::module_inception)]

//! Front end for the calc language.
//!
//! The crate recognizes calc programs in two stages: a pull-based
//! character-level lexer and a predictive recursive-descent parser with a
//! single token of lookahead. Parsing either accepts the input or reports
//! the first mismatch with its source position; no syntax tree is built.

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod parser;

/// 1-based source position of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Runs the recognizer over a source string.
///
/// Convenience for embedders and tests; the binary goes through the same
/// path after reading its input.
pub fn check(source: &str) -> Result<(), errors::errors::Error> {
    parser::parser::parse(lexer::lexer::Lexer::new(source))
}
