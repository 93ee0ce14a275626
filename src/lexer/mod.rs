//! Lexical analysis module for the calc front end.
//!
//! This module contains the lexer that turns source text into a stream of
//! tokens, pulled one at a time by the parser. It handles:
//!
//! - Character-level scanning with a single buffered lookahead character
//! - Maximal-munch disambiguation of multi-character operators
//! - Recognition of keywords, identifiers, literals, and punctuation
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
