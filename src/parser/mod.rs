//! Parser module for the calc front end.
//!
//! This module contains a predictive recursive-descent recognizer: one
//! function per grammar nonterminal, a single token of lookahead pulled
//! from the lexer, and no backtracking. It validates grammatical
//! membership without building a syntax tree and handles:
//!
//! - Statement recognition (assignments, swaps, declarations, procedures,
//!   branches, loops, print/read, bare expressions)
//! - Expression recognition with the usual precedence ladder and a
//!   right-associative exponent operator
//! - Immediate diagnostics on the first mismatch, with source position

pub mod expr;
pub mod parser;
pub mod stmt;
