use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax diagnostic: what went wrong, and where.
///
/// The first mismatch produces one of these and ends the run; there is no
/// resynchronization and never a second diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ForbiddenToken { .. } => "ForbiddenToken",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parser error at {}.\n{}",
            self.position, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    /// The current token's kind differs from what the grammar rule required.
    /// Covers lexical failures too: an `Invalid` token from the lexer
    /// becomes a mismatch the moment a rule tries to match it.
    #[error("Received token {received} expected {expected}")]
    UnexpectedToken {
        received: TokenKind,
        expected: TokenKind,
    },
    /// A sentinel token appeared where it must never occur, e.g. end of
    /// input before a structural END.
    #[error("Forbidden token {received}")]
    ForbiddenToken { received: TokenKind },
}
