//! Parser state and the token-matching primitives.
//!
//! The parser owns the lexer and holds exactly one token of lookahead at
//! all times — the lexer's current token. Grammar rules inspect that
//! token's kind, dispatch, and advance; `must_be`/`must_not_be` turn the
//! first mismatch into a positioned diagnostic.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_program;

/// Recursive-descent recognizer state.
///
/// Owns the lexer and nothing else: all context needed to validate a
/// construct lives in the recursive call stack and the current token.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser { lexer }
    }

    /// The lookahead token, without advancing.
    pub fn current_token(&self) -> &Token {
        self.lexer.current()
    }

    /// Kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lexer.current().kind
    }

    /// Pulls the next token from the lexer.
    pub fn advance(&mut self) {
        self.lexer.next_token();
    }

    /// True if the lookahead token has the given kind.
    pub fn has(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Requires the lookahead token to have the given kind; reports the
    /// received and expected kinds at the token's position otherwise.
    pub fn must_be(&self, expected: TokenKind) -> Result<(), Error> {
        if self.has(expected) {
            return Ok(());
        }

        let token = self.current_token();
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                received: token.kind,
                expected,
            },
            token.position,
        ))
    }

    /// Dual of `must_be`: rejects if the lookahead token has the given
    /// kind. Used where a sentinel (premature EOF before a structural END)
    /// must never appear.
    pub fn must_not_be(&self, forbidden: TokenKind) -> Result<(), Error> {
        if !self.has(forbidden) {
            return Ok(());
        }

        let token = self.current_token();
        Err(Error::new(
            ErrorImpl::ForbiddenToken {
                received: token.kind,
            },
            token.position,
        ))
    }

    /// `must_be` followed by an advance past the matched token.
    pub fn expect(&mut self, expected: TokenKind) -> Result<(), Error> {
        self.must_be(expected)?;
        self.advance();
        Ok(())
    }
}

/// Attempts to recognize a complete calc program.
///
/// Accepting returns `Ok(())`; the first mismatch returns the diagnostic
/// instead of terminating the process, so embedding contexts can inspect
/// the failure.
pub fn parse(lexer: Lexer) -> Result<(), Error> {
    let mut parser = Parser::new(lexer);
    parser.advance(); // load the first token
    parse_program(&mut parser)
}
