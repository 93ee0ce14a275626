//! Expression-level grammar rules.
//!
//! ```text
//! condition  := expression (EQ|NOEQ|LT|LTE|GT|GTE) expression
//! expression := term ((PLUS|MINUS) term)*
//! term       := factor ((TIMES|DIV) factor)*
//! factor     := exponent (EXP factor)?
//! exponent   := LPAREN expression RPAREN | VARIABLE | INTLIT | FLOATLIT
//! ```
//!
//! The `*_tail` functions recognize a rule's continuation after its first
//! operand; the statement rule re-enters them when an identifier turns out
//! to begin a bare expression.

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// expression (relational op) expression.
pub fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    parse_expr(parser)?;

    match parser.current_token_kind() {
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Lte
        | TokenKind::Gt => parser.advance(),
        _ => parser.expect(TokenKind::Gte)?,
    }

    parse_expr(parser)
}

pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;
    parse_expr_tail(parser)
}

pub fn parse_expr_tail(parser: &mut Parser) -> Result<(), Error> {
    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Minus
    ) {
        parser.advance();
        parse_term(parser)?;
    }
    Ok(())
}

fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;
    parse_term_tail(parser)
}

pub fn parse_term_tail(parser: &mut Parser) -> Result<(), Error> {
    while matches!(
        parser.current_token_kind(),
        TokenKind::Times | TokenKind::Div
    ) {
        parser.advance();
        parse_factor(parser)?;
    }
    Ok(())
}

fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    parse_exponent(parser)?;
    parse_factor_tail(parser)
}

/// EXP recurses through factor rather than exponent, which is what makes
/// the operator right-associative: `2 ** 3 ** 2` groups as `2 ** (3 ** 2)`.
pub fn parse_factor_tail(parser: &mut Parser) -> Result<(), Error> {
    if parser.has(TokenKind::Exp) {
        parser.advance();
        parse_factor(parser)?;
    }
    Ok(())
}

fn parse_exponent(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::LParen => {
            parser.advance();
            parse_expr(parser)?;
            parser.expect(TokenKind::RParen)
        }
        TokenKind::Variable | TokenKind::IntLit => {
            parser.advance();
            Ok(())
        }
        // FLOATLIT is the last alternative, so anything else mismatches
        // against it.
        _ => parser.expect(TokenKind::FloatLit),
    }
}
