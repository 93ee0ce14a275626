//! Statement-level grammar rules.
//!
//! ```text
//! program      := (procedure | declaration)* block
//! block        := BEGIN statement* END
//! statement    := assignment-or-swap | block | declaration | procedure
//!               | if-stmt | while-stmt | print-stmt | read-stmt
//!               | bare-expression
//! declaration  := (NUMBER|CHARLIT) VARIABLE
//!                 ( LBRACK bounds RBRACK | LPAREN params RPAREN block )?
//! procedure    := PROC VARIABLE LPAREN params
//! ```

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::{parse_condition, parse_expr, parse_expr_tail, parse_factor_tail, parse_term_tail},
    parser::Parser,
};

pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    while !parser.has(TokenKind::Begin) {
        match parser.current_token_kind() {
            TokenKind::Proc => {
                parser.advance();
                parse_procedure(parser)?;
            }
            TokenKind::NumType | TokenKind::CharType => {
                parser.advance();
                parse_declaration(parser)?;
            }
            _ => parser.must_be(TokenKind::CharType)?,
        }
    }

    parse_block(parser)
}

/// BEGIN statement* END. End of input before the closing END is forbidden.
pub fn parse_block(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Begin)?;
    while !parser.has(TokenKind::End) {
        parser.must_not_be(TokenKind::Eof)?;
        parse_statement(parser)?;
    }
    parser.advance();
    Ok(())
}

/// Dispatches on the statement's first token. A leading INTLIT, FLOATLIT,
/// or LPAREN is accepted as a bare expression-statement; this is deliberate
/// leniency in the grammar, not an error.
pub fn parse_statement(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Variable => {
            parser.advance();
            parse_assign_or_swap(parser)
        }
        TokenKind::Begin => parse_block(parser),
        TokenKind::NumType | TokenKind::CharType => {
            parser.advance();
            parse_declaration(parser)
        }
        TokenKind::Proc => {
            parser.advance();
            parse_procedure(parser)
        }
        TokenKind::If => {
            parser.advance();
            parse_branch(parser)
        }
        TokenKind::While => {
            parser.advance();
            parse_loop(parser)
        }
        TokenKind::Print => {
            parser.advance();
            parse_print(parser)
        }
        TokenKind::LParen | TokenKind::IntLit | TokenKind::FloatLit => parse_expr(parser),
        TokenKind::Read => {
            parser.advance();
            parse_read(parser)
        }
        _ => parser.must_be(TokenKind::Read),
    }
}

/// The identifier has been consumed; the token after it decides the form.
/// `:=` selects assignment, `:=:` selects swap, and anything else means the
/// identifier was the start of a bare expression, so recognition continues
/// through the expression tails.
fn parse_assign_or_swap(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Assign => {
            parser.advance();
            parse_expr(parser)
        }
        TokenKind::Swap => {
            parser.advance();
            parse_swap_target(parser)
        }
        _ => {
            parse_factor_tail(parser)?;
            parse_term_tail(parser)?;
            parse_expr_tail(parser)
        }
    }
}

/// VARIABLE (LBRACK expression (COMMA expression)? RBRACK)?
fn parse_swap_target(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Variable)?;
    if parser.has(TokenKind::LBrack) {
        parser.advance();
        parse_expr(parser)?;
        if parser.has(TokenKind::Comma) {
            parser.advance();
            parse_expr(parser)?;
        }
        parser.expect(TokenKind::RBrack)?;
    }
    Ok(())
}

/// The type keyword has been consumed. A bare name declares a scalar, a
/// bracket opens array bounds, and a paren turns the declaration into a
/// function definition.
fn parse_declaration(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Variable)?;
    match parser.current_token_kind() {
        TokenKind::LBrack => {
            parser.advance();
            parse_bounds(parser)
        }
        TokenKind::LParen => {
            parser.advance();
            parse_params(parser)
        }
        _ => Ok(()),
    }
}

/// INTLIT (COMMA bounds)?; the recursion consumes the closing RBRACK.
fn parse_bounds(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::IntLit)?;
    if parser.has(TokenKind::Comma) {
        parser.advance();
        parse_bounds(parser)
    } else {
        parser.expect(TokenKind::RBrack)
    }
}

/// PROC has been consumed: VARIABLE LPAREN params.
fn parse_procedure(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Variable)?;
    parser.expect(TokenKind::LParen)?;
    parse_params(parser)
}

/// Everything after the opening paren of a procedure or function:
/// zero or more `(NUMBER|CHARLIT) VARIABLE` separated by commas, then
/// RPAREN and the body block.
fn parse_params(parser: &mut Parser) -> Result<(), Error> {
    while matches!(
        parser.current_token_kind(),
        TokenKind::NumType | TokenKind::CharType
    ) {
        parser.advance();
        parser.expect(TokenKind::Variable)?;
        if parser.has(TokenKind::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::RParen)?;
    parse_block(parser)
}

/// IF has been consumed: condition block (ELSE block)?
fn parse_branch(parser: &mut Parser) -> Result<(), Error> {
    parse_condition(parser)?;
    parse_block(parser)?;
    if parser.has(TokenKind::Else) {
        parser.advance();
        parse_block(parser)?;
    }
    Ok(())
}

/// WHILE has been consumed: condition block.
fn parse_loop(parser: &mut Parser) -> Result<(), Error> {
    parse_condition(parser)?;
    parse_block(parser)
}

/// PRINT has been consumed: expression (COMMA expression)*
fn parse_print(parser: &mut Parser) -> Result<(), Error> {
    parse_expr(parser)?;
    while parser.has(TokenKind::Comma) {
        parser.advance();
        parse_expr(parser)?;
    }
    Ok(())
}

/// READ has been consumed: VARIABLE.
fn parse_read(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Variable)
}
