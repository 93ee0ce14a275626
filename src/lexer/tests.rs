//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Maximal munch over shared-prefix operators
//! - String and character literals
//! - Comments and whitespace
//! - Invalid-token cases and position tracking

use crate::Position;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Literal, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "PROC BEGIN END NUMBER CHARLIT IF ELSE WHILE PRINT READ";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Proc);
    assert_eq!(tokens[1].kind, TokenKind::Begin);
    assert_eq!(tokens[2].kind, TokenKind::End);
    assert_eq!(tokens[3].kind, TokenKind::NumType);
    assert_eq!(tokens[4].kind, TokenKind::CharType);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::While);
    assert_eq!(tokens[8].kind, TokenKind::Print);
    assert_eq!(tokens[9].kind, TokenKind::Read);
    assert_eq!(tokens[10].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo _bar baz_123 proc begin";
    let tokens = tokenize(source);

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Variable);
    }
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].lexeme, "_bar");
    assert_eq!(tokens[2].lexeme, "baz_123");
    // Keyword lookup is exact, so lowercase spellings stay variables.
    assert_eq!(tokens[3].lexeme, "proc");
    assert_eq!(tokens[4].lexeme, "begin");
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_keyword_identifier_boundary() {
    let tokens = tokenize("BEGIN BEGIN1");

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].lexeme, "BEGIN1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.5 .5 0");

    assert_eq!(tokens[0].kind, TokenKind::IntLit);
    assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
    assert_eq!(tokens[1].kind, TokenKind::FloatLit);
    assert_eq!(tokens[1].literal, Some(Literal::Float(3.5)));
    assert_eq!(tokens[2].kind, TokenKind::FloatLit);
    assert_eq!(tokens[2].literal, Some(Literal::Float(0.5)));
    assert_eq!(tokens[3].kind, TokenKind::IntLit);
    assert_eq!(tokens[3].literal, Some(Literal::Int(0)));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_trailing_dot_is_invalid() {
    let tokens = tokenize("3.");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, "3.");
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn test_lone_dot_is_invalid() {
    let tokens = tokenize(".");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, ".");
}

#[test]
fn test_integer_overflow_is_invalid() {
    let tokens = tokenize("99999999999999999999");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn test_maximal_munch_swap() {
    let tokens = tokenize(":=:");

    assert_eq!(tokens[0].kind, TokenKind::Swap);
    assert_eq!(tokens[0].lexeme, ":=:");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_maximal_munch_assign() {
    let tokens = tokenize(":= 1");

    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[0].lexeme, ":=");
    assert_eq!(tokens[1].kind, TokenKind::IntLit);
}

#[test]
fn test_maximal_munch_exponent() {
    let tokens = tokenize("2**3");

    assert_eq!(tokens[0].kind, TokenKind::IntLit);
    assert_eq!(tokens[1].kind, TokenKind::Exp);
    assert_eq!(tokens[1].lexeme, "**");
    assert_eq!(tokens[2].kind, TokenKind::IntLit);
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_times_not_extended() {
    let tokens = tokenize("2*3");

    assert_eq!(tokens[1].kind, TokenKind::Times);
    assert_eq!(tokens[1].lexeme, "*");
}

#[test]
fn test_incomplete_operator_is_invalid() {
    let tokens = tokenize(":x");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, ":");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].lexeme, "x");
}

#[test]
fn test_relational_operators() {
    let tokens = tokenize("< <= > >= = ~=");

    assert_eq!(tokens[0].kind, TokenKind::Lt);
    assert_eq!(tokens[1].kind, TokenKind::Lte);
    assert_eq!(tokens[2].kind, TokenKind::Gt);
    assert_eq!(tokens[3].kind, TokenKind::Gte);
    assert_eq!(tokens[4].kind, TokenKind::Eq);
    assert_eq!(tokens[5].kind, TokenKind::NotEq);
    assert_eq!(tokens[5].lexeme, "~=");
}

#[test]
fn test_lone_tilde_is_invalid() {
    let tokens = tokenize("~x");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, "~");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
}

#[test]
fn test_single_char_tokens() {
    let tokens = tokenize("( ) , [ ] + - /");

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::LBrack);
    assert_eq!(tokens[4].kind, TokenKind::RBrack);
    assert_eq!(tokens[5].kind, TokenKind::Plus);
    assert_eq!(tokens[6].kind, TokenKind::Minus);
    assert_eq!(tokens[7].kind, TokenKind::Div);
    assert_eq!(tokens[8].kind, TokenKind::Eof);
}

#[test]
fn test_comments_are_skipped() {
    let with_comment = tokenize("# comment\n42");
    let without_comment = tokenize("42");

    let kinds: Vec<TokenKind> = with_comment.iter().map(|t| t.kind).collect();
    let expected: Vec<TokenKind> = without_comment.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
    assert_eq!(with_comment[0].lexeme, "42");
}

#[test]
fn test_interleaved_comments_and_whitespace() {
    let tokens = tokenize("  # one\n\t# two\n  x");

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_string_literal() {
    let tokens = tokenize("\"hi there\"");

    assert_eq!(tokens[0].kind, TokenKind::StringLit);
    assert_eq!(tokens[0].lexeme, "hi there");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_unterminated_string_is_invalid() {
    let tokens = tokenize("\"abc");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_char_literals() {
    let tokens = tokenize("'a' '\\n' '\\t'");

    assert_eq!(tokens[0].kind, TokenKind::CharLit);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].kind, TokenKind::CharLit);
    assert_eq!(tokens[1].lexeme, "\\n");
    assert_eq!(tokens[2].kind, TokenKind::CharLit);
    assert_eq!(tokens[2].lexeme, "\\t");
}

#[test]
fn test_bad_char_literals() {
    assert_eq!(tokenize("'ab'")[0].kind, TokenKind::Invalid);
    assert_eq!(tokenize("''")[0].kind, TokenKind::Invalid);
    assert_eq!(tokenize("'\\x'")[0].kind, TokenKind::Invalid);
}

#[test]
fn test_unterminated_char_is_invalid() {
    let tokens = tokenize("'a");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_unrecognized_character_is_invalid() {
    let tokens = tokenize("@ 1");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, "@");
    assert_eq!(tokens[1].kind, TokenKind::IntLit);
}

#[test]
fn test_positions() {
    let tokens = tokenize("BEGIN\n  x := 1\nEND");

    assert_eq!(tokens[0].position, Position { line: 1, column: 1 });
    assert_eq!(tokens[1].position, Position { line: 2, column: 3 });
    assert_eq!(tokens[2].position, Position { line: 2, column: 5 });
    assert_eq!(tokens[3].position, Position { line: 2, column: 8 });
    assert_eq!(tokens[4].position, Position { line: 3, column: 1 });
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Variable);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.current().kind, TokenKind::Eof);
}

#[test]
fn test_current_does_not_advance() {
    let mut lexer = Lexer::new("x y");
    lexer.next_token();

    assert_eq!(lexer.current().lexeme, "x");
    assert_eq!(lexer.current().lexeme, "x");
    assert_eq!(lexer.next_token().lexeme, "y");
}

#[test]
fn test_tokenization_is_deterministic() {
    let source = "BEGIN x :=: y[1, 2] PRINT 2 ** 3.5 END # trailing";

    assert_eq!(tokenize(source), tokenize(source));
}
