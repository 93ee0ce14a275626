use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROC", TokenKind::Proc);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("NUMBER", TokenKind::NumType);
        map.insert("CHARLIT", TokenKind::CharType);
        map.insert("IF", TokenKind::If);
        map.insert("ELSE", TokenKind::Else);
        map.insert("WHILE", TokenKind::While);
        map.insert("PRINT", TokenKind::Print);
        map.insert("READ", TokenKind::Read);
        map
    };
}

/// The closed set of calc token kinds.
///
/// This set is the contract between the lexer and the parser, including the
/// `Invalid` and `Eof` sentinels. `Invalid` is an ordinary token to the
/// lexer; only the parser treats it as fatal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Invalid,
    Eof,

    LParen,
    RParen,
    Comma,
    LBrack,
    RBrack,

    Begin,
    End,
    Proc,
    NumType,
    CharType,
    If,
    Else,
    While,
    Print,
    Read,

    Assign, // :=
    Swap,   // :=:

    Eq,
    NotEq, // ~=
    Lt,
    Lte,
    Gt,
    Gte,

    Plus,
    Minus,
    Times,
    Div,
    Exp, // **

    IntLit,
    FloatLit,
    CharLit,
    StringLit,
    Variable,
}

impl TokenKind {
    /// Diagnostic name of the kind, as printed in parser error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::Eof => "EOF",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::LBrack => "LBRACK",
            TokenKind::RBrack => "RBRACK",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Proc => "PROC",
            TokenKind::NumType => "NUMTYPE",
            TokenKind::CharType => "CHARTYPE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::Read => "READ",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Swap => "SWAP",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOEQ",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Div => "DIV",
            TokenKind::Exp => "EXP",
            TokenKind::IntLit => "INTLIT",
            TokenKind::FloatLit => "FLOATLIT",
            TokenKind::CharLit => "CHARLIT",
            TokenKind::StringLit => "STRING",
            TokenKind::Variable => "VARIABLE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoded value of a numeric literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
}

/// One classified unit of source text.
///
/// Tokens are immutable; the lexer replaces its current token on every
/// advance rather than editing it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, position: Position) -> Self {
        Token {
            kind,
            lexeme,
            literal: None,
            position,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{} at {}", self.kind, self.position)
        } else {
            write!(f, "{} '{}' at {}", self.kind, self.lexeme, self.position)
        }
    }
}
