use std::str::Chars;

use crate::Position;

use super::tokens::{Literal, Token, TokenKind, KEYWORD_LOOKUP};

/// Operators that share a prefix with another operator. These are matched by
/// maximal munch: the candidate lexeme grows one character at a time while
/// any table entry still has it as a prefix, and the committed token is the
/// longest exact member. A consumed lexeme that is not an exact member
/// becomes `Invalid`.
const MULTI_CHAR_OPERATORS: [(&str, TokenKind); 8] = [
    (":=", TokenKind::Assign),
    (":=:", TokenKind::Swap),
    ("<", TokenKind::Lt),
    ("<=", TokenKind::Lte),
    (">", TokenKind::Gt),
    (">=", TokenKind::Gte),
    ("*", TokenKind::Times),
    ("**", TokenKind::Exp),
];

/// Two-character escapes accepted inside a character literal.
const CHAR_ESCAPES: [&str; 4] = ["\\n", "\\t", "\\'", "\\\""];

/// Pull-based lexer over a source string.
///
/// Owns the character cursor, a single buffered lookahead character,
/// line/column counters, and the most recently produced token. The cursor
/// only moves forward; once `Eof` has been produced, every further call to
/// [`Lexer::next_token`] produces `Eof` again.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    current_char: Option<char>,
    line: u32,
    column: u32,
    token: Token,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            chars: source.chars(),
            current_char: None,
            line: 1,
            column: 0,
            token: Token::new(TokenKind::Invalid, String::new(), Position::null()),
        };
        lexer.consume();
        lexer
    }

    /// The most recently produced token, without advancing.
    pub fn current(&self) -> &Token {
        &self.token
    }

    /// Produces the next token, consuming source characters past it.
    pub fn next_token(&mut self) -> &Token {
        self.skip_space_and_comments();

        if self.current_char.is_none() {
            self.token = Token::new(TokenKind::Eof, String::new(), self.position());
        } else if self.lex_single() || self.lex_operator() || self.lex_other() {
            // token already stored
        } else {
            // Catch-all: one unrecognized character becomes Invalid and
            // scanning resumes at the next character.
            let position = self.position();
            let lexeme = self.current_char.map(String::from).unwrap_or_default();
            self.token = Token::new(TokenKind::Invalid, lexeme, position);
            self.consume();
        }

        &self.token
    }

    /// Reads one character from the stream into the lookahead buffer.
    fn consume(&mut self) {
        self.current_char = self.chars.next();
        self.column += 1;
        if self.current_char == Some('\n') {
            self.column = 0;
            self.line += 1;
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Skips interleaved whitespace and `#` line comments in one pre-pass.
    fn skip_space_and_comments(&mut self) {
        while matches!(self.current_char, Some(c) if c.is_whitespace() || c == '#') {
            if self.current_char == Some('#') {
                while matches!(self.current_char, Some(c) if c != '\n') {
                    self.consume();
                }
            }
            while matches!(self.current_char, Some(c) if c.is_whitespace()) {
                self.consume();
            }
        }
    }

    /// Tokens recognized by direct literal match: the single-character fixed
    /// set and the two-character `~=`.
    fn lex_single(&mut self) -> bool {
        let Some(c) = self.current_char else {
            return false;
        };

        if c == '~' {
            // '~' only ever starts the inequality operator.
            let position = self.position();
            self.consume();
            if self.current_char == Some('=') {
                self.consume();
                self.token = Token::new(TokenKind::NotEq, String::from("~="), position);
            } else {
                self.token = Token::new(TokenKind::Invalid, String::from("~"), position);
            }
            return true;
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '[' => TokenKind::LBrack,
            ']' => TokenKind::RBrack,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Div,
            '=' => TokenKind::Eq,
            _ => return false,
        };

        self.token = Token::new(kind, c.to_string(), self.position());
        self.consume();
        true
    }

    /// Maximal-munch match against the shared-prefix operator table.
    ///
    /// Extends the candidate lexeme greedily, keeping only operators whose
    /// prefix still matches, and stops once no candidate can be extended.
    /// This is what commits `:=:` to SWAP rather than stopping at ASSIGN,
    /// and `**` to EXP rather than two TIMES tokens.
    fn lex_operator(&mut self) -> bool {
        let position = self.position();
        let mut candidates: Vec<(&str, TokenKind)> = MULTI_CHAR_OPERATORS.to_vec();
        let mut lexeme = String::new();

        while candidates.len() > 1 {
            let Some(c) = self.current_char else {
                break;
            };
            let mut trial = lexeme.clone();
            trial.push(c);

            let narrowed: Vec<(&str, TokenKind)> = candidates
                .iter()
                .copied()
                .filter(|(op, _)| op.starts_with(&trial))
                .collect();
            if narrowed.is_empty() {
                break;
            }

            candidates = narrowed;
            lexeme = trial;
            self.consume();
        }

        if lexeme.is_empty() {
            return false;
        }

        match candidates.iter().find(|(op, _)| *op == lexeme) {
            Some(&(_, kind)) => self.token = Token::new(kind, lexeme, position),
            None => self.token = Token::new(TokenKind::Invalid, lexeme, position),
        }
        true
    }

    fn lex_other(&mut self) -> bool {
        match self.current_char {
            Some(c) if c.is_ascii_digit() || c == '.' => self.lex_number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.lex_keyword_or_variable(),
            Some('"') => self.lex_string(),
            Some('\'') => self.lex_char(),
            _ => false,
        }
    }

    /// A run of digits, optionally followed by `.` and more digits. A
    /// trailing `.` with no fractional digit is Invalid; a literal starting
    /// at `.` with digits after is a float.
    fn lex_number(&mut self) -> bool {
        let position = self.position();
        let mut lexeme = String::new();

        while let Some(c) = self.current_char {
            if !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            self.consume();
        }

        let mut kind = TokenKind::IntLit;

        if self.current_char == Some('.') {
            kind = TokenKind::FloatLit;
            lexeme.push('.');
            self.consume();
            while let Some(c) = self.current_char {
                if !c.is_ascii_digit() {
                    break;
                }
                lexeme.push(c);
                self.consume();
            }
        }

        if lexeme.ends_with('.') {
            kind = TokenKind::Invalid;
        }

        let literal = match kind {
            TokenKind::IntLit => match lexeme.parse::<i64>() {
                Ok(value) => Some(Literal::Int(value)),
                Err(_) => {
                    kind = TokenKind::Invalid;
                    None
                }
            },
            TokenKind::FloatLit => match lexeme.parse::<f64>() {
                Ok(value) => Some(Literal::Float(value)),
                Err(_) => {
                    kind = TokenKind::Invalid;
                    None
                }
            },
            _ => None,
        };

        self.token = Token {
            kind,
            lexeme,
            literal,
            position,
        };
        true
    }

    /// A letter or underscore followed by letters, digits, or underscores;
    /// an exact keyword-table hit yields the keyword kind, anything else is
    /// a variable.
    fn lex_keyword_or_variable(&mut self) -> bool {
        let position = self.position();
        let mut lexeme = String::new();

        while let Some(c) = self.current_char {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            lexeme.push(c);
            self.consume();
        }

        let kind = KEYWORD_LOOKUP
            .get(lexeme.as_str())
            .copied()
            .unwrap_or(TokenKind::Variable);

        self.token = Token::new(kind, lexeme, position);
        true
    }

    /// Everything between `"` and the next `"`, with no escape processing.
    /// If the stream ends before the closing quote the partial lexeme is
    /// Invalid.
    fn lex_string(&mut self) -> bool {
        let position = self.position();
        self.consume();

        let mut lexeme = String::new();
        loop {
            match self.current_char {
                None => {
                    self.token = Token::new(TokenKind::Invalid, lexeme, position);
                    return true;
                }
                Some('"') => break,
                Some(c) => {
                    lexeme.push(c);
                    self.consume();
                }
            }
        }
        self.consume();

        self.token = Token::new(TokenKind::StringLit, lexeme, position);
        true
    }

    /// A character literal: one raw character, or one of the defined
    /// two-character escapes. Anything else between the quotes is Invalid,
    /// as is running out of input before the closing quote.
    fn lex_char(&mut self) -> bool {
        let position = self.position();
        self.consume();

        let mut lexeme = String::new();
        loop {
            match self.current_char {
                None => {
                    self.token = Token::new(TokenKind::Invalid, lexeme, position);
                    return true;
                }
                Some('\'') => break,
                Some(c) => {
                    lexeme.push(c);
                    self.consume();
                }
            }
        }
        self.consume();

        let valid = match lexeme.chars().count() {
            1 => true,
            2 => CHAR_ESCAPES.contains(&lexeme.as_str()),
            _ => false,
        };

        let kind = if valid {
            TokenKind::CharLit
        } else {
            TokenKind::Invalid
        };
        self.token = Token::new(kind, lexeme, position);
        true
    }
}

/// Drains the lexer into a vector, ending with the `Eof` token.
///
/// The parser pulls tokens one at a time instead; this exists for the
/// binary's token echo and for tests.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token().clone();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
