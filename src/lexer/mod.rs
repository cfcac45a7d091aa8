// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use log::trace;

use crate::BrikError;

mod scanner;
mod summary;
mod tokenizer;

pub use summary::TokenSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // --- punctuation ---
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Equals,
    Colon,

    // --- literals ---
    Ident(String),
    Number(f64),
    String(String),
    True,
    False,
    Null,

    // --- keywords ---
    Enum,
    Struct,

    End,
}

impl TokenKind {
    /// Upper-case kind name used in token listings.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Equals => "EQUALS",
            TokenKind::Colon => "COLON",
            TokenKind::Ident(_) => "IDENT",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::String(_) => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Enum => "ENUM",
            TokenKind::Struct => "STRUCT",
            TokenKind::End => "END",
        }
    }

    /// How the parser names this kind in "expected ..." messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Equals => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Enum => "'enum'",
            TokenKind::Struct => "'struct'",
            TokenKind::End => "end of input",
        }
    }
}

/// A token together with its source text and the position it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.kind.name(), self.lexeme)
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer {
            source,
            input: source.chars(),
            peek: None,
            offset: 0,
            line: 1,
            column: 1,
            finished: false,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Produce the next token. Once the input is exhausted every call
    /// returns an `End` token.
    pub fn next_token(&mut self) -> Result<Token, BrikError> {
        let token = tokenizer::next_token(self)?;
        trace!("token {} at {}:{}", token, token.line, token.column);
        Ok(token)
    }
}

/// Yields tokens up to and including the first `End`, then stops.
/// The first error also ends iteration.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, BrikError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(Token { kind: TokenKind::End, .. }) | Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

/// Lex a whole source into tokens, without the trailing `End`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, BrikError> {
    let mut tokens = Vec::new();
    for token in Lexer::new(source) {
        let token = token?;
        if token.kind == TokenKind::End {
            break;
        }
        tokens.push(token);
    }
    Ok(tokens)
}
