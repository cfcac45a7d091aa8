use std::mem;

use crate::BrikError;
use crate::ast::{Location, Program};
use crate::lexer::{Lexer, Token, TokenKind};

mod declaration;
mod document;
mod value;

/// Deepest list/tuple/object nesting accepted before the parse fails.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a lexer with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, BrikError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Consume the current token and return it, pulling the next one in.
    pub(crate) fn bump(&mut self) -> Result<Token, BrikError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    pub(crate) fn peek(&self) -> &TokenKind {
        &self.current.kind
    }

    /// True when the current token has the same kind as `kind`, ignoring payloads.
    pub(crate) fn at(&self, kind: &TokenKind) -> bool {
        mem::discriminant(&self.current.kind) == mem::discriminant(kind)
    }

    /// Consume the current token if it matches `expected`, otherwise fail
    /// without advancing.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, BrikError> {
        if !self.at(&expected) {
            return Err(self.error(format!("expected {}", expected.describe()), 201));
        }
        self.bump()
    }

    /// Consume an identifier and return its text, or fail with `message`.
    pub(crate) fn ident(&mut self, message: &str, code: u32) -> Result<String, BrikError> {
        if let TokenKind::Ident(_) = self.peek() {
            if let TokenKind::Ident(name) = self.bump()?.kind {
                return Ok(name);
            }
        }
        Err(self.error(message, code))
    }

    /// Enter one level of container nesting.
    pub(crate) fn enter(&mut self) -> Result<(), BrikError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(format!("nesting deeper than {} levels", MAX_DEPTH), 205));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn location(&self) -> Location {
        Location::new(self.current.line, self.current.column)
    }

    pub(crate) fn error(&self, message: impl Into<String>, code: u32) -> BrikError {
        BrikError::syntax(message, self.current.line, self.current.column, code)
    }

    pub fn parse(&mut self) -> Result<Program, BrikError> {
        document::parse_program(self)
    }
}
