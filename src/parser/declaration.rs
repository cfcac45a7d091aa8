use log::warn;

use super::*;
use crate::ast::{EnumDef, StructDef};

/// `enum Name { KEY: 1, OTHER: 2 }`
pub(super) fn parse_enum(parser: &mut Parser) -> Result<EnumDef, BrikError> {
    let location = parser.location();
    parser.eat(TokenKind::Enum)?;
    let name = parser.ident("expected enum name", 201)?;
    parser.eat(TokenKind::LBrace)?;

    let mut entries = Vec::new();
    while let TokenKind::Ident(_) = parser.peek() {
        let key = parser.ident("expected enum entry", 201)?;
        parser.eat(TokenKind::Colon)?;
        let value = match parser.peek() {
            TokenKind::Number(n) => *n,
            _ => return Err(parser.error("expected number", 201)),
        };
        parser.bump()?;
        entries.push((key, value));

        if parser.at(&TokenKind::Comma) {
            parser.bump()?;
        } else {
            break;
        }
    }

    parser.eat(TokenKind::RBrace)?;
    Ok(EnumDef { name, entries, location })
}

/// `struct Name { a, b = 1, c: "x" }`
///
/// Field bodies are lenient: a default value after `=` or `:` is parsed
/// and dropped, and any token that cannot start a field is skipped with a
/// warning instead of failing the parse.
pub(super) fn parse_struct(parser: &mut Parser) -> Result<StructDef, BrikError> {
    let location = parser.location();
    parser.eat(TokenKind::Struct)?;
    let name = parser.ident("expected struct name", 201)?;
    parser.eat(TokenKind::LBrace)?;

    let mut fields = Vec::new();
    loop {
        match parser.peek() {
            TokenKind::RBrace | TokenKind::End => break,
            TokenKind::Ident(_) => {
                let field = parser.ident("expected field name", 201)?;
                if matches!(parser.peek(), TokenKind::Equals | TokenKind::Colon) {
                    parser.bump()?;
                    value::parse_expr(parser)?;
                    if parser.at(&TokenKind::Comma) {
                        parser.bump()?;
                    }
                }
                fields.push(field);
            }
            TokenKind::Comma => {
                parser.bump()?;
            }
            _ => {
                let skipped = parser.bump()?;
                warn!(
                    "skipping unexpected token {} in struct '{}' at line {}, col {}",
                    skipped, name, skipped.line, skipped.column
                );
            }
        }
    }

    parser.eat(TokenKind::RBrace)?;
    Ok(StructDef { name, fields, location })
}
